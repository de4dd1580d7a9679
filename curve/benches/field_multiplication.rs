use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{try_inverse, BaseField, RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_base_field_mul(c: &mut Criterion) {
    c.bench_function("base_field_mul", |bencher| {
        let a = BaseField::from(123456789u64);
        let b = BaseField::from(987654321u64);
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_base_field_inverse(c: &mut Criterion) {
    c.bench_function("base_field_inverse", |bencher| {
        let a = BaseField::from(168700u64);
        bencher.iter(|| black_box(try_inverse(black_box(&a))))
    });
}

fn bench_scalar_field_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = ScalarField::random(&mut rng);
    let b = ScalarField::random(&mut rng);
    c.bench_function("scalar_field_mul", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

fn bench_scalar_field_inverse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = ScalarField::random(&mut rng);
    c.bench_function("scalar_field_inverse", |bencher| {
        bencher.iter(|| black_box(black_box(a).try_inverse()))
    });
}

criterion_group!(
    benches,
    bench_base_field_mul,
    bench_base_field_inverse,
    bench_scalar_field_mul,
    bench_scalar_field_inverse
);
criterion_main!(benches);
