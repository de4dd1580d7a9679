use crate::group::{bit_at, ScalarBits};
use crate::scalarfield::SCALAR_BITS;
use crate::{ScalarField, WeierstrassPoint};

/// Compute a * G + b * P with a joint (Shamir) ladder over {O, G, P, G + P}.
pub fn double_scalar_mul_basepoint(
    a: &ScalarField,
    b: &ScalarField,
    point: &WeierstrassPoint,
) -> WeierstrassPoint {
    let g = WeierstrassPoint::generator();
    let table = [WeierstrassPoint::INFINITY, g, *point, g + *point];

    let a_limbs = a.to_u64_limbs();
    let b_limbs = b.to_u64_limbs();
    let mut result = WeierstrassPoint::INFINITY;

    for i in (0..SCALAR_BITS).rev() {
        result = result.double();

        let window = bit_at(&a_limbs, i) | (bit_at(&b_limbs, i) << 1);
        if window != 0 {
            result += table[window];
        }
    }

    result
}
