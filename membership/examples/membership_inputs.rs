//! Recovers the signer of a signature among published keys and prints the circuit inputs.
//!
//! Run with `RUST_LOG=debug` to see the span timings.

use curve::ScalarField;
use ecdsa::{recover_public_key_index, SigningKey, VerifyingKey};
use membership::{build_membership_inputs, MembershipConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn main() -> membership::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => MembershipConfig::load(path)?,
        None => MembershipConfig::default(),
    };

    let mut rng = StdRng::seed_from_u64(2024);
    let signers: Vec<SigningKey> = (0..10).map(|_| SigningKey::random(&mut rng)).collect();
    let published: Vec<String> = signers
        .iter()
        .map(|sk| sk.verifying_key().to_hex())
        .collect::<Result<_, _>>()?;

    let msg_hash = ScalarField::from_u64(0xcafe);
    let signature = signers[6].sign(&mut rng, &msg_hash)?;

    let keys: Vec<VerifyingKey> = published
        .iter()
        .map(|h| VerifyingKey::from_hex(h))
        .collect::<Result<_, _>>()?;
    let index = recover_public_key_index(&signature, &msg_hash, &keys)?;

    let inputs = build_membership_inputs(&signature, &keys, index, &msg_hash, &config)?;
    println!("{}", inputs.to_json_pretty()?);
    Ok(())
}
