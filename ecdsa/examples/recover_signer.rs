use curve::ScalarField;
use ecdsa::{Signature, SigningKey, VerifyingKey, recover_public_key_index};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let group: Vec<SigningKey> = (0..8).map(|_| SigningKey::random(&mut rng)).collect();

    // Public keys circulate as uncompressed hex.
    let published: Vec<String> = group
        .iter()
        .map(|sk| sk.verifying_key().to_hex().expect("encode"))
        .collect();

    let msg_hash = ScalarField::from_u64(0x5eed);
    let sig = group[5].sign(&mut rng, &msg_hash).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let candidates: Vec<VerifyingKey> = published
        .iter()
        .map(|h| VerifyingKey::from_hex(h).expect("decode"))
        .collect();
    let received: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let index = recover_public_key_index(&received, &msg_hash, &candidates).expect("recover");
    assert_eq!(index, 5);
    println!("signer is member #{index}: {}", published[index]);
}
