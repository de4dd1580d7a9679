//! ECDSA over the Baby Jubjub curve.
//!
//! This library implements:
//! - Public key derivation `Q = sk * G` on the short Weierstrass form of Baby Jubjub
//! - Signing and verification of pre-hashed messages (`z` is already reduced modulo `n`)
//! - Reconstruction of the nonce point `R = u1 * G + u2 * Q` used by membership proofs
//! - Signer recovery: finding which key in a candidate list produced a signature
//!
//! Signatures carry no recovery bit, so the signer is recovered by trying each candidate
//! key in order.
//!
//! # Example
//!
//! ```
//! use curve::ScalarField;
//! use ecdsa::{SigningKey, recover_public_key_index};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let keys: Vec<SigningKey> = (0..4).map(|_| SigningKey::random(&mut rng)).collect();
//! let candidates: Vec<_> = keys.iter().map(SigningKey::verifying_key).collect();
//!
//! let msg_hash = ScalarField::from_u64(1234);
//! let signature = keys[2].sign(&mut rng, &msg_hash).expect("signing failed");
//!
//! assert!(candidates[2].verify(&msg_hash, &signature).expect("verification failed"));
//! assert_eq!(recover_public_key_index(&signature, &msg_hash, &candidates), Ok(2));
//! ```
//!
//! # Security Considerations
//!
//! - Each signature must use a fresh random nonce; [`SigningKey::sign_with_nonce`] is for fixtures
//! - Scalar multiplication runs a fixed number of iterations, but field arithmetic is not audited
//!   for constant time

mod constants;
mod errors;
mod keys;
mod recovery;
mod signatures;

#[cfg(test)]
mod tests;

pub use constants::{PK_HEX_LEN, PK_SIZE, SIG_COMPONENT_SIZE, SK_SIZE};
pub use errors::EcdsaError;
pub use keys::{SigningKey, VerifyingKey, derive_public_key};
pub use recovery::{recover_public_key_index, recover_public_key_index_par};
pub use signatures::{Signature, recover_nonce_point};
