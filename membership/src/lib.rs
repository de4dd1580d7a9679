//! # Anonymous Public-Key Set Membership
//!
//! Builds the inputs of a Groth16 circuit proving that an ECDSA signature over Baby Jubjub
//! was produced by one of a list of public keys, without revealing which one.
//!
//! ## Pipeline
//!
//! 1. **Verify** the signature under the signer's key (`ecdsa`). A failing signature is fatal here.
//! 2. **Transform**: compute `T = (z * s^{-1}) * G` and `U = (r * s^{-1}) * Q` so that the circuit
//!    checks `T + U` against `r` without inverting anything modulo `n`.
//! 3. **Commit**: hash every key into a fixed-depth Poseidon Merkle tree and take the signer's
//!    inclusion path.
//! 4. **Assemble** `{ s, Tx, Ty, Ux, Uy, root, pathIndices, siblings }` and hand it to a
//!    [`ProvingBackend`].
//!
//! ```rust,no_run
//! use curve::ScalarField;
//! use ecdsa::{Signature, VerifyingKey};
//! use membership::{build_membership_inputs, MembershipConfig};
//!
//! # fn run(signature: Signature, keys: Vec<VerifyingKey>) -> membership::Result<()> {
//! let config = MembershipConfig::default();
//! let inputs = build_membership_inputs(&signature, &keys, 2, &ScalarField::from_u64(0), &config)?;
//! println!("{}", inputs.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Leaves
//!
//! A key's leaf is `Poseidon(x, y)` of the key in twisted Edwards form, with circomlib's Poseidon
//! parameters. Unused slots hold `0`. The default depth is 8 (256 keys) and must match the
//! compiled circuit.
//!
//! ## Logging
//!
//! Spans `tu_generation`, `merkle_proof`, `proving` and `verification` are emitted through
//! `tracing`; install a subscriber to see them.

mod backend;
mod config;
mod errors;
mod inputs;
mod merkle;
mod poseidon_hash;
mod transform;

pub use backend::{
    prove_membership, verify_membership, ArtifactLocation, CircuitArtifacts, ProvingBackend, Zkp,
    VKEY_FILE, WASM_FILE, ZKEY_FILE,
};
pub use config::{ArtifactSource, MembershipConfig, DEFAULT_ARTIFACT_BASE_URL};
pub use errors::{MembershipError, Result};
pub use inputs::{build_membership_inputs, MembershipProofInputs};
pub use merkle::{
    build_proof, tree_capacity, MerkleProof, MerkleTree, DEFAULT_LEAF, DEFAULT_TREE_DEPTH,
    MAX_TREE_DEPTH,
};
pub use poseidon_hash::{hash_public_key, PairHasher};
pub use transform::{compute_tu, compute_tu_from_nonce_point, TuPoints};
