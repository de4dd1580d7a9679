//! Error types for membership proof assembly.

use curve::CurveError;
use ecdsa::EcdsaError;
use thiserror::Error;

/// Errors raised while building Merkle proofs, assembling circuit inputs or talking to a
/// proving backend.
#[derive(Debug, Error)]
pub enum MembershipError {
    /// The signature is well formed but does not verify under the signer's key.
    #[error("signature does not verify under public key #{index}")]
    InvalidSignature { index: usize },

    #[error("index {index} is out of range for {len} public keys")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{leaves} leaves do not fit in a tree with capacity {capacity}")]
    TooManyLeaves { leaves: usize, capacity: usize },

    #[error("tree depth {0} is not supported")]
    InvalidDepth(usize),

    #[error("poseidon hash failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Ecdsa(#[from] EcdsaError),

    #[error(transparent)]
    Curve(#[from] CurveError),

    /// The proving backend reported a failure.
    #[error("proving backend: {0}")]
    Backend(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MembershipError>;
