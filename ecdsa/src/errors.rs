//! Error types for the ECDSA engine.

use curve::CurveError;
use thiserror::Error;

/// Errors that can occur during signing, verification and signer recovery.
///
/// A signature that is well formed but does not verify is not an error: `verify`
/// returns `Ok(false)` so that a recovery scan can treat it as an ordinary branch. The same
/// holds for a verifying key at infinity or off the curve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcdsaError {
    /// A signature component lies outside `[1, n - 1]`.
    #[error("signature component `{component}` is outside [1, n - 1]")]
    MalformedSignature { component: &'static str },

    /// No candidate public key verifies the signature.
    #[error("no candidate public key verifies the signature")]
    KeyNotFound,

    /// The signing nonce produced `r = 0` or `s = 0`.
    ///
    /// Only reachable through [`SigningKey::sign_with_nonce`](crate::SigningKey::sign_with_nonce);
    /// randomized signing retries with a fresh nonce.
    #[error("nonce yields a degenerate signature")]
    DegenerateNonce,

    /// A hex string could not be decoded.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Field or point failure, including `DivisionByZero` and `InvalidPoint`.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
