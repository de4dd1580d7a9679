//! Signer recovery against a candidate list of public keys.

use curve::ScalarField;
use rayon::prelude::*;
use tracing::debug;

use crate::errors::EcdsaError;
use crate::keys::VerifyingKey;
use crate::signatures::Signature;

/// Returns the index of the first key in `candidates` under which `signature` verifies.
///
/// The signature is range-checked once before the scan, so a malformed signature fails
/// even when `candidates` is empty. Duplicated keys resolve to the lowest index.
///
/// # Errors
///
/// - [`EcdsaError::MalformedSignature`] if `r` or `s` is outside `[1, n - 1]`
/// - [`EcdsaError::KeyNotFound`] if no candidate verifies
pub fn recover_public_key_index(
    signature: &Signature,
    msg_hash: &ScalarField,
    candidates: &[VerifyingKey],
) -> Result<usize, EcdsaError> {
    signature.to_scalars()?;

    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.verify(msg_hash, signature)? {
            debug!(index, candidates = candidates.len(), "recovered signer");
            return Ok(index);
        }
    }

    debug!(candidates = candidates.len(), "no candidate verifies");
    Err(EcdsaError::KeyNotFound)
}

/// Parallel form of [`recover_public_key_index`] with identical results.
///
/// Candidates are verified across the rayon thread pool; the lowest matching index is
/// reported, as in the sequential scan.
pub fn recover_public_key_index_par(
    signature: &Signature,
    msg_hash: &ScalarField,
    candidates: &[VerifyingKey],
) -> Result<usize, EcdsaError> {
    signature.to_scalars()?;

    let found = candidates
        .par_iter()
        .position_first(|candidate| matches!(candidate.verify(msg_hash, signature), Ok(true)));

    match found {
        Some(index) => {
            debug!(index, candidates = candidates.len(), "recovered signer");
            Ok(index)
        }
        None => {
            debug!(candidates = candidates.len(), "no candidate verifies");
            Err(EcdsaError::KeyNotFound)
        }
    }
}
