//! Moves the `s^{-1}` of ECDSA verification out of the circuit.
//!
//! Verification needs `R = s^{-1} * (z * G + r * Q)`. Splitting it into two points computed
//! off-circuit leaves the circuit with one point addition and one coordinate comparison.

use curve::{EdwardsPoint, ScalarField, WeierstrassPoint};
use ecdsa::{Signature, VerifyingKey};
use num_bigint::BigUint;
use tracing::info_span;

use crate::errors::Result;

/// The pair `(T, U)` handed to the circuit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TuPoints {
    pub t: WeierstrassPoint,
    pub u: WeierstrassPoint,
}

impl TuPoints {
    /// `T + U`.
    pub fn nonce_point(&self) -> WeierstrassPoint {
        self.t + self.u
    }

    /// Whether `T + U` is finite with `x mod n == r`.
    pub fn matches_r(&self, r: &BigUint) -> bool {
        let sum = self.nonce_point();
        if sum.is_infinity() {
            return false;
        }
        curve::to_biguint(&sum.x()) % ScalarField::modulus() == *r
    }

    /// Both points in the circuit's twisted Edwards form.
    pub fn to_edwards(&self) -> Result<(EdwardsPoint, EdwardsPoint)> {
        Ok((self.t.to_edwards()?, self.u.to_edwards()?))
    }
}

/// `T = (z * w) * G` and `U = (r * w) * Q` with `w = s^{-1} mod n`.
///
/// For a signature that verifies under `public_key`, `T + U` is the signer's nonce point.
/// Nothing is checked beyond the range of `r` and `s`; call `verify` first.
pub fn compute_tu(
    signature: &Signature,
    msg_hash: &ScalarField,
    public_key: &VerifyingKey,
) -> Result<TuPoints> {
    let _span = info_span!("tu_generation").entered();

    let (r, s) = signature.to_scalars()?;
    let w = s.try_inverse()?;

    Ok(TuPoints {
        t: WeierstrassPoint::generator() * (*msg_hash * w),
        u: *public_key.as_point() * (r * w),
    })
}

/// `T = r^{-1} * R` and `U = -(r^{-1} * z) * G` with `r = R.x mod n`.
///
/// This form needs only the nonce point and satisfies `s * T + U == Q` for the signer's key.
/// Fails with `DivisionByZero` when `R.x mod n == 0`.
pub fn compute_tu_from_nonce_point(
    nonce_point: &WeierstrassPoint,
    msg_hash: &ScalarField,
) -> Result<TuPoints> {
    let _span = info_span!("tu_generation").entered();

    let r = ScalarField::from_biguint(&curve::to_biguint(&nonce_point.x()));
    let r_inv = r.try_inverse()?;

    Ok(TuPoints {
        t: *nonce_point * r_inv,
        u: WeierstrassPoint::generator() * -(r_inv * *msg_hash),
    })
}
