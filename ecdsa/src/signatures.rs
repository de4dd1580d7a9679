//! Signature type and nonce-point reconstruction.

use curve::{ScalarField, WeierstrassPoint};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::constants::SIG_COMPONENT_SIZE;
use crate::errors::EcdsaError;
use crate::keys::VerifyingKey;

/// An ECDSA signature `(r, s)` over Baby Jubjub.
///
/// The components are kept as raw integers so that a value outside `[1, n - 1]` is
/// reported as [`EcdsaError::MalformedSignature`] rather than silently reduced. No
/// recovery bit is carried; the signer is found by searching a candidate list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// `R.x mod n`, where `R = k * G` for the signing nonce `k`
    pub r: BigUint,
    /// `k^{-1} * (z + r * sk) mod n`
    pub s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Parse big-endian hex components, with or without a `0x` prefix.
    pub fn from_hex(r: &str, s: &str) -> Result<Self, EcdsaError> {
        Ok(Self {
            r: parse_hex_integer(r)?,
            s: parse_hex_integer(s)?,
        })
    }

    /// Zero-padded big-endian hex of `(r, s)`, the form [`Signature::from_hex`] reads.
    pub fn to_hex(&self) -> (String, String) {
        let width = 2 * SIG_COMPONENT_SIZE;
        (
            format!("{:0>width$}", self.r.to_str_radix(16)),
            format!("{:0>width$}", self.s.to_str_radix(16)),
        )
    }

    /// Range-check both components and return them as scalars.
    pub fn to_scalars(&self) -> Result<(ScalarField, ScalarField), EcdsaError> {
        let n = ScalarField::modulus();
        let zero = BigUint::from(0u8);
        let in_range = |v: &BigUint| *v > zero && *v < n;

        if !in_range(&self.r) {
            return Err(EcdsaError::MalformedSignature { component: "r" });
        }
        if !in_range(&self.s) {
            return Err(EcdsaError::MalformedSignature { component: "s" });
        }

        Ok((
            ScalarField::from_biguint(&self.r),
            ScalarField::from_biguint(&self.s),
        ))
    }
}

fn parse_hex_integer(s: &str) -> Result<BigUint, EcdsaError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| EcdsaError::InvalidEncoding(format!("`{s}` is not a hex integer")))
}

/// Reconstructs the verification nonce point `R' = u1 * G + u2 * Q`.
///
/// With `w = s^{-1} mod n`, `u1 = z * w` and `u2 = r * w`. For a valid signature this is the
/// signer's nonce point `k * G`, and `R'.x mod n == r`.
///
/// # Errors
///
/// - [`EcdsaError::MalformedSignature`] if `r` or `s` is outside `[1, n - 1]`
/// - [`EcdsaError::Curve`] with `DivisionByZero` if `s` has no inverse
pub fn recover_nonce_point(
    signature: &Signature,
    msg_hash: &ScalarField,
    public_key: &VerifyingKey,
) -> Result<WeierstrassPoint, EcdsaError> {
    let (r, s) = signature.to_scalars()?;
    let w = s.try_inverse()?;
    let u1 = *msg_hash * w;
    let u2 = r * w;

    Ok(WeierstrassPoint::double_scalar_mul_basepoint(
        &u1,
        &u2,
        public_key.as_point(),
    ))
}

/// `x mod n` for the x-coordinate of a finite point.
pub(crate) fn x_mod_order(point: &WeierstrassPoint) -> ScalarField {
    ScalarField::from_biguint(&curve::to_biguint(&point.x()))
}
