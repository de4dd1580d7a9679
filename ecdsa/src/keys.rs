//! Signing and verifying keys for ECDSA over Baby Jubjub.

use curve::{Group, RandomField, ScalarField, WeierstrassPoint};
use num_bigint::BigUint;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::SK_SIZE;
use crate::errors::EcdsaError;
use crate::signatures::{Signature, recover_nonce_point, x_mod_order};

/// A secret signing key: a raw scalar modulo the subgroup order.
///
/// Keys are not clamped; the scalar is used as given after reduction modulo `n`.
///
/// # Example
///
/// ```
/// use ecdsa::SigningKey;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let signing_key = SigningKey::random(&mut rng);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    scalar: ScalarField,
}

/// A public verifying key: a point on the Weierstrass form of the curve.
///
/// Verifying keys travel between collaborators as uncompressed hex strings
/// (`04 || x || y`), see [`VerifyingKey::from_hex`].
///
/// A key at infinity or off the curve verifies nothing: [`VerifyingKey::verify`] returns
/// `Ok(false)` for it rather than an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: WeierstrassPoint,
}

/// Derives the public key `(sk mod n) * G`.
pub fn derive_public_key(private_key: &ScalarField) -> WeierstrassPoint {
    WeierstrassPoint::generator().scalar_mul(private_key)
}

impl SigningKey {
    /// Generates a random signing key using the provided random number generator.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: ScalarField::random(rng),
        }
    }

    pub fn from_scalar(scalar: ScalarField) -> Self {
        Self { scalar }
    }

    /// Reduces `value` modulo `n`.
    pub fn from_biguint(value: &BigUint) -> Self {
        Self::from_scalar(ScalarField::from_biguint(value))
    }

    /// Parses a big-endian hex private key, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, EcdsaError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| EcdsaError::InvalidEncoding(e.to_string()))?;
        Ok(Self::from_scalar(ScalarField::from_be_bytes_mod_order(&bytes)))
    }

    /// Big-endian encoding of the scalar.
    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.scalar.to_be_bytes()
    }

    pub fn as_scalar(&self) -> &ScalarField {
        &self.scalar
    }

    /// Derives the public verifying key `G * sk`.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            point: derive_public_key(&self.scalar),
        }
    }

    /// Signs a pre-hashed message with a fresh random nonce.
    ///
    /// `msg_hash` must already be reduced modulo `n`; hashing arbitrary messages is the
    /// caller's job.
    pub fn sign<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        msg_hash: &ScalarField,
    ) -> Result<Signature, EcdsaError> {
        loop {
            let nonce = ScalarField::random(rng);
            match self.sign_with_nonce(&nonce, msg_hash) {
                Err(EcdsaError::DegenerateNonce) => continue,
                result => return result,
            }
        }
    }

    /// Signs with a caller-chosen nonce `k`:
    /// 1. `R = k * G`, `r = R.x mod n`
    /// 2. `s = k^{-1} * (z + r * sk) mod n`
    ///
    /// Reusing a nonce across two messages reveals the signing key. This entry point
    /// exists for reproducible fixtures.
    pub fn sign_with_nonce(
        &self,
        nonce: &ScalarField,
        msg_hash: &ScalarField,
    ) -> Result<Signature, EcdsaError> {
        if nonce.is_zero() {
            return Err(EcdsaError::DegenerateNonce);
        }

        let nonce_point = derive_public_key(nonce);
        let r = x_mod_order(&nonce_point);
        if r.is_zero() {
            return Err(EcdsaError::DegenerateNonce);
        }

        let s = nonce.try_inverse()? * (*msg_hash + r * self.scalar);
        if s.is_zero() {
            return Err(EcdsaError::DegenerateNonce);
        }

        Ok(Signature::new(r.to_biguint(), s.to_biguint()))
    }
}

impl VerifyingKey {
    pub fn from_point(point: WeierstrassPoint) -> Self {
        Self { point }
    }

    /// Parses an uncompressed hex public key (`04 || x || y`).
    ///
    /// Fails with [`curve::CurveError::InvalidEncoding`] on a bad length, prefix or
    /// off-curve coordinates.
    pub fn from_hex(s: &str) -> Result<Self, EcdsaError> {
        Ok(Self {
            point: WeierstrassPoint::from_uncompressed_hex(s)?,
        })
    }

    /// Parses a candidate key as published, without the curve check.
    ///
    /// Bad length, prefix or hex still fail; coordinates `>= p` are reduced. An off-curve
    /// key parses and then never verifies, so a recovery scan moves past it.
    pub fn from_hex_unchecked(s: &str) -> Result<Self, EcdsaError> {
        Ok(Self {
            point: WeierstrassPoint::from_uncompressed_hex_unchecked(s)?,
        })
    }

    pub fn to_hex(&self) -> Result<String, EcdsaError> {
        Ok(self.point.to_uncompressed_hex()?)
    }

    pub fn as_point(&self) -> &WeierstrassPoint {
        &self.point
    }

    /// Verifies a signature on a pre-hashed message.
    ///
    /// Computes `R' = (z * s^{-1}) * G + (r * s^{-1}) * Q` and accepts iff `R'` is finite and
    /// `R'.x mod n == r`.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the signature is valid
    /// - `Ok(false)` if it is well formed but invalid, or if this key is the point at infinity
    ///   or off the curve
    /// - `Err(EcdsaError::MalformedSignature)` if `r` or `s` is outside `[1, n - 1]`
    pub fn verify(&self, msg_hash: &ScalarField, sig: &Signature) -> Result<bool, EcdsaError> {
        sig.to_scalars()?;
        if self.point.is_infinity() || !self.point.is_on_curve() {
            return Ok(false);
        }

        let nonce_point = recover_nonce_point(sig, msg_hash, self)?;
        if nonce_point.is_infinity() {
            return Ok(false);
        }

        let (r, _) = sig.to_scalars()?;
        Ok(x_mod_order(&nonce_point) == r)
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}

impl From<WeierstrassPoint> for VerifyingKey {
    fn from(point: WeierstrassPoint) -> Self {
        Self::from_point(point)
    }
}
