//! Baby Jubjub over the BN254 scalar field, in short Weierstrass and twisted Edwards form.
//!
//! This crate provides both point representations with a birational map between them,
//! the scalar field of the prime-order subgroup, uncompressed point encoding and helpers
//! for random sampling. ECDSA is computed on the Weierstrass form; the membership circuit
//! consumes Edwards coordinates. The curve parameters and generators live in `params`.

mod basefield;
mod edwards;
mod encoding;
mod errors;
mod group;
mod msm;
pub mod params;
mod random;
mod scalarfield;
pub mod serde_decimal;
mod weierstrass;

pub use basefield::{
    base_modulus, from_be_bytes, from_biguint, from_decimal_str, to_be_bytes, to_biguint,
    to_decimal_string, try_inverse, BaseField, BASE_FIELD_BYTES,
};
pub use edwards::EdwardsPoint;
pub use encoding::{UNCOMPRESSED_LEN, UNCOMPRESSED_PREFIX};
pub use errors::CurveError;
pub use group::{Group, ScalarBits};
pub use msm::double_scalar_mul_basepoint;
pub use random::RandomField;
pub use scalarfield::{ScalarField, SCALAR_BITS, SCALAR_BYTES};
pub use weierstrass::WeierstrassPoint;
