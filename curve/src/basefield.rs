use ark_ff::{BigInteger, Field, PrimeField};
use num_bigint::BigUint;

use crate::CurveError;

/// BN254 scalar field, which is the coordinate field of Baby Jubjub.
pub type BaseField = ark_bn254::Fr;

/// Width of a canonical big-endian base field encoding.
pub const BASE_FIELD_BYTES: usize = 32;

/// Inverse of `x`, or `DivisionByZero` for zero.
#[inline]
pub fn try_inverse(x: &BaseField) -> Result<BaseField, CurveError> {
    x.inverse().ok_or(CurveError::DivisionByZero)
}

/// The modulus `p` as an unbounded integer.
pub fn base_modulus() -> BigUint {
    BaseField::MODULUS.into()
}

pub fn to_biguint(x: &BaseField) -> BigUint {
    x.into_bigint().into()
}

/// Strict conversion: values `>= p` are rejected instead of reduced.
pub fn from_biguint(value: &BigUint) -> Result<BaseField, CurveError> {
    if *value >= base_modulus() {
        return Err(CurveError::InvalidEncoding(format!(
            "{value} is not a canonical base field element"
        )));
    }
    Ok(BaseField::from(value.clone()))
}

pub fn to_be_bytes(x: &BaseField) -> [u8; BASE_FIELD_BYTES] {
    let bytes = x.into_bigint().to_bytes_be();
    let mut out = [0u8; BASE_FIELD_BYTES];
    out[BASE_FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    out
}

pub fn from_be_bytes(bytes: &[u8]) -> Result<BaseField, CurveError> {
    if bytes.len() != BASE_FIELD_BYTES {
        return Err(CurveError::InvalidEncoding(format!(
            "expected {BASE_FIELD_BYTES} bytes, got {}",
            bytes.len()
        )));
    }
    from_biguint(&BigUint::from_bytes_be(bytes))
}

/// Decimal rendering used by the circuit toolchain (`"0"` for zero).
pub fn to_decimal_string(x: &BaseField) -> String {
    to_biguint(x).to_string()
}

pub fn from_decimal_str(s: &str) -> Result<BaseField, CurveError> {
    let value: BigUint = s
        .parse()
        .map_err(|_| CurveError::InvalidEncoding(format!("`{s}` is not a decimal integer")))?;
    from_biguint(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{One, Zero};

    #[test]
    fn test_inverse_of_zero_fails() {
        assert_eq!(
            try_inverse(&BaseField::zero()),
            Err(CurveError::DivisionByZero)
        );
    }

    #[test]
    fn test_inverse() {
        let a = BaseField::from(168700u64);
        let a_inv = try_inverse(&a).unwrap();
        assert_eq!(a * a_inv, BaseField::one());
    }

    #[test]
    fn test_bytes_roundtrip_and_width() {
        let a = BaseField::from(5u64);
        let bytes = to_be_bytes(&a);
        assert_eq!(bytes[31], 5);
        assert!(bytes[..31].iter().all(|b| *b == 0));
        assert_eq!(from_be_bytes(&bytes).unwrap(), a);
    }

    #[test]
    fn test_non_canonical_rejected() {
        let p = base_modulus();
        assert!(from_biguint(&p).is_err());
        assert!(from_decimal_str("21888242871839275222246405745257275088548364400416034343698204186575808495617").is_err());
        assert!(from_decimal_str("not a number").is_err());
    }

    #[test]
    fn test_decimal_zero() {
        assert_eq!(to_decimal_string(&BaseField::zero()), "0");
        assert_eq!(from_decimal_str("0").unwrap(), BaseField::zero());
    }
}
