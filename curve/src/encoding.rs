//! Uncompressed public-key encoding: `04 || x || y` with 32-byte big-endian coordinates.

use ark_ff::PrimeField;

use crate::basefield::{from_be_bytes, to_be_bytes, BASE_FIELD_BYTES};
use crate::{BaseField, CurveError, WeierstrassPoint};

pub const UNCOMPRESSED_PREFIX: u8 = 0x04;

/// Length of an uncompressed point in bytes.
pub const UNCOMPRESSED_LEN: usize = 1 + 2 * BASE_FIELD_BYTES;

impl WeierstrassPoint {
    /// The point at infinity has no uncompressed encoding.
    pub fn to_uncompressed_bytes(&self) -> Result<[u8; UNCOMPRESSED_LEN], CurveError> {
        if self.is_infinity() {
            return Err(CurveError::InvalidPoint);
        }

        let mut out = [0u8; UNCOMPRESSED_LEN];
        out[0] = UNCOMPRESSED_PREFIX;
        out[1..1 + BASE_FIELD_BYTES].copy_from_slice(&to_be_bytes(&self.x()));
        out[1 + BASE_FIELD_BYTES..].copy_from_slice(&to_be_bytes(&self.y()));
        Ok(out)
    }

    pub fn from_uncompressed_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        let (x, y) = split_uncompressed(bytes)?;
        let x = from_be_bytes(x)?;
        let y = from_be_bytes(y)?;
        Self::new(x, y)
            .map_err(|_| CurveError::InvalidEncoding("point is not on the curve".to_string()))
    }

    /// Length and prefix are checked; coordinates are reduced modulo `p` and the curve
    /// equation is not checked.
    ///
    /// For candidate lists taken as published, where a bad entry must not abort the scan.
    /// The result may be off the curve, see [`WeierstrassPoint::is_on_curve`].
    pub fn from_uncompressed_bytes_unchecked(bytes: &[u8]) -> Result<Self, CurveError> {
        let (x, y) = split_uncompressed(bytes)?;
        Ok(Self::new_unchecked(
            BaseField::from_be_bytes_mod_order(x),
            BaseField::from_be_bytes_mod_order(y),
        ))
    }

    pub fn to_uncompressed_hex(&self) -> Result<String, CurveError> {
        Ok(hex::encode(self.to_uncompressed_bytes()?))
    }

    /// Parse a lowercase or uppercase hex string, with or without a `0x` prefix.
    pub fn from_uncompressed_hex(s: &str) -> Result<Self, CurveError> {
        Self::from_uncompressed_bytes(&decode_hex(s)?)
    }

    pub fn from_uncompressed_hex_unchecked(s: &str) -> Result<Self, CurveError> {
        Self::from_uncompressed_bytes_unchecked(&decode_hex(s)?)
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>, CurveError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits).map_err(|e| CurveError::InvalidEncoding(e.to_string()))
}

fn split_uncompressed(bytes: &[u8]) -> Result<(&[u8], &[u8]), CurveError> {
    if bytes.len() != UNCOMPRESSED_LEN {
        return Err(CurveError::InvalidEncoding(format!(
            "expected {UNCOMPRESSED_LEN} bytes, got {}",
            bytes.len()
        )));
    }
    if bytes[0] != UNCOMPRESSED_PREFIX {
        return Err(CurveError::InvalidEncoding(format!(
            "unexpected prefix 0x{:02x}",
            bytes[0]
        )));
    }
    Ok(bytes[1..].split_at(BASE_FIELD_BYTES))
}
