//! Error type shared by the field and point code.

use thiserror::Error;

/// Failures of field inversion, point construction and point encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Coordinates are not on the curve, or the point lies outside the domain of a
    /// birational map.
    #[error("point is not on the curve or outside the conversion domain")]
    InvalidPoint,

    /// Modular inverse of the zero element.
    #[error("division by zero")]
    DivisionByZero,

    /// A serialized point or field element could not be decoded.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
}
