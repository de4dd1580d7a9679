//! Constants used by the ECDSA implementation.

/// Size of a serialized public verifying key in bytes.
///
/// A verifying key is an uncompressed Weierstrass point: a `0x04` tag followed by
/// the 32-byte big-endian x and y coordinates.
pub const PK_SIZE: usize = curve::UNCOMPRESSED_LEN;

/// Length of a verifying key in hex characters.
pub const PK_HEX_LEN: usize = 2 * PK_SIZE;

/// Size of a serialized secret signing key in bytes.
pub const SK_SIZE: usize = curve::SCALAR_BYTES;

/// Size of one signature component (`r` or `s`) in bytes.
pub const SIG_COMPONENT_SIZE: usize = curve::SCALAR_BYTES;
