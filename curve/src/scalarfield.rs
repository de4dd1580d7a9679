//! Scalar field of the Baby Jubjub prime-order subgroup.
//! n = 0x060c89ce5c263405370a08b6d0302b0bab3eedb83920ee0a677297dc392126f1
//!
//! Arithmetic is arkworks' Montgomery backend; this wrapper adds the strict conversions,
//! sampling and decimal serde the rest of the workspace expects.

use ark_ff::fields::{Fp256, MontBackend, MontConfig};
use ark_ff::{BigInt, BigInteger, Field, PrimeField, Zero};
use core::fmt::{self, Debug, Display, Formatter};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CurveError;

#[derive(MontConfig)]
#[modulus = "2736030358979909402780800718157159386076813972158567259200215660948447373041"]
#[generator = "31"]
pub struct SubgroupOrderConfig;

type OrderField = Fp256<MontBackend<SubgroupOrderConfig, 4>>;

/// Scalar field element for the curve.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ScalarField(OrderField);

/// Bit length of the subgroup order.
pub const SCALAR_BITS: usize = 251;

/// Width of a canonical big-endian scalar encoding.
pub const SCALAR_BYTES: usize = 32;

impl ScalarField {
    pub const ZERO: Self = ScalarField(<OrderField as Field>::ZERO);

    pub const ONE: Self = ScalarField(<OrderField as Field>::ONE);

    #[inline]
    pub fn from_u64(val: u64) -> Self {
        Self(OrderField::from(val))
    }

    /// Reduce an arbitrary integer modulo n.
    pub fn from_biguint(value: &BigUint) -> Self {
        Self(OrderField::from(value.clone()))
    }

    /// Interpret big-endian bytes as an integer and reduce it modulo n.
    pub fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
        Self(OrderField::from_be_bytes_mod_order(bytes))
    }

    /// Canonical little-endian limbs.
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        self.0.into_bigint().0
    }

    pub fn to_biguint(&self) -> BigUint {
        self.0.into_bigint().into()
    }

    pub fn to_be_bytes(&self) -> [u8; SCALAR_BYTES] {
        let bytes = self.0.into_bigint().to_bytes_be();
        let mut out = [0u8; SCALAR_BYTES];
        out[SCALAR_BYTES - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// The subgroup order n.
    pub fn modulus() -> BigUint {
        OrderField::MODULUS.into()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn try_inverse(&self) -> Result<Self, CurveError> {
        self.0.inverse().map(Self).ok_or(CurveError::DivisionByZero)
    }
}

impl Distribution<ScalarField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScalarField {
        loop {
            let mut limbs: [u64; 4] = rng.random();
            // n has 251 bits; mask down and reject the overshoot.
            limbs[3] &= (1u64 << (SCALAR_BITS - 192)) - 1;

            if let Some(value) = OrderField::from_bigint(BigInt::new(limbs)) {
                return ScalarField(value);
            }
        }
    }
}

impl Add for ScalarField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for ScalarField {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for ScalarField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for ScalarField {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for ScalarField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul for ScalarField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl MulAssign for ScalarField {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl Sum for ScalarField {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for ScalarField {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl From<u64> for ScalarField {
    fn from(val: u64) -> Self {
        Self::from_u64(val)
    }
}

impl Display for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_limbs();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl Debug for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarField({})", self)
    }
}

// Decimal strings, matching how the circuit toolchain writes field elements.
impl Serialize for ScalarField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_biguint().to_string())
    }
}

impl<'de> Deserialize<'de> for ScalarField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let value: BigUint = s.parse().map_err(serde::de::Error::custom)?;
        if value >= Self::modulus() {
            return Err(serde::de::Error::custom(
                "scalar is not reduced modulo the subgroup order",
            ));
        }
        Ok(Self::from_biguint(&value))
    }
}
