use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::scalarfield::SCALAR_BITS;

pub trait ScalarBits {
    /// Canonical little-endian limbs.
    fn to_u64_limbs(&self) -> [u64; 4];
}

#[inline]
pub(crate) fn bit_at(limbs: &[u64; 4], index: usize) -> usize {
    ((limbs[index / 64] >> (index % 64)) & 1) as usize
}

/// Operations shared by both representations of the curve.
pub trait Group:
    Sized
    + Copy
    + PartialEq
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Neg<Output = Self>
{
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Double-and-add over the full bit length of the subgroup order.
    ///
    /// Every iteration performs one doubling and one addition and then selects,
    /// so the operation sequence is the same for every scalar.
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        let limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();

        for i in (0..SCALAR_BITS).rev() {
            result = result.double();
            let sum = result + *self;
            result = if bit_at(&limbs, i) == 1 { sum } else { result };
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        let mut result = Self::identity();
        let mut temp = *self;
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result + temp;
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }
}

impl ScalarBits for crate::ScalarField {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_limbs()
    }
}
