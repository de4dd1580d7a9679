use ark_ff::{Field, One, Zero};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use crate::basefield::try_inverse;
use crate::params::{
    EDWARDS_A, EDWARDS_D, EDWARDS_GENERATOR_X, EDWARDS_GENERATOR_Y, MONTGOMERY_A_OVER_3,
};
use crate::serde_decimal::AffineCoords;
use crate::{BaseField, CurveError, Group, ScalarField, WeierstrassPoint};

/// Affine point on the twisted Edwards form `a*x^2 + y^2 = 1 + d*x^2*y^2`.
///
/// This is the representation the membership circuit works in. The addition law is
/// complete (`a` is a square and `d` is not), so the neutral element `(0, 1)` needs no
/// special encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AffineCoords", into = "AffineCoords")]
pub struct EdwardsPoint {
    x: BaseField,
    y: BaseField,
}

impl EdwardsPoint {
    pub const IDENTITY: Self = EdwardsPoint {
        x: BaseField::ZERO,
        y: BaseField::ONE,
    };

    pub fn new(x: BaseField, y: BaseField) -> Result<Self, CurveError> {
        let point = Self::new_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CurveError::InvalidPoint)
        }
    }

    #[inline]
    pub(crate) fn new_unchecked(x: BaseField, y: BaseField) -> Self {
        EdwardsPoint { x, y }
    }

    #[inline]
    pub fn x(&self) -> BaseField {
        self.x
    }

    #[inline]
    pub fn y(&self) -> BaseField {
        self.y
    }

    /// The point `(0, -1)` of order two.
    pub fn two_torsion() -> Self {
        Self::new_unchecked(BaseField::zero(), -BaseField::one())
    }

    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        EDWARDS_A * x2 + y2 == BaseField::one() + EDWARDS_D * x2 * y2
    }

    /// circomlib `Base8`.
    pub fn generator() -> Self {
        Self::new_unchecked(EDWARDS_GENERATOR_X, EDWARDS_GENERATOR_Y)
    }

    pub fn double(&self) -> Self {
        *self + *self
    }

    pub fn negate(&self) -> Self {
        Self::new_unchecked(-self.x, self.y)
    }

    /// Map to the short Weierstrass form through Montgomery coordinates
    /// `u = (1 + y) / (1 - y)`, `v = u / x`.
    pub fn to_weierstrass(&self) -> Result<WeierstrassPoint, CurveError> {
        if *self == Self::IDENTITY {
            return Ok(WeierstrassPoint::INFINITY);
        }
        if *self == Self::two_torsion() {
            return Ok(WeierstrassPoint::new_unchecked(
                MONTGOMERY_A_OVER_3,
                BaseField::zero(),
            ));
        }

        let one = BaseField::one();
        let one_minus_y_inv = try_inverse(&(one - self.y)).map_err(|_| CurveError::InvalidPoint)?;
        let x_inv = try_inverse(&self.x).map_err(|_| CurveError::InvalidPoint)?;

        let u = (one + self.y) * one_minus_y_inv;
        let v = u * x_inv;
        Ok(WeierstrassPoint::new_unchecked(u + MONTGOMERY_A_OVER_3, v))
    }
}

impl Group for EdwardsPoint {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    #[inline]
    fn generator() -> Self {
        EdwardsPoint::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

impl Add for EdwardsPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        // x3 = (x1*y2 + y1*x2) / (1 + d*x1*x2*y1*y2)
        // y3 = (y1*y2 - a*x1*x2) / (1 - d*x1*x2*y1*y2)
        let x1x2 = self.x * other.x;
        let y1y2 = self.y * other.y;
        let t = EDWARDS_D * x1x2 * y1y2;
        let one = BaseField::one();

        let x3 = (self.x * other.y + self.y * other.x) / (one + t);
        let y3 = (y1y2 - EDWARDS_A * x1x2) / (one - t);

        Self::new_unchecked(x3, y3)
    }
}

impl AddAssign for EdwardsPoint {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for EdwardsPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for EdwardsPoint {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for EdwardsPoint {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<ScalarField> for EdwardsPoint {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl Mul<EdwardsPoint> for ScalarField {
    type Output = EdwardsPoint;

    fn mul(self, point: EdwardsPoint) -> EdwardsPoint {
        <EdwardsPoint as Group>::scalar_mul(&point, &self)
    }
}

impl TryFrom<AffineCoords> for EdwardsPoint {
    type Error = CurveError;

    fn try_from(coords: AffineCoords) -> Result<Self, Self::Error> {
        Self::new(coords.x, coords.y)
    }
}

impl From<EdwardsPoint> for AffineCoords {
    fn from(point: EdwardsPoint) -> Self {
        AffineCoords {
            x: point.x,
            y: point.y,
        }
    }
}
