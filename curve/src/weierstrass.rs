use ark_ff::{Field, One, Zero};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use crate::basefield::try_inverse;
use crate::edwards::EdwardsPoint;
use crate::params::{GENERATOR_X, GENERATOR_Y, MONTGOMERY_A_OVER_3, WEIERSTRASS_A, WEIERSTRASS_B};
use crate::serde_decimal::AffineCoords;
use crate::{double_scalar_mul_basepoint, BaseField, CurveError, Group, ScalarField};

/// Affine point on the short Weierstrass form of Baby Jubjub.
/// Represents a point (x, y) or the point at infinity.
///
/// [`WeierstrassPoint::new`] checks the curve equation. Only
/// [`WeierstrassPoint::from_uncompressed_bytes_unchecked`] can produce an off-curve value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Option<AffineCoords>", into = "Option<AffineCoords>")]
pub struct WeierstrassPoint {
    x: BaseField,
    y: BaseField,
    is_infinity: bool,
}

impl WeierstrassPoint {
    /// The point at infinity (identity element)
    pub const INFINITY: Self = WeierstrassPoint {
        x: BaseField::ZERO,
        y: BaseField::ZERO,
        is_infinity: true,
    };

    /// Create a point, rejecting coordinates that are not on the curve.
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
        WeierstrassPoint {
            x,
            y,
            is_infinity: false,
        }
    }

    #[inline]
    pub fn x(&self) -> BaseField {
        self.x
    }

    #[inline]
    pub fn y(&self) -> BaseField {
        self.y
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the curve: y^2 = x^3 + A*x + B.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }

        let y2 = self.y.square();
        let x3 = self.x.square() * self.x;
        y2 == x3 + WEIERSTRASS_A * self.x + WEIERSTRASS_B
    }

    /// Image of the Edwards base point `Base8`.
    pub fn generator() -> Self {
        Self::new_unchecked(GENERATOR_X, GENERATOR_Y)
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity {
            return *self;
        }

        // If y = 0, then 2P = O
        if self.y.is_zero() {
            return Self::INFINITY;
        }

        // λ = (3x^2 + A) / (2y)
        let x2 = self.x.square();
        let numerator = x2 + x2 + x2 + WEIERSTRASS_A;
        let lambda = numerator / self.y.double();

        // x_r = λ^2 - 2x
        let x_r = lambda.square() - self.x.double();

        // y_r = λ(x - x_r) - y
        let y_r = lambda * (self.x - x_r) - self.y;

        Self::new_unchecked(x_r, y_r)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        Self::new_unchecked(self.x, -self.y)
    }

    /// Compute a * G + b * P, where G is the fixed generator.
    pub fn double_scalar_mul_basepoint(a: &ScalarField, b: &ScalarField, point: &Self) -> Self {
        double_scalar_mul_basepoint(a, b, point)
    }

    /// Map to the twisted Edwards form.
    ///
    /// The point at infinity maps to the Edwards neutral `(0, 1)` and the 2-torsion
    /// point `(A/3, 0)` maps to `(0, -1)`; the rational map is undefined at both.
    pub fn to_edwards(&self) -> Result<EdwardsPoint, CurveError> {
        if self.is_infinity {
            return Ok(EdwardsPoint::identity());
        }

        // Shift to Montgomery coordinates (u, v) = (x - A/3, y).
        let u = self.x - MONTGOMERY_A_OVER_3;
        let v = self.y;
        if u.is_zero() && v.is_zero() {
            return Ok(EdwardsPoint::two_torsion());
        }

        let v_inv = try_inverse(&v).map_err(|_| CurveError::InvalidPoint)?;
        let u_plus_one_inv =
            try_inverse(&(u + BaseField::one())).map_err(|_| CurveError::InvalidPoint)?;

        Ok(EdwardsPoint::new_unchecked(
            u * v_inv,
            (u - BaseField::one()) * u_plus_one_inv,
        ))
    }
}

impl Group for WeierstrassPoint {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn generator() -> Self {
        WeierstrassPoint::generator()
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

impl Add for WeierstrassPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.is_infinity {
            return other;
        }
        if other.is_infinity {
            return self;
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            } else {
                // Points are inverses, return infinity
                return Self::INFINITY;
            }
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = (other.y - self.y) / (other.x - self.x);

        // x_r = λ^2 - x1 - x2
        let x_r = lambda.square() - self.x - other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda * (self.x - x_r) - self.y;

        Self::new_unchecked(x_r, y_r)
    }
}

impl AddAssign for WeierstrassPoint {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for WeierstrassPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for WeierstrassPoint {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for WeierstrassPoint {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<ScalarField> for WeierstrassPoint {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl Mul<WeierstrassPoint> for ScalarField {
    type Output = WeierstrassPoint;

    fn mul(self, point: WeierstrassPoint) -> WeierstrassPoint {
        <WeierstrassPoint as Group>::scalar_mul(&point, &self)
    }
}

impl TryFrom<Option<AffineCoords>> for WeierstrassPoint {
    type Error = CurveError;

    fn try_from(coords: Option<AffineCoords>) -> Result<Self, Self::Error> {
        match coords {
            None => Ok(Self::INFINITY),
            Some(AffineCoords { x, y }) => Self::new(x, y),
        }
    }
}

impl From<WeierstrassPoint> for Option<AffineCoords> {
    fn from(point: WeierstrassPoint) -> Self {
        (!point.is_infinity).then_some(AffineCoords {
            x: point.x,
            y: point.y,
        })
    }
}
