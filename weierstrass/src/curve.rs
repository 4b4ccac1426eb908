//! Weierstrass curves over finite fields.

use crate::{CurveParams, Error, Point, Result};
use modfield::{primality::is_prime_power, reduce};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Elliptic curve `y^2 = x^3 + ax + b` defined over a finite field.
///
/// Curve parameters are validated once at construction and immutable from
/// then on, so a curve can be freely shared by reference between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CurveParams", into = "CurveParams")
)]
pub struct FiniteFieldCurve {
    a: BigInt,
    b: BigInt,
    order: BigInt,
}

impl FiniteFieldCurve {
    /// Instantiate a curve with the supplied curve parameters `a` and `b`
    /// over a field of the given order.
    ///
    /// Returns [`Error::InvalidOrder`] unless `order` is a prime power, and
    /// [`Error::SingularCurve`] when `4a^3 + 27b^2 = 0`.
    pub fn new(
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        order: impl Into<BigInt>,
    ) -> Result<Self> {
        let (a, b, order) = (a.into(), b.into(), order.into());

        if !is_prime_power(&order) {
            tracing::debug!(%order, "rejected curve: order is not a prime power");
            return Err(Error::InvalidOrder);
        }

        // checked on the raw integers, not their reductions into the field
        let discriminant = BigInt::from(4) * a.pow(3) + BigInt::from(27) * b.pow(2);
        if discriminant.is_zero() {
            tracing::debug!(%a, %b, "rejected curve: singular parameters");
            return Err(Error::SingularCurve);
        }

        tracing::debug!(%a, %b, %order, "constructed curve");
        Ok(Self { a, b, order })
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Order of the underlying field.
    pub fn order(&self) -> &BigInt {
        &self.order
    }

    /// Parameters this curve was constructed from.
    pub fn params(&self) -> CurveParams {
        CurveParams {
            a: self.a.clone(),
            b: self.b.clone(),
            order: self.order.clone(),
        }
    }

    /// Add the points together.
    pub fn add(&self, points: &[Point]) -> Result<Point> {
        if points.len() < 2 {
            return Err(Error::Arity {
                supplied: points.len(),
            });
        }

        points.iter().try_for_each(|p| self.validate_point(p))?;
        points
            .iter()
            .try_fold(Point::Identity, |acc, p| self.add_points(&acc, p))
    }

    /// Returns the additive inverse of a point.
    pub fn invert(&self, point: &Point) -> Result<Point> {
        self.validate_point(point)?;

        Ok(match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: reduce(&-y, &self.order),
            },
        })
    }

    /// Multiply a point by a scalar with one point addition per unit of the
    /// scalar.
    ///
    /// Only useful as a reference for [`FiniteFieldCurve::mult`].
    pub fn naive_multiply(&self, point: &Point, n: &BigInt) -> Result<Point> {
        self.validate_point(point)?;

        let scalar = reduce(n, &self.order);
        let _span = tracing::trace_span!("naive_multiply", bits = scalar.bits()).entered();

        let mut sum = Point::Identity;
        let mut i = BigInt::zero();
        while i < scalar {
            sum = self.add_points(&sum, point)?;
            i += 1u32;
        }

        Ok(sum)
    }

    /// Multiply a point by a scalar using double-and-add over the binary
    /// expansion of the scalar, least significant bit first.
    ///
    /// The scalar is reduced into `[0, order)` first, so negative scalars are
    /// accepted.
    pub fn mult(&self, point: &Point, n: &BigInt) -> Result<Point> {
        self.validate_point(point)?;

        let scalar = reduce(n, &self.order);
        let _span = tracing::trace_span!("mult", bits = scalar.bits()).entered();

        let mut sum = Point::Identity;
        let mut counter = point.clone();

        for i in 0..scalar.bits() {
            if scalar.bit(i) {
                sum = self.add_points(&sum, &counter)?;
            }
            counter = self.add_points(&counter, &counter)?;
        }

        Ok(sum)
    }

    /// Validates the point by verifying that it lies on the curve.
    ///
    /// The point at infinity is always valid.
    pub fn validate_point(&self, point: &Point) -> Result<()> {
        let Some((x, y)) = point.coordinates() else {
            return Ok(());
        };

        if !self.in_field(x) || !self.in_field(y) {
            return Err(Error::OutOfRange);
        }

        let lhs = reduce(&(y * y), &self.order);
        let rhs = reduce(&(x.pow(3) + &self.a * x + &self.b), &self.order);

        if lhs == rhs {
            Ok(())
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Is `point` a valid point on this curve?
    pub fn contains(&self, point: &Point) -> bool {
        self.validate_point(point).is_ok()
    }

    fn in_field(&self, n: &BigInt) -> bool {
        !n.is_negative() && *n < self.order
    }

    /// Computes `a / b` using Fermat's little theorem: for a prime order,
    /// `b^(order - 2)` is the multiplicative inverse of `b`.
    fn div(&self, a: &BigInt, b: &BigInt) -> Result<BigInt> {
        if b.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let inverse = reduce(b, &self.order).modpow(&(&self.order - 2), &self.order);
        Ok(reduce(&(a * inverse), &self.order))
    }

    /// Adds two points which are already known to be valid.
    ///
    /// Arms are tried in order. `P = Q` with `y = 0` skips the inverse arm
    /// (its y-coordinates are equal) and the chord arm, and is caught by the
    /// vertical tangent arm.
    fn add_points(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        match (lhs, rhs) {
            // additive identity
            (Point::Identity, _) => Ok(rhs.clone()),
            (_, Point::Identity) => Ok(lhs.clone()),

            // additive inverse (same x)
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 })
                if x1 == x2 && y1 != y2 =>
            {
                Ok(Point::Identity)
            }

            // chord through two points with different x-coordinates
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) if x1 != x2 => {
                let m = self.div(&(y2 - y1), &(x2 - x1))?;
                let x = reduce(&(&m * &m - x1 - x2), &self.order);
                let y = reduce(&(&m * (x1 - &x) - y1), &self.order);
                Ok(Point::Affine { x, y })
            }

            // vertical tangent
            (Point::Affine { y, .. }, _) if y.is_zero() => Ok(Point::Identity),

            // tangent at a point added to itself
            (Point::Affine { x: x1, y: y1 }, _) => {
                let m = self.div(
                    &(BigInt::from(3) * x1 * x1 + &self.a),
                    &(BigInt::from(2) * y1),
                )?;
                let x = reduce(&(&m * &m - BigInt::from(2) * x1), &self.order);
                let y = reduce(&(&m * (x1 - &x) - y1), &self.order);
                Ok(Point::Affine { x, y })
            }
        }
    }
}

impl TryFrom<CurveParams> for FiniteFieldCurve {
    type Error = Error;

    fn try_from(params: CurveParams) -> Result<Self> {
        Self::new(params.a, params.b, params.order)
    }
}

impl From<FiniteFieldCurve> for CurveParams {
    fn from(curve: FiniteFieldCurve) -> CurveParams {
        CurveParams {
            a: curve.a,
            b: curve.b,
            order: curve.order,
        }
    }
}
