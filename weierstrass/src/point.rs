//! Curve points.

use crate::{Error, Result};
use core::fmt;
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point on a Weierstrass curve in affine coordinates, or the point at infinity.
///
/// A `Point` carries no reference to the curve it belongs to: membership is
/// checked by [`FiniteFieldCurve::validate_point`](crate::FiniteFieldCurve::validate_point)
/// on every operation that consumes one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Identity,

    /// Affine point `(x, y)`.
    Affine {
        /// x-coordinate
        x: BigInt,

        /// y-coordinate
        y: BigInt,
    },
}

impl Point {
    /// Affine point with the given coordinates.
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Build a point from optional coordinates, where `(None, None)` is the
    /// point at infinity.
    ///
    /// Returns [`Error::MalformedPoint`] when exactly one coordinate is absent.
    pub fn from_coordinates(x: Option<BigInt>, y: Option<BigInt>) -> Result<Self> {
        match (x, y) {
            (None, None) => Ok(Self::Identity),
            (Some(x), Some(y)) => Ok(Self::Affine { x, y }),
            _ => Err(Error::MalformedPoint),
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Affine coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        match self {
            Self::Identity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }

    /// x-coordinate, if any.
    pub fn x(&self) -> Option<&BigInt> {
        self.coordinates().map(|(x, _)| x)
    }

    /// y-coordinate, if any.
    pub fn y(&self) -> Option<&BigInt> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("point at infinity"),
            Self::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

impl<X, Y> From<(X, Y)> for Point
where
    X: Into<BigInt>,
    Y: Into<BigInt>,
{
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x, y)
    }
}
