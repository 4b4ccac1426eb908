//! Curve parameters.

use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unvalidated parameters of the curve `y^2 = x^3 + ax + b` over a field of
/// the given order.
///
/// Convert into a [`FiniteFieldCurve`](crate::FiniteFieldCurve) with
/// [`TryFrom`], which performs the same checks as
/// [`FiniteFieldCurve::new`](crate::FiniteFieldCurve::new).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveParams {
    /// Coefficient `a` in the curve equation.
    pub a: BigInt,

    /// Coefficient `b` in the curve equation.
    pub b: BigInt,

    /// Order of the underlying field.
    pub order: BigInt,
}
