//! Error types.

use core::fmt;

/// Elliptic curve errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// [`FiniteFieldCurve::add`](crate::FiniteFieldCurve::add) received fewer
    /// than two points.
    Arity {
        /// Number of points actually supplied.
        supplied: usize,
    },

    /// The field order is below 2 or not a prime power.
    InvalidOrder,

    /// `4a^3 + 27b^2 = 0`.
    SingularCurve,

    /// Exactly one of the two coordinates is absent.
    MalformedPoint,

    /// A coordinate lies outside `[0, order)`.
    OutOfRange,

    /// The point does not satisfy the curve equation.
    NotOnCurve,

    /// Division by the additive identity.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity { supplied } => {
                write!(f, "at least two points are required, got {supplied}")
            }
            Self::InvalidOrder => f.write_str("invalid order, must be a prime power integer"),
            Self::SingularCurve => f.write_str("curve parameters create a singular curve"),
            Self::MalformedPoint => {
                f.write_str("only the point at infinity can have an absent coordinate")
            }
            Self::OutOfRange => f.write_str("point coordinates out of range for field"),
            Self::NotOnCurve => f.write_str("point not on curve"),
            Self::DivisionByZero => f.write_str("cannot divide by zero"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
