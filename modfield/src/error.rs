//! Error types.

use core::fmt;

/// Finite field errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A variadic operation received fewer than two operands.
    Arity {
        /// Number of operands actually supplied.
        supplied: usize,
    },

    /// An operand lies outside `[0, order)`.
    FieldMembership,

    /// Division by the additive identity.
    DivisionByZero,

    /// The field order is below 2 or not a prime power.
    InvalidOrder,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity { supplied } => {
                write!(f, "at least two operands are required, got {supplied}")
            }
            Self::FieldMembership => f.write_str("element not in field"),
            Self::DivisionByZero => f.write_str("cannot divide by zero"),
            Self::InvalidOrder => f.write_str("invalid order, must be a prime power integer"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
