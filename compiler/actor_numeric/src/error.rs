//! Failures of numeric operations.

use std::fmt;

/// Error returned by the fallible [`Decimal`](crate::Decimal) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumericError {
    /// Division by an exact zero, including negative powers of zero.
    DivisionByZero,
    /// Remainder with a zero divisor.
    ModuloByZero,
    /// The operation is undefined for its argument.
    Domain {
        operation: &'static str,
        reason: String,
    },
    /// An intermediate exponent or scale no longer fits in a machine word.
    Overflow { operation: &'static str },
    /// Text that is not a decimal literal.
    Parse(String),
}

impl NumericError {
    #[cold]
    pub(crate) fn domain(operation: &'static str, reason: impl Into<String>) -> Self {
        NumericError::Domain {
            operation,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::ModuloByZero => write!(f, "modulo by zero"),
            NumericError::Domain { operation, reason } => {
                write!(f, "{operation} is undefined: {reason}")
            }
            NumericError::Overflow { operation } => {
                write!(f, "{operation} overflowed the supported exponent range")
            }
            NumericError::Parse(text) => write!(f, "invalid number literal '{text}'"),
        }
    }
}

impl std::error::Error for NumericError {}
