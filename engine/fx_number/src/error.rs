//! Numeric error type.

use crate::ExpressionNumberKind;

/// Failure of a numeric operation.
///
/// Floating point division by zero is not an error; it yields infinity or
/// NaN as IEEE 754 defines.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    /// Integral or decimal division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Integral or decimal remainder by zero.
    #[error("modulo by zero")]
    ModuloByZero,
    /// A representation-preserving operation does not fit its representation.
    #[error("numeric overflow in {operation}")]
    Overflow { operation: &'static str },
    /// NaN or infinity where an exact value is required.
    #[error("{value} has no exact decimal value")]
    NotFinite { value: String },
    /// Operands of different kinds were combined.
    #[error("cannot combine {left} and {right} numbers")]
    KindMismatch {
        left: ExpressionNumberKind,
        right: ExpressionNumberKind,
    },
    /// Text could not be parsed as a number.
    #[error("invalid number {text:?}")]
    Parse { text: String },
}

impl NumberError {
    #[cold]
    pub(crate) fn not_finite(value: f64) -> Self {
        NumberError::NotFinite {
            value: value.to_string(),
        }
    }

    #[cold]
    pub(crate) fn overflow(operation: &'static str) -> Self {
        NumberError::Overflow { operation }
    }

    /// Whether this error is an arithmetic failure (as opposed to misuse).
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero
                | Self::ModuloByZero
                | Self::Overflow { .. }
                | Self::NotFinite { .. }
        )
    }
}
