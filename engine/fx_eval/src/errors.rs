//! Evaluation errors.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries typed data for each failure so callers (and the
//! context's recovery policy) can match on the category instead of parsing
//! messages. Factory functions (`division_by_zero()`, `conversion_failed()`,
//! ...) are the public way to build errors; they fill both `kind` and
//! `message`.
//!
//! Categories:
//! - contract: `Arity`, `Validation`
//! - evaluation shape: `Conversion`, `TypeMismatch`, `NotCallable`
//! - lookup: `ReferenceNotFound`, `FunctionNotFound`
//! - arithmetic: `DivisionByZero`, `ModuloByZero`, `Overflow`, `NotFinite`
//! - `Unsupported`: no input could make the request succeed

use std::fmt;

use fx_expr::{ExprError, Expression, ExpressionReference};
use fx_name::{FunctionExpressionName, NameError};
use fx_number::NumberError;

use crate::ValueShape;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Contract
    Arity {
        name: String,
        expected: String,
        got: usize,
    },
    Validation {
        message: String,
    },

    // Evaluation shape
    Conversion {
        from: String,
        to: ValueShape,
    },
    TypeMismatch {
        expected: String,
        got: String,
    },
    NotCallable {
        type_name: String,
    },

    // Lookup
    ReferenceNotFound {
        reference: ExpressionReference,
    },
    FunctionNotFound {
        name: FunctionExpressionName,
    },

    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    Overflow {
        operation: String,
    },
    NotFinite {
        value: String,
    },

    Unsupported {
        what: String,
    },

    /// Anything not covered above, typically raised by a function.
    Custom {
        message: String,
    },
}

impl EvalErrorKind {
    /// Arithmetic failures, as opposed to misuse or missing data.
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

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Contract
            Self::Arity {
                name,
                expected,
                got,
            } => write!(f, "{name} expects {expected} arguments, got {got}"),
            Self::Validation { message } => write!(f, "{message}"),

            // Evaluation shape
            Self::Conversion { from, to } => write!(f, "cannot convert {from} to {to}"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),

            // Lookup
            Self::ReferenceNotFound { reference } => {
                write!(f, "Reference {:?} not found", reference.as_str())
            }
            Self::FunctionNotFound { name } => f.write_str(&name.not_found_text()),

            // Arithmetic
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::Overflow { operation } => write!(f, "numeric overflow in {operation}"),
            Self::NotFinite { value } => write!(f, "{value} has no exact value"),

            Self::Unsupported { what } => write!(f, "unsupported: {what}"),

            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Additional context attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
}

impl EvalNote {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory-built
    /// errors.
    pub message: String,
    /// The node the error was raised at, as `DisplayName suffix`.
    pub expression: Option<String>,
    /// Secondary information.
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    /// A `Custom` error with `message`.
    ///
    /// Prefer the specific factory functions when a category fits.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            expression: None,
            notes: Vec::new(),
        }
    }

    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            expression: None,
            notes: Vec::new(),
        }
    }

    /// Record the node the error was raised at, unless already recorded.
    #[must_use]
    pub fn at(mut self, expr: &Expression) -> Self {
        if self.expression.is_none() {
            self.expression = Some(expr.to_string());
        }
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }

    #[inline]
    pub fn is_arithmetic(&self) -> bool {
        self.kind.is_arithmetic()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(expression) = &self.expression {
            write!(f, " (at {expression})")?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {}", note.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl From<NumberError> for EvalError {
    fn from(error: NumberError) -> Self {
        match error {
            NumberError::DivisionByZero => division_by_zero(),
            NumberError::ModuloByZero => modulo_by_zero(),
            NumberError::Overflow { operation } => overflow(operation),
            NumberError::NotFinite { value } => {
                EvalError::from_kind(EvalErrorKind::NotFinite { value })
            }
            NumberError::KindMismatch { left, right } => type_mismatch(
                &format!("{left} number"),
                &format!("{right} number"),
            ),
            NumberError::Parse { text } => EvalError::from_kind(EvalErrorKind::Conversion {
                from: format!("{text:?}"),
                to: ValueShape::Number,
            }),
        }
    }
}

impl From<NameError> for EvalError {
    fn from(error: NameError) -> Self {
        validation(error.to_string())
    }
}

impl From<ExprError> for EvalError {
    fn from(error: ExprError) -> Self {
        match error {
            ExprError::Arity {
                expression,
                expected,
                actual,
            } => EvalError::from_kind(EvalErrorKind::Arity {
                name: expression.to_string(),
                expected: expected.to_string(),
                got: actual,
            }),
            other => validation(other.to_string()),
        }
    }
}

// Contract

/// Wrong number of arguments for a function.
#[cold]
pub fn arity_mismatch(name: &str, expected: &str, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Arity {
        name: name.to_string(),
        expected: expected.to_string(),
        got,
    })
}

#[cold]
pub fn validation(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Validation {
        message: message.into(),
    })
}

// Evaluation shape

/// A value of type `from` cannot take the requested shape.
#[cold]
pub fn conversion_failed(from: &str, to: ValueShape) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Conversion {
        from: from.to_string(),
        to,
    })
}

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

// Lookup

#[cold]
pub fn reference_not_found(reference: &ExpressionReference) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReferenceNotFound {
        reference: reference.clone(),
    })
}

#[cold]
pub fn function_not_found(name: &FunctionExpressionName) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FunctionNotFound { name: name.clone() })
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Overflow {
        operation: operation.to_string(),
    })
}

/// A request no input could satisfy.
#[cold]
pub fn unsupported(what: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Unsupported { what: what.into() })
}
