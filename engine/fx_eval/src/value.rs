//! Evaluated values.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fx_expr::{ExpressionValue, OpaqueValue, DATE_TIME_FORMAT};
use fx_number::{ExpressionNumber, RawNumber};

use crate::SharedFunction;

/// The result of evaluating a node.
#[derive(Clone)]
pub enum Value {
    /// Absent.
    Null,
    Boolean(bool),
    Text(String),
    Number(ExpressionNumber),
    /// A number straight from upstream, normalized on first numeric use.
    Raw(RawNumber),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    List(Vec<Value>),
    Function(SharedFunction),
    Opaque(OpaqueValue),
}

impl Value {
    /// Type name used in conversion and type errors.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Text(_) => "Text",
            Self::Number(_) | Self::Raw(_) => "Number",
            Self::Date(_) => "LocalDate",
            Self::DateTime(_) => "LocalDateTime",
            Self::Time(_) => "LocalTime",
            Self::List(_) => "List",
            Self::Function(_) => "Function",
            Self::Opaque(opaque) => opaque.type_name(),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn raw(value: impl Into<RawNumber>) -> Self {
        Self::Raw(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl PartialEq for Value {
    /// Structural equality; functions are equal when they are the same
    /// instance.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Raw(a), Self::Raw(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Arc::ptr_eq(a, b),
            (Self::Opaque(a), Self::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Boolean(v) => f.debug_tuple("Boolean").field(v).finish(),
            Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Self::Number(v) => f.debug_tuple("Number").field(v).finish(),
            Self::Raw(v) => f.debug_tuple("Raw").field(v).finish(),
            Self::Date(v) => f.debug_tuple("Date").field(v).finish(),
            Self::DateTime(v) => f.debug_tuple("DateTime").field(v).finish(),
            Self::Time(v) => f.debug_tuple("Time").field(v).finish(),
            Self::List(v) => f.debug_tuple("List").field(v).finish(),
            Self::Function(v) => f.debug_tuple("Function").field(v.name()).finish(),
            Self::Opaque(v) => f.debug_tuple("Opaque").field(v).finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Number(v) => write!(f, "{v}"),
            Self::Raw(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
            Self::DateTime(v) => write!(f, "{}", v.format(DATE_TIME_FORMAT)),
            Self::Time(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Function(v) => write!(f, "{}", v.name()),
            Self::Opaque(v) => f.write_str(v.text()),
        }
    }
}

impl From<&ExpressionValue> for Value {
    fn from(value: &ExpressionValue) -> Self {
        match value {
            ExpressionValue::Null => Self::Null,
            ExpressionValue::Boolean(v) => Self::Boolean(*v),
            ExpressionValue::Text(v) => Self::Text(v.clone()),
            ExpressionValue::Number(v) => Self::Number(v.clone()),
            ExpressionValue::Date(v) => Self::Date(*v),
            ExpressionValue::DateTime(v) => Self::DateTime(*v),
            ExpressionValue::Time(v) => Self::Time(*v),
            ExpressionValue::Opaque(v) => Self::Opaque(v.clone()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ExpressionNumber> for Value {
    fn from(value: ExpressionNumber) -> Self {
        Self::Number(value)
    }
}

impl From<RawNumber> for Value {
    fn from(value: RawNumber) -> Self {
        Self::Raw(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveTime> for Value {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<SharedFunction> for Value {
    fn from(value: SharedFunction) -> Self {
        Self::Function(value)
    }
}
