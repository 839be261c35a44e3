//! Leaf payloads of `Value` expressions.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fx_number::ExpressionNumber;

/// Format for date-time literals, ISO 8601 without offset.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A value of a type the core does not know, carried through unchanged.
///
/// Two opaque values are equal when they share the same allocation, or have
/// the same type name and text.
#[derive(Clone)]
pub struct OpaqueValue {
    type_name: Arc<str>,
    text: Arc<str>,
    value: Arc<dyn Any + Send + Sync>,
}

impl OpaqueValue {
    /// Wrap `value`, naming it after its Rust type without the module path.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync + fmt::Display,
    {
        Self::named(short_type_name(std::any::type_name::<T>()), value)
    }

    /// Wrap `value` under an explicit type name.
    pub fn named<T>(type_name: &str, value: T) -> Self
    where
        T: Any + Send + Sync + fmt::Display,
    {
        Self {
            type_name: Arc::from(type_name),
            text: Arc::from(value.to_string()),
            value: Arc::new(value),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The value's `Display` text, captured at construction.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

fn short_type_name(full: &str) -> &str {
    let path = full.split('<').next().unwrap_or(full);
    match path.rfind("::") {
        Some(at) => &full[at + 2..],
        None => full,
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
            || (self.type_name == other.type_name && self.text == other.text)
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueValue")
            .field("type_name", &self.type_name)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// Payload of a `Value` expression.
#[derive(Clone, Debug, PartialEq)]
pub enum ExpressionValue {
    /// Absent value.
    Null,
    Boolean(bool),
    Text(String),
    Number(ExpressionNumber),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    Opaque(OpaqueValue),
}

impl ExpressionValue {
    /// Name of the payload type, as shown in diagnostics and tree printing.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Text(_) => "Text",
            Self::Number(_) => "Number",
            Self::Date(_) => "LocalDate",
            Self::DateTime(_) => "LocalDateTime",
            Self::Time(_) => "LocalTime",
            Self::Opaque(opaque) => opaque.type_name(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for ExpressionValue {
    /// Literal text. Temporal and opaque payloads add their type name in
    /// parentheses: `2024-01-31 (LocalDate)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Date(date) => write!(f, "{date} ({})", self.type_name()),
            Self::DateTime(date_time) => write!(
                f,
                "{} ({})",
                date_time.format(DATE_TIME_FORMAT),
                self.type_name()
            ),
            Self::Time(time) => write!(f, "{time} ({})", self.type_name()),
            Self::Opaque(opaque) => write!(f, "{} ({})", opaque.text(), opaque.type_name()),
        }
    }
}

impl From<bool> for ExpressionValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for ExpressionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ExpressionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ExpressionNumber> for ExpressionValue {
    fn from(value: ExpressionNumber) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveDate> for ExpressionValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for ExpressionValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveTime> for ExpressionValue {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<OpaqueValue> for ExpressionValue {
    fn from(value: OpaqueValue) -> Self {
        Self::Opaque(value)
    }
}

impl<T: Into<ExpressionValue>> From<Option<T>> for ExpressionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
