//! Result shapes a caller can ask for.

use std::fmt;

/// The shape a value is converted to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueShape {
    Boolean,
    Number,
    Text,
    Date,
    DateTime,
    Time,
    /// Any value, unconverted.
    Value,
}

impl ValueShape {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::Text => "Text",
            Self::Date => "LocalDate",
            Self::DateTime => "LocalDateTime",
            Self::Time => "LocalTime",
            Self::Value => "Value",
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
