//! Raw numeric values as produced by upstream value conversion.

use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// A number in one of the native representations the engine accepts.
///
/// Equality is representation-sensitive: `I32(1) != I64(1)`. Use
/// [`crate::Reducer::compare`] for numeric comparison across representations.
#[derive(Clone, Debug, PartialEq)]
pub enum RawNumber {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    BigInt(BigInt),
    BigDecimal(BigDecimal),
}

impl RawNumber {
    /// Short name of the representation, for diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::BigInt(_) => "BigInt",
            Self::BigDecimal(_) => "BigDecimal",
        }
    }

    /// Arbitrary precision representations.
    pub const fn is_arbitrary_precision(&self) -> bool {
        matches!(self, Self::BigInt(_) | Self::BigDecimal(_))
    }

    /// Widen a native integer to `i64`.
    pub(crate) fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(i64::from(v)),
            Self::I16(v) => Some(i64::from(v)),
            Self::I32(v) => Some(i64::from(v)),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    /// Widen a native integer or float to `f64`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "i64 to f64 is the documented promotion for mixed native operands"
    )]
    pub(crate) fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(f64::from(v)),
            Self::F64(v) => Some(v),
            _ => self.as_i64().map(|v| v as f64),
        }
    }
}

macro_rules! raw_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for RawNumber {
                #[inline]
                fn from(value: $ty) -> Self {
                    RawNumber::$variant(value)
                }
            }
        )*
    };
}

raw_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    BigInt => BigInt,
    BigDecimal => BigDecimal,
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::BigInt(v) => write!(f, "{v}"),
            Self::BigDecimal(v) => write!(f, "{}", v.to_plain_string()),
        }
    }
}
