//! `ExpressionNumber`: a number of one kind, and its arithmetic.

use std::cmp::Ordering;
use std::fmt;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::reducer::{to_big_decimal, to_big_int, to_f64, truncate_i64};
use crate::{
    DecimalNumberSymbols, ExpressionNumberKind, ExpressionNumberSign, MathContext, NumberError,
    RawNumber, ReduceOp, Reducer,
};

/// A number of either kind.
///
/// Binary operations require both operands to have the same kind and
/// return that kind; mixing kinds fails with `KindMismatch`. Use
/// [`ExpressionNumber::to_kind`] to convert explicitly.
///
/// Equality is representation equality: binary NaN is not equal to itself,
/// decimal `1.0` equals `1`.
#[derive(Clone, Debug, PartialEq)]
pub enum ExpressionNumber {
    Binary(f64),
    Decimal(BigDecimal),
}

impl ExpressionNumber {
    pub fn kind(&self) -> ExpressionNumberKind {
        match self {
            Self::Binary(_) => ExpressionNumberKind::Binary,
            Self::Decimal(_) => ExpressionNumberKind::Decimal,
        }
    }

    /// The raw representation backing this number.
    pub fn to_raw(&self) -> RawNumber {
        match self {
            Self::Binary(v) => RawNumber::F64(*v),
            Self::Decimal(v) => RawNumber::BigDecimal(v.clone()),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Binary(v) => *v == 0.0,
            Self::Decimal(v) => v.is_zero(),
        }
    }

    // Arithmetic

    pub fn add(&self, other: &Self, context: &MathContext) -> Result<Self, NumberError> {
        self.combine(ReduceOp::Add, other, context)
    }

    pub fn subtract(&self, other: &Self, context: &MathContext) -> Result<Self, NumberError> {
        self.combine(ReduceOp::Subtract, other, context)
    }

    pub fn multiply(&self, other: &Self, context: &MathContext) -> Result<Self, NumberError> {
        self.combine(ReduceOp::Multiply, other, context)
    }

    /// Binary division by zero gives ±∞ or NaN; decimal division by zero
    /// fails with `DivisionByZero`.
    pub fn divide(&self, other: &Self, context: &MathContext) -> Result<Self, NumberError> {
        self.combine(ReduceOp::Divide, other, context)
    }

    pub fn modulo(&self, other: &Self, context: &MathContext) -> Result<Self, NumberError> {
        self.combine(ReduceOp::Modulo, other, context)
    }

    pub fn power(&self, other: &Self, context: &MathContext) -> Result<Self, NumberError> {
        self.combine(ReduceOp::Power, other, context)
    }

    /// Bitwise and of both operands truncated to integers.
    pub fn and(&self, other: &Self, context: &MathContext) -> Result<Self, NumberError> {
        self.combine(ReduceOp::And, other, context)
    }

    pub fn or(&self, other: &Self, context: &MathContext) -> Result<Self, NumberError> {
        self.combine(ReduceOp::Or, other, context)
    }

    pub fn xor(&self, other: &Self, context: &MathContext) -> Result<Self, NumberError> {
        self.combine(ReduceOp::Xor, other, context)
    }

    /// `self op other`.
    ///
    /// Binary operands use native `f64` arithmetic; decimal operands go
    /// through the reducer and are rounded per `context`.
    pub fn combine(
        &self,
        op: ReduceOp,
        other: &Self,
        context: &MathContext,
    ) -> Result<Self, NumberError> {
        match (self, other) {
            (Self::Binary(a), Self::Binary(b)) => Ok(Self::Binary(native(op, *a, *b))),
            (Self::Decimal(a), Self::Decimal(b)) => {
                let raw = Reducer::reduce(
                    a.clone(),
                    b.clone(),
                    op,
                    ExpressionNumberKind::Decimal,
                    context,
                )?;
                to_big_decimal(&raw).map(Self::Decimal)
            }
            _ => Err(self.mismatch(other)),
        }
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Self::Binary(v) => Self::Binary(-v),
            Self::Decimal(v) => Self::Decimal(-v),
        }
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        match self {
            Self::Binary(v) => Self::Binary(v.abs()),
            Self::Decimal(v) => Self::Decimal(v.abs()),
        }
    }

    /// Smallest integer not less than `self`.
    #[must_use]
    pub fn ceil(&self) -> Self {
        self.to_integer(f64::ceil, RoundingMode::Ceiling)
    }

    /// Largest integer not greater than `self`.
    #[must_use]
    pub fn floor(&self) -> Self {
        self.to_integer(f64::floor, RoundingMode::Floor)
    }

    /// Nearest integer, halves away from zero.
    #[must_use]
    pub fn round(&self) -> Self {
        self.to_integer(f64::round, RoundingMode::HalfUp)
    }

    fn to_integer(&self, binary: fn(f64) -> f64, decimal: RoundingMode) -> Self {
        match self {
            Self::Binary(v) => Self::Binary(binary(*v)),
            Self::Decimal(v) => Self::Decimal(v.with_scale_round(0, decimal)),
        }
    }

    // Comparison

    /// Numeric ordering. `Ok(None)` when a binary operand is NaN.
    pub fn try_cmp(&self, other: &Self) -> Result<Option<Ordering>, NumberError> {
        match (self, other) {
            (Self::Binary(a), Self::Binary(b)) => Ok(a.partial_cmp(b)),
            (Self::Decimal(a), Self::Decimal(b)) => Ok(Some(a.cmp(b))),
            _ => Err(self.mismatch(other)),
        }
    }

    pub fn equals(&self, other: &Self) -> Result<bool, NumberError> {
        Ok(self.try_cmp(other)? == Some(Ordering::Equal))
    }

    pub fn not_equals(&self, other: &Self) -> Result<bool, NumberError> {
        Ok(self.try_cmp(other)? != Some(Ordering::Equal))
    }

    pub fn less_than(&self, other: &Self) -> Result<bool, NumberError> {
        Ok(self.try_cmp(other)? == Some(Ordering::Less))
    }

    pub fn less_than_equals(&self, other: &Self) -> Result<bool, NumberError> {
        Ok(matches!(
            self.try_cmp(other)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    pub fn greater_than(&self, other: &Self) -> Result<bool, NumberError> {
        Ok(self.try_cmp(other)? == Some(Ordering::Greater))
    }

    pub fn greater_than_equals(&self, other: &Self) -> Result<bool, NumberError> {
        Ok(matches!(
            self.try_cmp(other)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }

    pub fn sign(&self) -> ExpressionNumberSign {
        ExpressionNumberSign::pick(self)
    }

    // Conversion

    /// Zero is false, everything else (NaN included) is true.
    pub fn to_bool(&self) -> bool {
        !self.is_zero()
    }

    /// Canonical text, same as `Display`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Text using the locale's negative sign and decimal separator.
    ///
    /// No grouping separators are inserted.
    pub fn format(&self, symbols: &DecimalNumberSymbols) -> String {
        let text = self.to_string();
        if symbols.is_canonical() {
            return text;
        }
        text.chars()
            .map(|c| match c {
                '-' => symbols.negative_sign,
                '.' => symbols.decimal_separator,
                other => other,
            })
            .collect()
    }

    /// Truncate toward zero, then keep the low-order 64 bits.
    pub fn to_i64(&self) -> i64 {
        truncate_i64(&self.to_raw())
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "keeping the low-order bits is the documented behavior"
    )]
    pub fn to_i32(&self) -> i32 {
        self.to_i64() as i32
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "keeping the low-order bits is the documented behavior"
    )]
    pub fn to_i16(&self) -> i16 {
        self.to_i64() as i16
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "keeping the low-order bits is the documented behavior"
    )]
    pub fn to_i8(&self) -> i8 {
        self.to_i64() as i8
    }

    /// Nearest `f64`; decimal values out of range become ±∞.
    pub fn to_f64(&self) -> f64 {
        to_f64(&self.to_raw())
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "narrowing to f32 rounds to nearest by definition"
    )]
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Integer part. Fails with `NotFinite` for NaN and infinities.
    pub fn to_big_int(&self) -> Result<BigInt, NumberError> {
        to_big_int(&self.to_raw())
    }

    /// Exact decimal value. Fails with `NotFinite` for NaN and infinities.
    pub fn to_big_decimal(&self) -> Result<BigDecimal, NumberError> {
        match self {
            Self::Binary(v) => to_big_decimal(&RawNumber::F64(*v)),
            Self::Decimal(v) => Ok(v.clone()),
        }
    }

    /// Convert to `kind`; a no-op when already of that kind.
    pub fn to_kind(&self, kind: ExpressionNumberKind) -> Result<Self, NumberError> {
        if self.kind() == kind {
            return Ok(self.clone());
        }
        kind.create(self.to_raw())
    }

    #[cold]
    fn mismatch(&self, other: &Self) -> NumberError {
        NumberError::KindMismatch {
            left: self.kind(),
            right: other.kind(),
        }
    }
}

/// `a op b` in `f64`. The logical operators work on both values truncated
/// to `i64`.
#[expect(
    clippy::cast_precision_loss,
    reason = "logical results are integers carried as f64"
)]
fn native(op: ReduceOp, a: f64, b: f64) -> f64 {
    let logical = |apply: fn(i64, i64) -> i64| {
        apply(truncate_i64(&RawNumber::F64(a)), truncate_i64(&RawNumber::F64(b))) as f64
    };
    match op {
        ReduceOp::Add => a + b,
        ReduceOp::Subtract => a - b,
        ReduceOp::Multiply => a * b,
        ReduceOp::Divide => a / b,
        ReduceOp::Modulo => a % b,
        ReduceOp::Power => a.powf(b),
        ReduceOp::And => logical(|x, y| x & y),
        ReduceOp::Or => logical(|x, y| x | y),
        ReduceOp::Xor => logical(|x, y| x ^ y),
    }
}

impl fmt::Display for ExpressionNumber {
    /// Canonical text: no exponent, no forced decimal point, no trailing
    /// zeros. Binary negative zero prints as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary(v) if *v == 0.0 => f.write_str("0"),
            Self::Binary(v) => write!(f, "{v}"),
            Self::Decimal(v) if v.is_zero() => f.write_str("0"),
            Self::Decimal(v) => f.write_str(&v.normalized().to_plain_string()),
        }
    }
}
