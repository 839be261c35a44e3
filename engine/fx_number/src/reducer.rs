//! Numeric promotion kernel.
//!
//! Combines two `RawNumber`s of possibly different representations. Both
//! operands are promoted to a common `NumberRank` and the operator is
//! applied there:
//!
//! | left \ right | Int64      | Float64    | BigInt     | BigDecimal |
//! |--------------|------------|------------|------------|------------|
//! | Int64        | Int64      | Float64    | BigInt     | BigDecimal |
//! | Float64      | Float64    | Float64    | BigDecimal | BigDecimal |
//! | BigInt       | BigInt     | BigDecimal | BigInt     | BigDecimal |
//! | BigDecimal   | BigDecimal | BigDecimal | BigDecimal | BigDecimal |
//!
//! Operator specific rules on top of the table:
//! - `Int64` add/subtract/multiply/modulo overflow promotes to `BigInt`.
//! - Integral divide keeps an exact quotient integral. An inexact `Int64`
//!   quotient follows the destination kind (`F64` for binary, rounded
//!   `BigDecimal` for decimal); an inexact `BigInt` quotient is `BigDecimal`.
//! - `Int64` power is always `F64`. `BigInt` power stays `BigInt` while the
//!   result fits the context's precision, else it is a rounded `BigDecimal`.
//!   Integral exponents beyond ±`MAX_EXPONENT` overflow.
//! - Decimal add and subtract never align operands whose magnitudes are too
//!   far apart to interact under the context's precision.
//! - `and`/`or`/`xor` truncate both operands to integers first; the result
//!   is `BigInt` when either operand was arbitrary precision, else `I64`.
//! - Integral and decimal division or modulo by zero is an error; float
//!   division by zero follows IEEE 754.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

use crate::{ExpressionNumberKind, MathContext, NumberError, RawNumber};

/// Largest integral exponent, in magnitude, accepted by `Power` on
/// arbitrary precision operands.
pub const MAX_EXPONENT: u64 = 999_999_999;

/// Rank of a representation in the promotion table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberRank {
    Int64,
    Float64,
    BigInt,
    BigDecimal,
}

impl NumberRank {
    /// Rank of a raw value's representation.
    pub const fn of(raw: &RawNumber) -> Self {
        match raw {
            RawNumber::I8(_) | RawNumber::I16(_) | RawNumber::I32(_) | RawNumber::I64(_) => {
                Self::Int64
            }
            RawNumber::F32(_) | RawNumber::F64(_) => Self::Float64,
            RawNumber::BigInt(_) => Self::BigInt,
            RawNumber::BigDecimal(_) => Self::BigDecimal,
        }
    }

    /// The rank both operands are promoted to.
    ///
    /// Symmetric. `BigInt` with `Float64` lands on `BigDecimal` because
    /// neither side can hold the other exactly.
    pub const fn promote(self, other: Self) -> Self {
        match (self, other) {
            (Self::BigDecimal, _)
            | (_, Self::BigDecimal)
            | (Self::BigInt, Self::Float64)
            | (Self::Float64, Self::BigInt) => Self::BigDecimal,
            (Self::BigInt, _) | (_, Self::BigInt) => Self::BigInt,
            (Self::Float64, _) | (_, Self::Float64) => Self::Float64,
            (Self::Int64, Self::Int64) => Self::Int64,
        }
    }
}

/// A binary operator the reducer can apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReduceOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    And,
    Or,
    Xor,
}

impl ReduceOp {
    /// Operator name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
            Self::Modulo => "modulo",
            Self::Power => "power",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
        }
    }
}

impl fmt::Display for ReduceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable accumulator over raw numbers.
///
/// Every operation consumes the reducer and returns a new one holding the
/// combined value:
///
/// ```text
/// let sum = Reducer::new(RawNumber::I32(1), kind, ctx)
///     .add(RawNumber::F64(2.5))?
///     .multiply(RawNumber::I8(2))?;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Reducer {
    value: RawNumber,
    kind: ExpressionNumberKind,
    context: MathContext,
}

impl Reducer {
    /// Start accumulating from `value`.
    ///
    /// `kind` is the destination kind of the surrounding evaluation; it only
    /// decides how an inexact native integer quotient is represented.
    pub fn new(
        value: impl Into<RawNumber>,
        kind: ExpressionNumberKind,
        context: MathContext,
    ) -> Self {
        Self {
            value: value.into(),
            kind,
            context,
        }
    }

    /// One-shot `left op right`.
    pub fn reduce(
        left: impl Into<RawNumber>,
        right: impl Into<RawNumber>,
        op: ReduceOp,
        kind: ExpressionNumberKind,
        context: &MathContext,
    ) -> Result<RawNumber, NumberError> {
        Self::new(left, kind, *context)
            .apply(op, right.into())
            .map(Self::into_value)
    }

    /// The current value.
    #[inline]
    pub fn value(&self) -> &RawNumber {
        &self.value
    }

    /// Consume the reducer, returning the current value.
    #[inline]
    pub fn into_value(self) -> RawNumber {
        self.value
    }

    /// Destination kind.
    #[inline]
    pub fn kind(&self) -> ExpressionNumberKind {
        self.kind
    }

    /// Precision and rounding for decimal results.
    #[inline]
    pub fn context(&self) -> &MathContext {
        &self.context
    }

    /// Apply `op` with `operand` on the right.
    pub fn apply(self, op: ReduceOp, operand: RawNumber) -> Result<Self, NumberError> {
        let value = combine(op, &self.value, &operand, self.kind, &self.context)?;
        Ok(Self { value, ..self })
    }

    pub fn add(self, operand: impl Into<RawNumber>) -> Result<Self, NumberError> {
        self.apply(ReduceOp::Add, operand.into())
    }

    pub fn subtract(self, operand: impl Into<RawNumber>) -> Result<Self, NumberError> {
        self.apply(ReduceOp::Subtract, operand.into())
    }

    pub fn multiply(self, operand: impl Into<RawNumber>) -> Result<Self, NumberError> {
        self.apply(ReduceOp::Multiply, operand.into())
    }

    pub fn divide(self, operand: impl Into<RawNumber>) -> Result<Self, NumberError> {
        self.apply(ReduceOp::Divide, operand.into())
    }

    pub fn modulo(self, operand: impl Into<RawNumber>) -> Result<Self, NumberError> {
        self.apply(ReduceOp::Modulo, operand.into())
    }

    pub fn power(self, operand: impl Into<RawNumber>) -> Result<Self, NumberError> {
        self.apply(ReduceOp::Power, operand.into())
    }

    pub fn and(self, operand: impl Into<RawNumber>) -> Result<Self, NumberError> {
        self.apply(ReduceOp::And, operand.into())
    }

    pub fn or(self, operand: impl Into<RawNumber>) -> Result<Self, NumberError> {
        self.apply(ReduceOp::Or, operand.into())
    }

    pub fn xor(self, operand: impl Into<RawNumber>) -> Result<Self, NumberError> {
        self.apply(ReduceOp::Xor, operand.into())
    }

    /// Flip the sign, keeping the representation.
    ///
    /// Fails with `Overflow` for the minimum value of a native integer.
    pub fn negate(self) -> Result<Self, NumberError> {
        let value = negate(&self.value)?;
        Ok(Self { value, ..self })
    }

    /// Numeric comparison across representations.
    ///
    /// `None` when either side is NaN.
    pub fn compare(left: &RawNumber, right: &RawNumber) -> Option<Ordering> {
        match NumberRank::of(left).promote(NumberRank::of(right)) {
            NumberRank::Int64 => Some(truncate_i64(left).cmp(&truncate_i64(right))),
            NumberRank::Float64 => to_f64(left).partial_cmp(&to_f64(right)),
            NumberRank::BigInt | NumberRank::BigDecimal => {
                match (to_big_decimal(left), to_big_decimal(right)) {
                    (Ok(a), Ok(b)) => Some(a.cmp(&b)),
                    // An infinite or NaN float: its f64 ordering is exact
                    // against any finite value.
                    _ => to_f64(left).partial_cmp(&to_f64(right)),
                }
            }
        }
    }

    pub fn equals(left: &RawNumber, right: &RawNumber) -> bool {
        Self::compare(left, right) == Some(Ordering::Equal)
    }

    pub fn less_than(left: &RawNumber, right: &RawNumber) -> bool {
        Self::compare(left, right) == Some(Ordering::Less)
    }

    pub fn less_than_equals(left: &RawNumber, right: &RawNumber) -> bool {
        matches!(
            Self::compare(left, right),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    pub fn greater_than(left: &RawNumber, right: &RawNumber) -> bool {
        Self::compare(left, right) == Some(Ordering::Greater)
    }

    pub fn greater_than_equals(left: &RawNumber, right: &RawNumber) -> bool {
        matches!(
            Self::compare(left, right),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }
}

// Dispatch

/// Both operands converted to their promoted rank.
enum Operands {
    Int64(i64, i64),
    Float64(f64, f64),
    BigInt(BigInt, BigInt),
    BigDecimal(BigDecimal, BigDecimal),
}

fn promote(left: &RawNumber, right: &RawNumber) -> Result<Operands, NumberError> {
    Ok(match NumberRank::of(left).promote(NumberRank::of(right)) {
        NumberRank::Int64 => Operands::Int64(truncate_i64(left), truncate_i64(right)),
        NumberRank::Float64 => Operands::Float64(to_f64(left), to_f64(right)),
        NumberRank::BigInt => Operands::BigInt(to_big_int(left)?, to_big_int(right)?),
        NumberRank::BigDecimal => {
            Operands::BigDecimal(to_big_decimal(left)?, to_big_decimal(right)?)
        }
    })
}

fn combine(
    op: ReduceOp,
    left: &RawNumber,
    right: &RawNumber,
    kind: ExpressionNumberKind,
    context: &MathContext,
) -> Result<RawNumber, NumberError> {
    if matches!(op, ReduceOp::And | ReduceOp::Or | ReduceOp::Xor) {
        return bitwise(op, left, right);
    }
    match promote(left, right)? {
        Operands::Int64(a, b) => int64(op, a, b, kind, context),
        Operands::Float64(a, b) => Ok(RawNumber::F64(float64(op, a, b))),
        Operands::BigInt(a, b) => big_int(op, &a, &b, context),
        Operands::BigDecimal(a, b) => big_decimal(op, &a, &b, context).map(RawNumber::BigDecimal),
    }
}

// Per-rank arithmetic

#[expect(
    clippy::cast_precision_loss,
    reason = "inexact integer quotients and integer powers are defined as f64"
)]
fn int64(
    op: ReduceOp,
    a: i64,
    b: i64,
    kind: ExpressionNumberKind,
    context: &MathContext,
) -> Result<RawNumber, NumberError> {
    let checked = match op {
        ReduceOp::Add => a.checked_add(b),
        ReduceOp::Subtract => a.checked_sub(b),
        ReduceOp::Multiply => a.checked_mul(b),
        ReduceOp::Modulo => {
            if b == 0 {
                return Err(NumberError::ModuloByZero);
            }
            a.checked_rem(b)
        }
        ReduceOp::Divide => {
            if b == 0 {
                return Err(NumberError::DivisionByZero);
            }
            if a.checked_rem(b).unwrap_or(0) != 0 {
                return Ok(match kind {
                    ExpressionNumberKind::Binary => RawNumber::F64(a as f64 / b as f64),
                    ExpressionNumberKind::Decimal => RawNumber::BigDecimal(
                        context.round(BigDecimal::from(a) / BigDecimal::from(b)),
                    ),
                });
            }
            a.checked_div(b)
        }
        ReduceOp::Power => return Ok(RawNumber::F64((a as f64).powf(b as f64))),
        ReduceOp::And | ReduceOp::Or | ReduceOp::Xor => {
            return bitwise(op, &RawNumber::I64(a), &RawNumber::I64(b));
        }
    };
    match checked {
        Some(value) => Ok(RawNumber::I64(value)),
        // Overflow (including MIN / -1): redo the operation without bounds.
        None => big_int(op, &BigInt::from(a), &BigInt::from(b), context),
    }
}

fn float64(op: ReduceOp, a: f64, b: f64) -> f64 {
    match op {
        ReduceOp::Add => a + b,
        ReduceOp::Subtract => a - b,
        ReduceOp::Multiply => a * b,
        ReduceOp::Divide => a / b,
        ReduceOp::Modulo => a % b,
        ReduceOp::Power => a.powf(b),
        // Routed through `bitwise` before promotion.
        ReduceOp::And | ReduceOp::Or | ReduceOp::Xor => f64::NAN,
    }
}

fn big_int(
    op: ReduceOp,
    a: &BigInt,
    b: &BigInt,
    context: &MathContext,
) -> Result<RawNumber, NumberError> {
    Ok(match op {
        ReduceOp::Add => RawNumber::BigInt(a + b),
        ReduceOp::Subtract => RawNumber::BigInt(a - b),
        ReduceOp::Multiply => RawNumber::BigInt(a * b),
        ReduceOp::Modulo => {
            if b.is_zero() {
                return Err(NumberError::ModuloByZero);
            }
            RawNumber::BigInt(a % b)
        }
        ReduceOp::Divide => {
            if b.is_zero() {
                return Err(NumberError::DivisionByZero);
            }
            if (a % b).is_zero() {
                RawNumber::BigInt(a / b)
            } else {
                RawNumber::BigDecimal(
                    context.round(BigDecimal::from(a.clone()) / BigDecimal::from(b.clone())),
                )
            }
        }
        ReduceOp::Power => match b.to_u32() {
            Some(exponent) if fits_exactly(a, exponent, context) => {
                RawNumber::BigInt(a.pow(exponent))
            }
            _ => RawNumber::BigDecimal(decimal_power(
                &BigDecimal::from(a.clone()),
                &BigDecimal::from(b.clone()),
                context,
            )?),
        },
        ReduceOp::And => RawNumber::BigInt(a & b),
        ReduceOp::Or => RawNumber::BigInt(a | b),
        ReduceOp::Xor => RawNumber::BigInt(a ^ b),
    })
}

fn big_decimal(
    op: ReduceOp,
    a: &BigDecimal,
    b: &BigDecimal,
    context: &MathContext,
) -> Result<BigDecimal, NumberError> {
    let exact = match op {
        ReduceOp::Add => return Ok(rounded_sum(a, b, context)),
        ReduceOp::Subtract => return Ok(rounded_sum(a, &(-b), context)),
        ReduceOp::Multiply => a * b,
        ReduceOp::Divide => {
            if b.is_zero() {
                return Err(NumberError::DivisionByZero);
            }
            a / b
        }
        ReduceOp::Modulo => {
            if b.is_zero() {
                return Err(NumberError::ModuloByZero);
            }
            // The integer quotient would need more digits than the context keeps.
            if !context.is_unlimited()
                && magnitude(a) - magnitude(b) > i128::from(context.precision())
            {
                return Err(NumberError::overflow("modulo"));
            }
            a % b
        }
        ReduceOp::Power => return decimal_power(a, b, context),
        ReduceOp::And | ReduceOp::Or | ReduceOp::Xor => {
            let a = to_big_int(&RawNumber::BigDecimal(a.clone()))?;
            let b = to_big_int(&RawNumber::BigDecimal(b.clone()))?;
            return big_int(op, &a, &b, context).and_then(|raw| to_big_decimal(&raw));
        }
    };
    Ok(context.round(exact))
}

/// Position of the most significant digit: `1234.5` is 3, `0.01` is -2.
fn magnitude(value: &BigDecimal) -> i128 {
    let (_, scale) = value.as_bigint_and_exponent();
    i128::from(value.digits()) - i128::from(scale) - 1
}

/// `a + b` rounded to `context`.
///
/// An operand lying wholly below the last digit of the other and below the
/// rounding position can only break ties, so it is replaced by a signed
/// unit three places further down before the exact sum is taken.
fn rounded_sum(a: &BigDecimal, b: &BigDecimal, context: &MathContext) -> BigDecimal {
    if context.is_unlimited() || a.is_zero() || b.is_zero() {
        return context.round(a + b);
    }
    let (large, small) = if magnitude(a) >= magnitude(b) {
        (a, b)
    } else {
        (b, a)
    };
    match sticky_unit(large, small, context.precision()) {
        Some(unit) => context.round(large + unit),
        None => context.round(a + b),
    }
}

fn sticky_unit(large: &BigDecimal, small: &BigDecimal, precision: u64) -> Option<BigDecimal> {
    let (_, scale) = large.as_bigint_and_exponent();
    let last_digit = -i128::from(scale);
    let rounding_digit = magnitude(large) + 1 - i128::from(precision);
    let floor = last_digit.min(rounding_digit);
    if magnitude(small) >= floor - 2 {
        return None;
    }
    let scale = i64::try_from(3 - floor).ok()?;
    let unit = match small.sign() {
        Sign::Minus => -BigInt::one(),
        _ => BigInt::one(),
    };
    Some(BigDecimal::new(unit, scale))
}

/// Whether `base ^ exponent` can be computed as an exact integer.
#[expect(
    clippy::cast_precision_loss,
    reason = "digit estimates only choose between exact and rounded results"
)]
fn fits_exactly(base: &BigInt, exponent: u32, context: &MathContext) -> bool {
    if u64::from(exponent) > MAX_EXPONENT {
        return false;
    }
    if context.is_unlimited() || base.is_zero() {
        return true;
    }
    let log = base
        .magnitude()
        .to_f64()
        .filter(|v| v.is_finite())
        .map_or(base.bits() as f64 * std::f64::consts::LOG10_2, f64::log10);
    (log * f64::from(exponent)).floor() + 1.0 <= context.precision() as f64
}

/// `base ^ exponent` in decimal.
///
/// Integral exponents use square-and-multiply with rounding at each step
/// and must lie within ±`MAX_EXPONENT`; fractional exponents are computed
/// in `f64`.
fn decimal_power(
    base: &BigDecimal,
    exponent: &BigDecimal,
    context: &MathContext,
) -> Result<BigDecimal, NumberError> {
    // Magnitudes below zero are proper fractions (or zero, handled as integral).
    if magnitude(exponent) >= 0 && exponent.is_integer() {
        let n = Some(exponent)
            .filter(|e| magnitude(e) < 18)
            .and_then(|e| e.to_i64())
            .filter(|n| n.unsigned_abs() <= MAX_EXPONENT)
            .ok_or_else(|| NumberError::overflow("power"))?;
        // The result's exponent must stay representable.
        if (magnitude(base).abs() + 1) * i128::from(n.unsigned_abs()) > i128::from(i64::MAX) {
            return Err(NumberError::overflow("power"));
        }
        let mut remaining = n.unsigned_abs();
        let mut result = BigDecimal::one();
        let mut square = base.clone();
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = context.round(result * &square);
            }
            remaining >>= 1;
            if remaining > 0 {
                square = context.round(&square * &square);
            }
        }
        if n < 0 {
            if result.is_zero() {
                return Err(NumberError::DivisionByZero);
            }
            result = context.round(BigDecimal::one() / result);
        }
        return Ok(result);
    }
    let value = to_f64(&RawNumber::BigDecimal(base.clone()))
        .powf(to_f64(&RawNumber::BigDecimal(exponent.clone())));
    f64_to_big_decimal(value).map(|exact| context.round(exact))
}

fn bitwise(op: ReduceOp, left: &RawNumber, right: &RawNumber) -> Result<RawNumber, NumberError> {
    if left.is_arbitrary_precision() || right.is_arbitrary_precision() {
        let a = to_big_int(left)?;
        let b = to_big_int(right)?;
        return Ok(RawNumber::BigInt(match op {
            ReduceOp::Or => a | b,
            ReduceOp::Xor => a ^ b,
            _ => a & b,
        }));
    }
    let a = truncate_i64(left);
    let b = truncate_i64(right);
    Ok(RawNumber::I64(match op {
        ReduceOp::Or => a | b,
        ReduceOp::Xor => a ^ b,
        _ => a & b,
    }))
}

fn negate(raw: &RawNumber) -> Result<RawNumber, NumberError> {
    let overflow = || NumberError::overflow("negation");
    Ok(match raw {
        RawNumber::I8(v) => RawNumber::I8(v.checked_neg().ok_or_else(overflow)?),
        RawNumber::I16(v) => RawNumber::I16(v.checked_neg().ok_or_else(overflow)?),
        RawNumber::I32(v) => RawNumber::I32(v.checked_neg().ok_or_else(overflow)?),
        RawNumber::I64(v) => RawNumber::I64(v.checked_neg().ok_or_else(overflow)?),
        RawNumber::F32(v) => RawNumber::F32(-v),
        RawNumber::F64(v) => RawNumber::F64(-v),
        RawNumber::BigInt(v) => RawNumber::BigInt(-v),
        RawNumber::BigDecimal(v) => RawNumber::BigDecimal(-v),
    })
}

// Conversions shared with `ExpressionNumber`

/// Truncate toward zero to `i64`.
///
/// Floats saturate at the `i64` bounds and NaN becomes zero; arbitrary
/// precision values keep their low-order 64 bits.
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating float to integer truncation is the documented behavior"
)]
pub(crate) fn truncate_i64(raw: &RawNumber) -> i64 {
    match raw {
        RawNumber::F32(v) => *v as i64,
        RawNumber::F64(v) => *v as i64,
        RawNumber::BigInt(v) => low_bits(v),
        RawNumber::BigDecimal(v) => low_bits(&truncate_big_decimal(v)),
        _ => raw.as_i64().unwrap_or_default(),
    }
}

/// Low-order 64 bits of `value`, two's complement.
#[expect(
    clippy::cast_possible_wrap,
    reason = "keeping the low-order bits is the point"
)]
fn low_bits(value: &BigInt) -> i64 {
    let (sign, digits) = value.to_u64_digits();
    let low = digits.first().copied().unwrap_or(0) as i64;
    if sign == Sign::Minus {
        low.wrapping_neg()
    } else {
        low
    }
}

fn truncate_big_decimal(value: &BigDecimal) -> BigInt {
    // Lowering the scale drops digits, which truncates toward zero.
    value.with_scale(0).into_bigint_and_exponent().0
}

/// Widen to `f64`; arbitrary precision values out of range become ±∞.
pub(crate) fn to_f64(raw: &RawNumber) -> f64 {
    match raw {
        RawNumber::BigInt(v) => v.to_f64().unwrap_or_else(|| saturate(v.sign())),
        RawNumber::BigDecimal(v) => v.to_f64().unwrap_or_else(|| saturate(v.sign())),
        _ => raw.as_f64().unwrap_or(f64::NAN),
    }
}

fn saturate(sign: Sign) -> f64 {
    match sign {
        Sign::Minus => f64::NEG_INFINITY,
        Sign::NoSign => 0.0,
        Sign::Plus => f64::INFINITY,
    }
}

/// Exact integer value, truncating any fraction.
pub(crate) fn to_big_int(raw: &RawNumber) -> Result<BigInt, NumberError> {
    match raw {
        RawNumber::F32(v) => f64_to_big_int(f64::from(*v)),
        RawNumber::F64(v) => f64_to_big_int(*v),
        RawNumber::BigInt(v) => Ok(v.clone()),
        RawNumber::BigDecimal(v) => Ok(truncate_big_decimal(v)),
        _ => Ok(BigInt::from(truncate_i64(raw))),
    }
}

fn f64_to_big_int(value: f64) -> Result<BigInt, NumberError> {
    if !value.is_finite() {
        return Err(NumberError::not_finite(value));
    }
    BigInt::from_f64(value.trunc()).ok_or_else(|| NumberError::not_finite(value))
}

/// Exact decimal value.
///
/// Floats convert through their shortest round-trip text, so `0.1f32`
/// becomes `0.1`, not the binary expansion.
pub(crate) fn to_big_decimal(raw: &RawNumber) -> Result<BigDecimal, NumberError> {
    match raw {
        RawNumber::F32(v) => {
            if !v.is_finite() {
                return Err(NumberError::not_finite(f64::from(*v)));
            }
            parse_finite(&v.to_string(), f64::from(*v))
        }
        RawNumber::F64(v) => f64_to_big_decimal(*v),
        RawNumber::BigInt(v) => Ok(BigDecimal::from(v.clone())),
        RawNumber::BigDecimal(v) => Ok(v.clone()),
        _ => Ok(BigDecimal::from(truncate_i64(raw))),
    }
}

pub(crate) fn f64_to_big_decimal(value: f64) -> Result<BigDecimal, NumberError> {
    if !value.is_finite() {
        return Err(NumberError::not_finite(value));
    }
    parse_finite(&value.to_string(), value)
}

fn parse_finite(text: &str, value: f64) -> Result<BigDecimal, NumberError> {
    BigDecimal::from_str(text).map_err(|_| NumberError::not_finite(value))
}
