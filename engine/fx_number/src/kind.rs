//! Number kinds and the single normalization point for new numbers.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::reducer::{f64_to_big_decimal, to_big_decimal, to_f64};
use crate::{DecimalNumberSymbols, ExpressionNumber, NumberError, RawNumber};

/// Which numeric back-end an evaluation uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExpressionNumberKind {
    /// IEEE 754 double precision.
    Binary,
    /// Arbitrary precision decimal, rounded per `MathContext`.
    Decimal,
}

impl ExpressionNumberKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Decimal => "decimal",
        }
    }

    /// Normalize an upstream raw value into this kind.
    ///
    /// Binary creation is infallible in practice: arbitrary precision values
    /// out of `f64` range become infinite. Decimal creation fails with
    /// `NotFinite` for NaN and infinite floats.
    pub fn create(self, raw: impl Into<RawNumber>) -> Result<ExpressionNumber, NumberError> {
        let raw = raw.into();
        match self {
            Self::Binary => Ok(ExpressionNumber::Binary(to_f64(&raw))),
            Self::Decimal => to_big_decimal(&raw).map(ExpressionNumber::Decimal),
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "binary numbers are f64 by definition"
    )]
    pub fn from_i64(self, value: i64) -> ExpressionNumber {
        match self {
            Self::Binary => ExpressionNumber::Binary(value as f64),
            Self::Decimal => ExpressionNumber::Decimal(BigDecimal::from(value)),
        }
    }

    pub fn from_f64(self, value: f64) -> Result<ExpressionNumber, NumberError> {
        match self {
            Self::Binary => Ok(ExpressionNumber::Binary(value)),
            Self::Decimal => f64_to_big_decimal(value).map(ExpressionNumber::Decimal),
        }
    }

    pub fn from_big_int(self, value: BigInt) -> ExpressionNumber {
        match self {
            Self::Binary => ExpressionNumber::Binary(to_f64(&RawNumber::BigInt(value))),
            Self::Decimal => ExpressionNumber::Decimal(BigDecimal::from(value)),
        }
    }

    pub fn from_big_decimal(self, value: BigDecimal) -> ExpressionNumber {
        match self {
            Self::Binary => ExpressionNumber::Binary(to_f64(&RawNumber::BigDecimal(value))),
            Self::Decimal => ExpressionNumber::Decimal(value),
        }
    }

    #[inline]
    pub fn zero(self) -> ExpressionNumber {
        self.from_i64(0)
    }

    #[inline]
    pub fn one(self) -> ExpressionNumber {
        self.from_i64(1)
    }

    /// Parse `text` written with the given locale symbols.
    ///
    /// Grouping separators are ignored anywhere; the exponent symbol matches
    /// case-insensitively. Only digits and the locale's symbols are
    /// accepted, so `NaN` or `inf` never parse.
    pub fn parse(
        self,
        text: &str,
        symbols: &DecimalNumberSymbols,
    ) -> Result<ExpressionNumber, NumberError> {
        let parse_error = || NumberError::Parse {
            text: text.to_string(),
        };
        let canonical = canonical_text(text, symbols).ok_or_else(parse_error)?;
        match self {
            Self::Binary => f64::from_str(&canonical)
                .map(ExpressionNumber::Binary)
                .map_err(|_| parse_error()),
            Self::Decimal => BigDecimal::from_str(&canonical)
                .map(ExpressionNumber::Decimal)
                .map_err(|_| parse_error()),
        }
    }
}

impl fmt::Display for ExpressionNumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rewrite locale text into the `1234.5E-3` form both parsers accept.
fn canonical_text(text: &str, symbols: &DecimalNumberSymbols) -> Option<String> {
    let exponent = symbols.exponent_symbol.as_str();
    let mut rest = text.trim();
    let mut out = String::with_capacity(rest.len());
    while let Some(c) = rest.chars().next() {
        if !exponent.is_empty()
            && rest
                .get(..exponent.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(exponent))
        {
            out.push('E');
            rest = &rest[exponent.len()..];
            continue;
        }
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == symbols.negative_sign {
            out.push('-');
        } else if c == symbols.positive_sign {
            out.push('+');
        } else if c == symbols.decimal_separator {
            out.push('.');
        } else if c != symbols.grouping_separator {
            return None;
        }
        rest = &rest[c.len_utf8()..];
    }
    out.bytes().any(|b| b.is_ascii_digit()).then_some(out)
}
