//! Precision and rounding policy for decimal arithmetic.

use std::fmt;
use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, RoundingMode};

/// Precision (significant digits) and rounding mode applied to every
/// decimal result.
///
/// A precision of zero means unlimited: results are kept exact, except
/// for non-terminating quotients which are cut at the backend's default
/// division precision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MathContext {
    precision: u64,
    rounding: RoundingMode,
}

impl MathContext {
    /// IEEE 754 decimal32: 7 digits, half-even.
    pub const DECIMAL32: Self = Self::new(7, RoundingMode::HalfEven);

    /// IEEE 754 decimal64: 16 digits, half-even.
    pub const DECIMAL64: Self = Self::new(16, RoundingMode::HalfEven);

    /// IEEE 754 decimal128: 34 digits, half-even.
    pub const DECIMAL128: Self = Self::new(34, RoundingMode::HalfEven);

    /// No rounding.
    pub const UNLIMITED: Self = Self::new(0, RoundingMode::HalfEven);

    /// Create a context with `precision` significant digits.
    pub const fn new(precision: u64, rounding: RoundingMode) -> Self {
        Self {
            precision,
            rounding,
        }
    }

    /// Significant digits kept; zero is unlimited.
    #[inline]
    pub const fn precision(&self) -> u64 {
        self.precision
    }

    /// Rounding applied when digits are dropped.
    #[inline]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Whether results are kept exact.
    #[inline]
    pub const fn is_unlimited(&self) -> bool {
        self.precision == 0
    }

    /// Round `value` to this context's precision.
    pub fn round(&self, value: BigDecimal) -> BigDecimal {
        match NonZeroU64::new(self.precision) {
            Some(precision) if value.digits() > precision.get() => {
                value.with_precision_round(precision, self.rounding)
            }
            _ => value,
        }
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::DECIMAL128
    }
}

impl fmt::Display for MathContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "precision={} rounding={:?}", self.precision, self.rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap_or_default()
    }

    #[test]
    fn rounds_to_precision() {
        let ctx = MathContext::new(3, RoundingMode::HalfUp);
        assert_eq!(ctx.round(dec("1.2345")), dec("1.23"));
        assert_eq!(ctx.round(dec("1.235")), dec("1.24"));
    }

    #[test]
    fn half_even_ties_to_even() {
        let ctx = MathContext::new(2, RoundingMode::HalfEven);
        assert_eq!(ctx.round(dec("2.25")), dec("2.2"));
        assert_eq!(ctx.round(dec("2.35")), dec("2.4"));
    }

    #[test]
    fn short_values_are_untouched() {
        assert_eq!(MathContext::DECIMAL32.round(dec("1.5")), dec("1.5"));
    }

    #[test]
    fn unlimited_keeps_everything() {
        let long = dec("1.234567890123456789012345678901234567890123");
        assert!(MathContext::UNLIMITED.is_unlimited());
        assert_eq!(MathContext::UNLIMITED.round(long.clone()), long);
    }

    #[test]
    fn default_is_decimal128() {
        assert_eq!(MathContext::default(), MathContext::DECIMAL128);
        assert_eq!(MathContext::default().precision(), 34);
    }
}
