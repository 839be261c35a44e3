//! Sign of an `ExpressionNumber`.

use std::fmt;

use num_traits::{Signed, Zero};

use crate::ExpressionNumber;

/// Sign of a number, as returned by [`ExpressionNumber::sign`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExpressionNumberSign {
    Negative,
    Zero,
    Positive,
}

static SIGNS: [ExpressionNumberSign; 3] = [
    ExpressionNumberSign::Negative,
    ExpressionNumberSign::Zero,
    ExpressionNumberSign::Positive,
];

impl ExpressionNumberSign {
    /// All signs in ascending order.
    pub fn values() -> &'static [Self] {
        &SIGNS
    }

    /// The sign of `number`. NaN is `Positive`.
    pub fn pick(number: &ExpressionNumber) -> Self {
        match number {
            ExpressionNumber::Binary(v) => {
                if *v < 0.0 {
                    Self::Negative
                } else if *v == 0.0 {
                    Self::Zero
                } else {
                    Self::Positive
                }
            }
            ExpressionNumber::Decimal(v) => {
                if v.is_zero() {
                    Self::Zero
                } else if v.is_negative() {
                    Self::Negative
                } else {
                    Self::Positive
                }
            }
        }
    }
}

impl fmt::Display for ExpressionNumberSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Negative => "negative",
            Self::Zero => "zero",
            Self::Positive => "positive",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExpressionNumberKind;

    #[test]
    fn pick_for_both_kinds() {
        for kind in [ExpressionNumberKind::Binary, ExpressionNumberKind::Decimal] {
            assert_eq!(ExpressionNumberSign::pick(&kind.from_i64(0)), ExpressionNumberSign::Zero);
            assert_eq!(
                ExpressionNumberSign::pick(&kind.from_i64(-3)),
                ExpressionNumberSign::Negative
            );
            assert_eq!(
                ExpressionNumberSign::pick(&kind.from_i64(42)),
                ExpressionNumberSign::Positive
            );
        }
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(
            ExpressionNumberSign::pick(&ExpressionNumber::Binary(-0.0)),
            ExpressionNumberSign::Zero
        );
    }

    #[test]
    fn nan_is_positive() {
        assert_eq!(
            ExpressionNumberSign::pick(&ExpressionNumber::Binary(f64::NAN)),
            ExpressionNumberSign::Positive
        );
    }

    #[test]
    fn values_are_ordered() {
        let values = ExpressionNumberSign::values();
        assert_eq!(values.len(), 3);
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(std::ptr::eq(values, ExpressionNumberSign::values()));
    }
}
