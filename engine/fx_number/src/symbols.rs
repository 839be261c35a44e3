//! Locale symbols used when numbers are rendered as, or read from, text.

/// Characters a locale uses for numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalNumberSymbols {
    pub negative_sign: char,
    pub positive_sign: char,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub exponent_symbol: String,
}

impl DecimalNumberSymbols {
    /// Symbols with the given separators and `-`/`+`/`E` for the rest.
    pub fn with_separators(decimal_separator: char, grouping_separator: char) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
            ..Self::default()
        }
    }

    /// Whether these are the symbols `f64`/`BigDecimal` text already uses.
    pub(crate) fn is_canonical(&self) -> bool {
        self.negative_sign == '-' && self.decimal_separator == '.'
    }
}

impl Default for DecimalNumberSymbols {
    fn default() -> Self {
        Self {
            negative_sign: '-',
            positive_sign: '+',
            decimal_separator: '.',
            grouping_separator: ',',
            exponent_symbol: "E".to_string(),
        }
    }
}
