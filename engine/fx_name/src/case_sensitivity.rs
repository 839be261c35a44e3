//! Case folding policy shared by names and text comparisons.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Whether letter case is significant when comparing text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CaseSensitivity {
    /// `"ABC"` and `"abc"` are different.
    Sensitive,
    /// `"ABC"` and `"abc"` are the same.
    Insensitive,
}

impl CaseSensitivity {
    /// Fold `text` so that equal-under-this-policy strings are byte-equal.
    ///
    /// Borrows when no folding is needed.
    pub fn fold(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(text),
            Self::Insensitive if text.chars().any(char::is_uppercase) => {
                Cow::Owned(text.to_lowercase())
            }
            Self::Insensitive => Cow::Borrowed(text),
        }
    }

    /// Compare two strings for equality under this policy.
    pub fn eq(self, left: &str, right: &str) -> bool {
        match self {
            Self::Sensitive => left == right,
            Self::Insensitive => self.fold(left) == self.fold(right),
        }
    }

    /// Lexicographic comparison of the folded text.
    pub fn compare(self, left: &str, right: &str) -> Ordering {
        match self {
            Self::Sensitive => left.cmp(right),
            Self::Insensitive => self.fold(left).cmp(&self.fold(right)),
        }
    }
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensitive => f.write_str("sensitive"),
            Self::Insensitive => f.write_str("insensitive"),
        }
    }
}
