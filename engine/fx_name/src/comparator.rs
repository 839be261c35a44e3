//! Cached name comparators.
//!
//! One comparator exists per `CaseSensitivity`. Each is built on first use
//! through a `OnceLock` and never changes afterwards, so concurrent first
//! access cannot produce two different instances.

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use crate::{CaseSensitivity, FunctionExpressionName};

static SENSITIVE: OnceLock<NameComparator> = OnceLock::new();
static INSENSITIVE: OnceLock<NameComparator> = OnceLock::new();

/// Total order over names: lexicographic on the (possibly folded) text.
pub struct NameComparator {
    sensitivity: CaseSensitivity,
}

impl NameComparator {
    /// Get the shared comparator for `sensitivity`.
    pub fn get(sensitivity: CaseSensitivity) -> &'static NameComparator {
        let cell = match sensitivity {
            CaseSensitivity::Sensitive => &SENSITIVE,
            CaseSensitivity::Insensitive => &INSENSITIVE,
        };
        cell.get_or_init(|| NameComparator { sensitivity })
    }

    /// The policy this comparator applies.
    pub fn sensitivity(&self) -> CaseSensitivity {
        self.sensitivity
    }

    /// Compare two function names.
    pub fn compare(
        &self,
        left: &FunctionExpressionName,
        right: &FunctionExpressionName,
    ) -> Ordering {
        self.compare_str(left.as_str(), right.as_str())
    }

    /// Compare two raw strings.
    pub fn compare_str(&self, left: &str, right: &str) -> Ordering {
        self.sensitivity.compare(left, right)
    }

    /// Sort `items` in place by their string form.
    pub fn sort<T: AsRef<str>>(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare_str(a.as_ref(), b.as_ref()));
    }
}

impl fmt::Debug for NameComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameComparator({})", self.sensitivity)
    }
}
