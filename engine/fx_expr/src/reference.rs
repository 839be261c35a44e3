//! References to values supplied by the evaluation context.

use std::fmt;
use std::sync::Arc;

/// An opaque reference (a cell, label or variable) the context resolves.
///
/// The core never interprets the text; it is compared exactly.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpressionReference {
    text: Arc<str>,
}

impl ExpressionReference {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: Arc::from(text.as_ref()),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for ExpressionReference {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ExpressionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for ExpressionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExpressionReference({:?})", &*self.text)
    }
}
