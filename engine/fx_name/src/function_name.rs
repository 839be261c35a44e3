//! Validated function identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{CaseSensitivity, NameComparator};

/// Error raised when text is not a valid function name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// The name was empty.
    #[error("function name must not be empty")]
    Empty,
    /// A character at `position` is not allowed there.
    #[error("invalid character {ch:?} at {position} in function name {text:?}")]
    InvalidCharacter {
        text: String,
        position: usize,
        ch: char,
    },
}

/// The name of a function, as referenced by a `NamedFunction` expression.
///
/// Cheap to clone. Equality and hashing fold case according to
/// [`FunctionExpressionName::CASE_SENSITIVITY`], so `SUM` and `sum` name the
/// same function.
#[derive(Clone)]
pub struct FunctionExpressionName {
    text: Arc<str>,
}

impl FunctionExpressionName {
    /// Case policy for this name family.
    pub const CASE_SENSITIVITY: CaseSensitivity = CaseSensitivity::Insensitive;

    /// Validate `text` and wrap it as a function name.
    pub fn with(text: impl AsRef<str>) -> Result<Self, NameError> {
        let text = text.as_ref();
        validate(text)?;
        Ok(Self {
            text: Arc::from(text),
        })
    }

    /// The name exactly as given.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters in the name.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false; validation rejects empty names.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The name folded under [`Self::CASE_SENSITIVITY`].
    ///
    /// Registries key on this so lookups agree with `Eq`.
    pub fn folded(&self) -> String {
        Self::CASE_SENSITIVITY.fold(&self.text).into_owned()
    }

    /// Get the shared comparator for `sensitivity`.
    pub fn comparator(sensitivity: CaseSensitivity) -> &'static NameComparator {
        NameComparator::get(sensitivity)
    }

    /// Diagnostic text used when no function with this name exists.
    pub fn not_found_text(&self) -> String {
        format!("Function {:?} not found", &*self.text)
    }
}

fn validate(text: &str) -> Result<(), NameError> {
    let mut chars = text.chars().enumerate();
    match chars.next() {
        None => return Err(NameError::Empty),
        Some((_, first)) if !first.is_alphabetic() => {
            return Err(invalid(text, 0, first));
        }
        Some(_) => {}
    }
    for (position, ch) in chars {
        if !is_part(ch) {
            return Err(invalid(text, position, ch));
        }
    }
    Ok(())
}

#[inline]
fn is_part(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '-' | '.' | '_')
}

#[cold]
fn invalid(text: &str, position: usize, ch: char) -> NameError {
    NameError::InvalidCharacter {
        text: text.to_string(),
        position,
        ch,
    }
}

impl PartialEq for FunctionExpressionName {
    fn eq(&self, other: &Self) -> bool {
        Self::CASE_SENSITIVITY.eq(&self.text, &other.text)
    }
}

impl Eq for FunctionExpressionName {}

impl Hash for FunctionExpressionName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::CASE_SENSITIVITY.fold(&self.text).hash(state);
    }
}

impl AsRef<str> for FunctionExpressionName {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for FunctionExpressionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for FunctionExpressionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionExpressionName({:?})", &*self.text)
    }
}

impl TryFrom<&str> for FunctionExpressionName {
    type Error = NameError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::with(text)
    }
}

#[cfg(test)]
mod tests;
