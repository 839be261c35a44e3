//! Structural edit errors.

use crate::Arity;

/// A structural edit that the tree cannot accept.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    /// Wrong number of children for the node kind.
    #[error("{expression} takes {expected} children, got {actual}")]
    Arity {
        expression: &'static str,
        expected: Arity,
        actual: usize,
    },
    /// `replace_child` was given a node that is not a child.
    #[error("{expression} has no such child")]
    ChildNotFound { expression: &'static str },
    /// A child index past the end of the child list.
    #[error("child index {index} out of range for {expression} with {len} children")]
    ChildIndex {
        expression: &'static str,
        index: usize,
        len: usize,
    },
}
