//! FX Name - function identifiers for the formula engine.
//!
//! This crate provides the name types used to key function lookup:
//! - `FunctionExpressionName`: a validated identifier
//! - `CaseSensitivity`: the folding policy applied to names and text
//! - `NameComparator`: cached total-order comparators, one per policy
//!
//! # Grammar
//!
//! A function name starts with a letter, followed by any number of letters,
//! digits, `-`, `.` or `_`. There is no maximum length.

mod case_sensitivity;
mod comparator;
mod function_name;

pub use case_sensitivity::CaseSensitivity;
pub use comparator::NameComparator;
pub use function_name::{FunctionExpressionName, NameError};
