//! FX Number - the numbers used while evaluating formula expressions.
//!
//! # Kinds
//!
//! An evaluation runs with exactly one `ExpressionNumberKind`:
//! - `Binary`: IEEE 754 `f64`
//! - `Decimal`: arbitrary precision decimal, rounded per `MathContext`
//!
//! Numbers are created through the kind (`kind.create(raw)`), which is the
//! only place a raw value is normalized. After that, operations between two
//! numbers never change kind, and mixing kinds is a `KindMismatch` error.
//!
//! # Promotion
//!
//! Raw values from upstream conversion arrive as one of eight native
//! representations (`RawNumber`). The `Reducer` combines two of them by
//! promoting both to a common rank (`NumberRank`) and applying the operator
//! there. Decimal-kind arithmetic is implemented on top of the reducer.

mod error;
mod kind;
mod math_context;
mod number;
mod raw;
mod reducer;
mod sign;
mod symbols;

pub use error::NumberError;
pub use kind::ExpressionNumberKind;
pub use math_context::MathContext;
pub use number::ExpressionNumber;
pub use raw::RawNumber;
pub use reducer::{NumberRank, ReduceOp, Reducer, MAX_EXPONENT};
pub use sign::ExpressionNumberSign;
pub use symbols::DecimalNumberSymbols;

// Re-exported so embedders name the same crate versions.
pub use bigdecimal::{BigDecimal, RoundingMode};
pub use num_bigint::BigInt;
