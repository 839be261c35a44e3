//! FX Expr - expression trees for the formula engine.
//!
//! An [`Expression`] is an immutable, reference-counted node holding an
//! [`ExpressionKind`] and an ordered child list. Trees are built once by
//! the caller (there is no parser here) and then evaluated, visited,
//! printed or edited copy-on-write.
//!
//! # Modules
//!
//! - `expression`: the node handle, constructors and structural edits
//! - `kind`: node kinds, operators and arities
//! - `value` / `reference`: leaf payloads
//! - `cursor`: parent navigation, since nodes hold no parent pointer
//! - `visitor`: start/end hook traversal
//! - `print`: the debug tree-print format
//! - `stack`: stack growth for deep recursion

mod cursor;
mod error;
mod expression;
mod kind;
mod print;
mod reference;
pub mod stack;
mod value;
pub mod visitor;

pub use cursor::ExpressionCursor;
pub use error::ExprError;
pub use expression::{Children, Expression};
pub use kind::{Arity, BinaryOperator, ExpressionKind, UnaryOperator};
pub use print::TreePrinter;
pub use reference::ExpressionReference;
pub use value::{ExpressionValue, OpaqueValue, DATE_TIME_FORMAT};
pub use visitor::{walk, ExpressionVisitor, Visiting};
