//! Expression visitor.
//!
//! A read-only, depth-first traversal with paired start/end hooks. For every
//! node [`walk`] fires, in order:
//!
//! 1. `start_visit` (every node)
//! 2. if it returned `Continue`, the kind's specific start hook
//!    (`start_visit_binary`, `start_visit_value`, ...)
//! 3. if that returned `Continue`, the leaf payload hook (`visit_value`,
//!    `visit_reference`, `visit_function_name`) or every child, left to right
//! 4. the specific end hook, whenever the specific start hook fired
//! 5. `end_visit` (every node)
//!
//! Returning `Skip` from either start hook suppresses step 3.
//!
//! # Example
//!
//! ```text
//! struct CountValues(usize);
//!
//! impl ExpressionVisitor for CountValues {
//!     fn visit_value(&mut self, _value: &ExpressionValue) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut counter = CountValues(0);
//! walk(&mut counter, &expr);
//! ```

use fx_name::FunctionExpressionName;

use crate::stack::ensure_sufficient_stack;
use crate::{
    BinaryOperator, Expression, ExpressionKind, ExpressionReference, ExpressionValue,
    UnaryOperator,
};

/// Whether a start hook lets the walk descend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Visiting {
    #[default]
    Continue,
    Skip,
}

/// Hooks called by [`walk`]. Every hook defaults to doing nothing and
/// continuing.
pub trait ExpressionVisitor {
    fn start_visit(&mut self, _expr: &Expression) -> Visiting {
        Visiting::Continue
    }

    fn end_visit(&mut self, _expr: &Expression) {}

    fn start_visit_value(&mut self, _expr: &Expression) -> Visiting {
        Visiting::Continue
    }

    fn visit_value(&mut self, _value: &ExpressionValue) {}

    fn end_visit_value(&mut self, _expr: &Expression) {}

    fn start_visit_reference(&mut self, _expr: &Expression) -> Visiting {
        Visiting::Continue
    }

    fn visit_reference(&mut self, _reference: &ExpressionReference) {}

    fn end_visit_reference(&mut self, _expr: &Expression) {}

    fn start_visit_named_function(&mut self, _expr: &Expression) -> Visiting {
        Visiting::Continue
    }

    fn visit_function_name(&mut self, _name: &FunctionExpressionName) {}

    fn end_visit_named_function(&mut self, _expr: &Expression) {}

    fn start_visit_call(&mut self, _expr: &Expression) -> Visiting {
        Visiting::Continue
    }

    fn end_visit_call(&mut self, _expr: &Expression) {}

    fn start_visit_list(&mut self, _expr: &Expression) -> Visiting {
        Visiting::Continue
    }

    fn end_visit_list(&mut self, _expr: &Expression) {}

    fn start_visit_unary(&mut self, _op: UnaryOperator, _expr: &Expression) -> Visiting {
        Visiting::Continue
    }

    fn end_visit_unary(&mut self, _op: UnaryOperator, _expr: &Expression) {}

    fn start_visit_binary(&mut self, _op: BinaryOperator, _expr: &Expression) -> Visiting {
        Visiting::Continue
    }

    fn end_visit_binary(&mut self, _op: BinaryOperator, _expr: &Expression) {}
}

/// Visit `expr` and its subtree.
pub fn walk<V: ExpressionVisitor + ?Sized>(visitor: &mut V, expr: &Expression) {
    ensure_sufficient_stack(|| {
        if visitor.start_visit(expr) == Visiting::Continue {
            walk_kind(visitor, expr);
        }
        visitor.end_visit(expr);
    });
}

fn walk_kind<V: ExpressionVisitor + ?Sized>(visitor: &mut V, expr: &Expression) {
    match expr.kind() {
        ExpressionKind::Value(value) => {
            if visitor.start_visit_value(expr) == Visiting::Continue {
                visitor.visit_value(value);
            }
            visitor.end_visit_value(expr);
        }
        ExpressionKind::Reference(reference) => {
            if visitor.start_visit_reference(expr) == Visiting::Continue {
                visitor.visit_reference(reference);
            }
            visitor.end_visit_reference(expr);
        }
        ExpressionKind::NamedFunction(name) => {
            if visitor.start_visit_named_function(expr) == Visiting::Continue {
                visitor.visit_function_name(name);
            }
            visitor.end_visit_named_function(expr);
        }
        ExpressionKind::Call => {
            if visitor.start_visit_call(expr) == Visiting::Continue {
                walk_children(visitor, expr);
            }
            visitor.end_visit_call(expr);
        }
        ExpressionKind::List => {
            if visitor.start_visit_list(expr) == Visiting::Continue {
                walk_children(visitor, expr);
            }
            visitor.end_visit_list(expr);
        }
        ExpressionKind::Unary(op) => {
            if visitor.start_visit_unary(*op, expr) == Visiting::Continue {
                walk_children(visitor, expr);
            }
            visitor.end_visit_unary(*op, expr);
        }
        ExpressionKind::Binary(op) => {
            if visitor.start_visit_binary(*op, expr) == Visiting::Continue {
                walk_children(visitor, expr);
            }
            visitor.end_visit_binary(*op, expr);
        }
    }
}

fn walk_children<V: ExpressionVisitor + ?Sized>(visitor: &mut V, expr: &Expression) {
    for child in expr.children() {
        walk(visitor, child);
    }
}

impl Expression {
    /// Walk this tree with `visitor`.
    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) {
        walk(visitor, self);
    }
}

#[cfg(test)]
mod tests;
