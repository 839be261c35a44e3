//! Node kinds, operators and arities.

use std::fmt;

use fx_name::FunctionExpressionName;
use fx_number::ReduceOp;

use crate::{ExpressionReference, ExpressionValue};

/// Number of children a node kind accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    #[inline]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Numeric negation.
    Negate,
    /// Boolean negation.
    Not,
}

impl UnaryOperator {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Negate => "Negate",
            Self::Not => "Not",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
        }
    }
}

/// Infix operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    And,
    Or,
    Xor,
    Equals,
    NotEquals,
    LessThan,
    LessThanEquals,
    GreaterThan,
    GreaterThanEquals,
}

impl BinaryOperator {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Modulo => "Modulo",
            Self::Power => "Power",
            Self::And => "And",
            Self::Or => "Or",
            Self::Xor => "Xor",
            Self::Equals => "Equals",
            Self::NotEquals => "NotEquals",
            Self::LessThan => "LessThan",
            Self::LessThanEquals => "LessThanEquals",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanEquals => "GreaterThanEquals",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "^",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^^",
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::LessThan => "<",
            Self::LessThanEquals => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEquals => ">=",
        }
    }

    /// Operators producing a boolean from an ordering.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Equals
                | Self::NotEquals
                | Self::LessThan
                | Self::LessThanEquals
                | Self::GreaterThan
                | Self::GreaterThanEquals
        )
    }

    /// Operators that are logical on two booleans and bitwise otherwise.
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor)
    }

    /// The numeric operation this operator reduces with, if any.
    pub const fn reduce_op(self) -> Option<ReduceOp> {
        Some(match self {
            Self::Add => ReduceOp::Add,
            Self::Subtract => ReduceOp::Subtract,
            Self::Multiply => ReduceOp::Multiply,
            Self::Divide => ReduceOp::Divide,
            Self::Modulo => ReduceOp::Modulo,
            Self::Power => ReduceOp::Power,
            Self::And => ReduceOp::And,
            Self::Or => ReduceOp::Or,
            Self::Xor => ReduceOp::Xor,
            _ => return None,
        })
    }
}

/// What a node is. Children are held by the node, not the kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ExpressionKind {
    /// Literal or pre-computed value. Leaf.
    Value(ExpressionValue),
    /// Reference resolved by the evaluation context. Leaf.
    Reference(ExpressionReference),
    /// Reference to a function by name. Leaf.
    NamedFunction(FunctionExpressionName),
    /// `[callable, args...]`.
    Call,
    /// Items in order.
    List,
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

impl ExpressionKind {
    /// Accepted child counts.
    pub const fn arity(&self) -> Arity {
        match self {
            Self::Value(_) | Self::Reference(_) | Self::NamedFunction(_) => Arity::Exact(0),
            Self::Call => Arity::AtLeast(1),
            Self::List => Arity::AtLeast(0),
            Self::Unary(_) => Arity::Exact(1),
            Self::Binary(_) => Arity::Exact(2),
        }
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::Value(_) | Self::Reference(_) | Self::NamedFunction(_)
        )
    }

    /// Short tag, `Add` for an add node.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Value(_) => "Value",
            Self::Reference(_) => "Reference",
            Self::NamedFunction(_) => "NamedFunction",
            Self::Call => "Call",
            Self::List => "List",
            Self::Unary(op) => op.tag(),
            Self::Binary(op) => op.tag(),
        }
    }

    /// Name used in tree printing and diagnostics, `AddExpression` for an
    /// add node.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Value(_) => "ValueExpression",
            Self::Reference(_) => "ReferenceExpression",
            Self::NamedFunction(_) => "NamedFunctionExpression",
            Self::Call => "CallExpression",
            Self::List => "ListExpression",
            Self::Unary(UnaryOperator::Negate) => "NegateExpression",
            Self::Unary(UnaryOperator::Not) => "NotExpression",
            Self::Binary(op) => match op {
                BinaryOperator::Add => "AddExpression",
                BinaryOperator::Subtract => "SubtractExpression",
                BinaryOperator::Multiply => "MultiplyExpression",
                BinaryOperator::Divide => "DivideExpression",
                BinaryOperator::Modulo => "ModuloExpression",
                BinaryOperator::Power => "PowerExpression",
                BinaryOperator::And => "AndExpression",
                BinaryOperator::Or => "OrExpression",
                BinaryOperator::Xor => "XorExpression",
                BinaryOperator::Equals => "EqualsExpression",
                BinaryOperator::NotEquals => "NotEqualsExpression",
                BinaryOperator::LessThan => "LessThanExpression",
                BinaryOperator::LessThanEquals => "LessThanEqualsExpression",
                BinaryOperator::GreaterThan => "GreaterThanExpression",
                BinaryOperator::GreaterThanEquals => "GreaterThanEqualsExpression",
            },
        }
    }

    /// Text printed after the display name, if any.
    pub fn suffix(&self) -> Option<String> {
        match self {
            Self::Value(value) => Some(value.to_string()),
            Self::Reference(reference) => Some(reference.to_string()),
            Self::NamedFunction(name) => Some(name.to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())?;
        if let Some(suffix) = self.suffix() {
            write!(f, " {suffix}")?;
        }
        Ok(())
    }
}
