//! The expression handle, its constructors and copy-on-write edits.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fx_name::FunctionExpressionName;
use fx_number::ExpressionNumber;
use smallvec::SmallVec;

use crate::stack::ensure_sufficient_stack;
use crate::{
    Arity, BinaryOperator, ExprError, ExpressionKind, ExpressionReference, ExpressionValue,
    UnaryOperator,
};

/// Child list storage; binary nodes are the common case.
pub type Children = SmallVec<[Expression; 2]>;

/// An immutable expression tree node.
///
/// Cloning is an `Arc` bump. Nodes never point at their parent, so the same
/// subtree may be shared by many trees; use [`crate::ExpressionCursor`] to
/// navigate upward.
///
/// Edits (`set_children`, `replace_child`) return new nodes and leave the
/// receiver untouched.
#[derive(Clone)]
pub struct Expression(Arc<ExpressionNode>);

struct ExpressionNode {
    kind: ExpressionKind,
    children: Children,
}

impl Drop for ExpressionNode {
    // Unlink uniquely owned descendants one at a time so that dropping a
    // deep tree does not recurse.
    fn drop(&mut self) {
        let mut pending: Vec<Expression> = self.children.drain(..).collect();
        while let Some(expr) = pending.pop() {
            if let Some(mut node) = Arc::into_inner(expr.0) {
                pending.extend(node.children.drain(..));
            }
        }
    }
}

impl Expression {
    /// Build a node, checking `children` against the kind's arity.
    pub fn new(
        kind: ExpressionKind,
        children: impl IntoIterator<Item = Expression>,
    ) -> Result<Self, ExprError> {
        let children: Children = children.into_iter().collect();
        check_arity(&kind, children.len())?;
        Ok(Self::node(kind, children))
    }

    fn node(kind: ExpressionKind, children: Children) -> Self {
        Expression(Arc::new(ExpressionNode { kind, children }))
    }

    fn leaf(kind: ExpressionKind) -> Self {
        Self::node(kind, Children::new())
    }

    // Leaves

    pub fn value(value: impl Into<ExpressionValue>) -> Self {
        Self::leaf(ExpressionKind::Value(value.into()))
    }

    pub fn null() -> Self {
        Self::value(ExpressionValue::Null)
    }

    pub fn boolean(value: bool) -> Self {
        Self::value(ExpressionValue::Boolean(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::value(ExpressionValue::Text(value.into()))
    }

    pub fn number(value: ExpressionNumber) -> Self {
        Self::value(ExpressionValue::Number(value))
    }

    pub fn date(value: NaiveDate) -> Self {
        Self::value(ExpressionValue::Date(value))
    }

    pub fn date_time(value: NaiveDateTime) -> Self {
        Self::value(ExpressionValue::DateTime(value))
    }

    pub fn time(value: NaiveTime) -> Self {
        Self::value(ExpressionValue::Time(value))
    }

    pub fn reference(reference: ExpressionReference) -> Self {
        Self::leaf(ExpressionKind::Reference(reference))
    }

    pub fn named_function(name: FunctionExpressionName) -> Self {
        Self::leaf(ExpressionKind::NamedFunction(name))
    }

    // Composites

    /// Call `callable` (usually a named function) with `arguments`.
    pub fn call(callable: Expression, arguments: impl IntoIterator<Item = Expression>) -> Self {
        let mut children = Children::new();
        children.push(callable);
        children.extend(arguments);
        Self::node(ExpressionKind::Call, children)
    }

    pub fn list(items: impl IntoIterator<Item = Expression>) -> Self {
        Self::node(ExpressionKind::List, items.into_iter().collect())
    }

    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        let mut children = Children::new();
        children.push(operand);
        Self::node(ExpressionKind::Unary(op), children)
    }

    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        let mut children = Children::new();
        children.push(left);
        children.push(right);
        Self::node(ExpressionKind::Binary(op), children)
    }

    pub fn negate(operand: Expression) -> Self {
        Self::unary(UnaryOperator::Negate, operand)
    }

    pub fn not(operand: Expression) -> Self {
        Self::unary(UnaryOperator::Not, operand)
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Add, left, right)
    }

    pub fn subtract(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Subtract, left, right)
    }

    pub fn multiply(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Multiply, left, right)
    }

    pub fn divide(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Divide, left, right)
    }

    pub fn modulo(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Modulo, left, right)
    }

    pub fn power(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Power, left, right)
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::And, left, right)
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Or, left, right)
    }

    pub fn xor(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Xor, left, right)
    }

    pub fn equals(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::Equals, left, right)
    }

    pub fn not_equals(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::NotEquals, left, right)
    }

    pub fn less_than(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::LessThan, left, right)
    }

    pub fn less_than_equals(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::LessThanEquals, left, right)
    }

    pub fn greater_than(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::GreaterThan, left, right)
    }

    pub fn greater_than_equals(left: Expression, right: Expression) -> Self {
        Self::binary(BinaryOperator::GreaterThanEquals, left, right)
    }

    // Accessors

    #[inline]
    pub fn kind(&self) -> &ExpressionKind {
        &self.0.kind
    }

    #[inline]
    pub fn children(&self) -> &[Expression] {
        &self.0.children
    }

    pub fn child(&self, index: usize) -> Option<&Expression> {
        self.0.children.get(index)
    }

    pub fn arity(&self) -> Arity {
        self.kind().arity()
    }

    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    /// `AddExpression`, `ValueExpression`, ...
    pub fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Text printed after the display name, if any.
    pub fn suffix(&self) -> Option<String> {
        self.kind().suffix()
    }

    /// The payload of a `Value` node.
    pub fn as_value(&self) -> Option<&ExpressionValue> {
        match self.kind() {
            ExpressionKind::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Whether both handles point at the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &Expression) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    // Edits

    /// This node with `children` in place of its own.
    ///
    /// Returns the receiver itself (same allocation) when `children` equal
    /// the current ones.
    pub fn set_children(
        &self,
        children: impl IntoIterator<Item = Expression>,
    ) -> Result<Self, ExprError> {
        let children: Children = children.into_iter().collect();
        check_arity(self.kind(), children.len())?;
        if children.as_slice() == self.children() {
            return Ok(self.clone());
        }
        Ok(Self::node(self.kind().clone(), children))
    }

    /// This node with the child `old` replaced by `new`.
    ///
    /// The first child that is `old` (same node) is replaced; failing that,
    /// the first child equal to it.
    pub fn replace_child(&self, old: &Expression, new: Expression) -> Result<Self, ExprError> {
        let children = self.children();
        let index = children
            .iter()
            .position(|child| child.ptr_eq(old))
            .or_else(|| children.iter().position(|child| child == old))
            .ok_or(ExprError::ChildNotFound {
                expression: self.display_name(),
            })?;
        self.with_child(index, new)
    }

    /// This node with the child at `index` replaced by `new`.
    pub fn with_child(&self, index: usize, new: Expression) -> Result<Self, ExprError> {
        if index >= self.children().len() {
            return Err(ExprError::ChildIndex {
                expression: self.display_name(),
                index,
                len: self.children().len(),
            });
        }
        if self.children()[index].ptr_eq(&new) {
            return Ok(self.clone());
        }
        let mut children: Children = self.children().iter().cloned().collect();
        children[index] = new;
        Ok(Self::node(self.kind().clone(), children))
    }
}

fn check_arity(kind: &ExpressionKind, actual: usize) -> Result<(), ExprError> {
    let expected = kind.arity();
    if expected.accepts(actual) {
        Ok(())
    } else {
        Err(ExprError::Arity {
            expression: kind.display_name(),
            expected,
            actual,
        })
    }
}

impl PartialEq for Expression {
    /// Same kind, equal payload and equal children. The same node is always
    /// equal to itself.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || ensure_sufficient_stack(|| {
                self.0.kind == other.0.kind && self.0.children == other.0.children
            })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.kind(), f)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children().is_empty() {
            return write!(f, "{}", self.kind());
        }
        write!(f, "{} ", self.display_name())?;
        ensure_sufficient_stack(|| f.debug_list().entries(self.children()).finish())
    }
}

#[cfg(test)]
mod tests;
