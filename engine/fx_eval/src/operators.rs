//! Binary operator implementations for the evaluator.
//!
//! Dispatch is a `match` on the operand pair. Comparisons and the logical
//! operators have non-numeric cases for matching operand types; everything
//! else is numeric after converting both sides through the context.

use std::cmp::Ordering;

use fx_expr::BinaryOperator;
use fx_number::{ExpressionNumber, ReduceOp, Reducer};

use crate::errors::{type_mismatch, unsupported};
use crate::{EvalError, EvaluationContext, Value, ValueShape};

/// Evaluate `left op right`. Errors are returned, not offered to the
/// recovery policy; the caller does that at the operator's node.
pub(crate) fn evaluate_binary(
    left: Value,
    right: Value,
    op: BinaryOperator,
    ctx: &dyn EvaluationContext,
) -> Result<Value, EvalError> {
    if op.is_comparison() {
        let ordering = compare(left, right, ctx)?;
        return Ok(Value::Boolean(holds(op, ordering)));
    }
    match (op, &left, &right) {
        (BinaryOperator::And, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a && *b)),
        (BinaryOperator::Or, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a || *b)),
        (BinaryOperator::Xor, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(a ^ b)),
        _ => match op.reduce_op() {
            Some(reduce) => arithmetic(left, right, reduce, ctx),
            None => Err(unsupported(format!("operator {}", op.symbol()))),
        },
    }
}

/// Two raw operands stay raw and go through the reducer; anything else is
/// normalized to the context's number kind first.
fn arithmetic(
    left: Value,
    right: Value,
    op: ReduceOp,
    ctx: &dyn EvaluationContext,
) -> Result<Value, EvalError> {
    if let (Value::Raw(a), Value::Raw(b)) = (&left, &right) {
        let result = Reducer::reduce(
            a.clone(),
            b.clone(),
            op,
            ctx.expression_number_kind(),
            ctx.math_context(),
        )?;
        return Ok(Value::Raw(result));
    }
    let a = to_number(left, ctx)?;
    let b = to_number(right, ctx)?;
    Ok(Value::Number(a.combine(op, &b, ctx.math_context())?))
}

fn compare(
    left: Value,
    right: Value,
    ctx: &dyn EvaluationContext,
) -> Result<Option<Ordering>, EvalError> {
    match (&left, &right) {
        (Value::Text(a), Value::Text(b)) => Ok(Some(ctx.case_sensitivity().compare(a, b))),
        (Value::Boolean(a), Value::Boolean(b)) => Ok(Some(a.cmp(b))),
        (Value::Date(a), Value::Date(b)) => Ok(Some(a.cmp(b))),
        (Value::DateTime(a), Value::DateTime(b)) => Ok(Some(a.cmp(b))),
        (Value::Time(a), Value::Time(b)) => Ok(Some(a.cmp(b))),
        (Value::Raw(a), Value::Raw(b)) => Ok(Reducer::compare(a, b)),
        _ => {
            let a = to_number(left, ctx)?;
            let b = to_number(right, ctx)?;
            Ok(a.try_cmp(&b)?)
        }
    }
}

/// Whether `op` holds for `ordering`. Unordered (NaN) operands are only
/// ever not-equal.
fn holds(op: BinaryOperator, ordering: Option<Ordering>) -> bool {
    match op {
        BinaryOperator::Equals => ordering == Some(Ordering::Equal),
        BinaryOperator::NotEquals => ordering != Some(Ordering::Equal),
        BinaryOperator::LessThan => ordering == Some(Ordering::Less),
        BinaryOperator::LessThanEquals => {
            matches!(ordering, Some(Ordering::Less | Ordering::Equal))
        }
        BinaryOperator::GreaterThan => ordering == Some(Ordering::Greater),
        BinaryOperator::GreaterThanEquals => {
            matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
        }
        _ => false,
    }
}

/// Convert through the context and unwrap the number.
pub(crate) fn to_number(
    value: Value,
    ctx: &dyn EvaluationContext,
) -> Result<ExpressionNumber, EvalError> {
    match ctx.convert(value, ValueShape::Number)? {
        Value::Number(n) => Ok(n),
        other => Err(type_mismatch(ValueShape::Number.name(), other.type_name())),
    }
}

/// Convert through the context and unwrap the boolean.
pub(crate) fn to_boolean(value: Value, ctx: &dyn EvaluationContext) -> Result<bool, EvalError> {
    match ctx.convert(value, ValueShape::Boolean)? {
        Value::Boolean(b) => Ok(b),
        other => Err(type_mismatch(ValueShape::Boolean.name(), other.type_name())),
    }
}
