//! Tree-walking evaluation.
//!
//! # Recovery
//!
//! Every error is handed to [`EvaluationContext::handle_error`] exactly once,
//! at the node that raised it: a reference that does not resolve, a value
//! that does not convert, an operator that fails, a function that fails.
//! A substitute returned by the policy becomes that node's value and
//! evaluation continues with the parent. Errors coming up from a child were
//! already offered and propagate unchanged.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fx_expr::stack::ensure_sufficient_stack;
use fx_expr::{Expression, ExpressionKind, UnaryOperator};
use fx_number::ExpressionNumber;

use crate::errors::{arity_mismatch, not_callable, type_mismatch, unsupported};
use crate::operators::{evaluate_binary, to_boolean, to_number};
use crate::{EvalError, EvaluationContext, Value, ValueShape};

/// Evaluation entry points on an expression tree.
///
/// `to_value` returns the raw result; the typed entries additionally convert
/// it through the context and fail with `TypeMismatch` when a custom
/// converter answers with the wrong shape.
pub trait Evaluate {
    fn to_value(&self, ctx: &dyn EvaluationContext) -> Result<Value, EvalError>;

    fn to_boolean(&self, ctx: &dyn EvaluationContext) -> Result<bool, EvalError>;

    fn to_expression_number(
        &self,
        ctx: &dyn EvaluationContext,
    ) -> Result<ExpressionNumber, EvalError>;

    fn to_text(&self, ctx: &dyn EvaluationContext) -> Result<String, EvalError>;

    fn to_local_date(&self, ctx: &dyn EvaluationContext) -> Result<NaiveDate, EvalError>;

    fn to_local_date_time(&self, ctx: &dyn EvaluationContext) -> Result<NaiveDateTime, EvalError>;

    fn to_local_time(&self, ctx: &dyn EvaluationContext) -> Result<NaiveTime, EvalError>;
}

impl Evaluate for Expression {
    fn to_value(&self, ctx: &dyn EvaluationContext) -> Result<Value, EvalError> {
        eval(self, ctx)
    }

    fn to_boolean(&self, ctx: &dyn EvaluationContext) -> Result<bool, EvalError> {
        typed(self, ctx, ValueShape::Boolean, |value| match value {
            Value::Boolean(b) => Ok(b),
            other => Err(other),
        })
    }

    fn to_expression_number(
        &self,
        ctx: &dyn EvaluationContext,
    ) -> Result<ExpressionNumber, EvalError> {
        typed(self, ctx, ValueShape::Number, |value| match value {
            Value::Number(n) => Ok(n),
            other => Err(other),
        })
    }

    fn to_text(&self, ctx: &dyn EvaluationContext) -> Result<String, EvalError> {
        typed(self, ctx, ValueShape::Text, |value| match value {
            Value::Text(text) => Ok(text),
            other => Err(other),
        })
    }

    fn to_local_date(&self, ctx: &dyn EvaluationContext) -> Result<NaiveDate, EvalError> {
        typed(self, ctx, ValueShape::Date, |value| match value {
            Value::Date(date) => Ok(date),
            other => Err(other),
        })
    }

    fn to_local_date_time(&self, ctx: &dyn EvaluationContext) -> Result<NaiveDateTime, EvalError> {
        typed(self, ctx, ValueShape::DateTime, |value| match value {
            Value::DateTime(date_time) => Ok(date_time),
            other => Err(other),
        })
    }

    fn to_local_time(&self, ctx: &dyn EvaluationContext) -> Result<NaiveTime, EvalError> {
        typed(self, ctx, ValueShape::Time, |value| match value {
            Value::Time(time) => Ok(time),
            other => Err(other),
        })
    }
}

/// Evaluate, convert to `shape`, then unwrap with `extract`.
///
/// A bare function name has no boolean, number, text or temporal value, so
/// asking for one is `Unsupported` and is not offered to the recovery policy.
fn typed<T>(
    expr: &Expression,
    ctx: &dyn EvaluationContext,
    shape: ValueShape,
    extract: impl FnOnce(Value) -> Result<T, Value>,
) -> Result<T, EvalError> {
    if let ExpressionKind::NamedFunction(name) = expr.kind() {
        return Err(unsupported(format!("function {name} has no {shape} value")).at(expr));
    }
    let value = eval(expr, ctx)?;
    let converted = match ctx.convert(value, shape) {
        Ok(converted) => converted,
        Err(error) => {
            let substitute = raise(expr, ctx, error)?;
            ctx.convert(substitute, shape).map_err(|e| e.at(expr))?
        }
    };
    extract(converted).map_err(|other| type_mismatch(shape.name(), other.type_name()).at(expr))
}

fn eval(expr: &Expression, ctx: &dyn EvaluationContext) -> Result<Value, EvalError> {
    ensure_sufficient_stack(|| eval_inner(expr, ctx))
}

fn eval_inner(expr: &Expression, ctx: &dyn EvaluationContext) -> Result<Value, EvalError> {
    match expr.kind() {
        ExpressionKind::Value(value) => Ok(Value::from(value)),
        ExpressionKind::Reference(reference) => {
            tracing::trace!(%reference, "resolving reference");
            match ctx.reference(reference) {
                Ok(Some(value)) => Ok(value),
                Ok(None) => Ok(Value::Null),
                Err(error) => raise(expr, ctx, error),
            }
        }
        ExpressionKind::NamedFunction(name) => {
            tracing::trace!(function = %name, "resolving function");
            match ctx.function(name) {
                Ok(function) => Ok(Value::Function(function)),
                Err(error) => raise(expr, ctx, error),
            }
        }
        ExpressionKind::Call => call(expr, ctx),
        ExpressionKind::List => expr
            .children()
            .iter()
            .map(|item| eval(item, ctx))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        ExpressionKind::Unary(op) => {
            let [operand] = expr.children() else {
                return raise(expr, ctx, arity_error(expr));
            };
            let operand = eval(operand, ctx)?;
            let result = match op {
                UnaryOperator::Negate => to_number(operand, ctx).map(|n| Value::Number(n.negate())),
                UnaryOperator::Not => to_boolean(operand, ctx).map(|b| Value::Boolean(!b)),
            };
            result.or_else(|error| raise(expr, ctx, error))
        }
        ExpressionKind::Binary(op) => {
            let [left, right] = expr.children() else {
                return raise(expr, ctx, arity_error(expr));
            };
            let left = eval(left, ctx)?;
            let right = eval(right, ctx)?;
            evaluate_binary(left, right, *op, ctx).or_else(|error| raise(expr, ctx, error))
        }
    }
}

/// Evaluate `[callable, args...]`: resolve the callable, evaluate the
/// arguments in order, check the count, convert each to the function's
/// parameter shape, apply.
#[tracing::instrument(level = "debug", skip_all, fields(expression = %expr))]
fn call(expr: &Expression, ctx: &dyn EvaluationContext) -> Result<Value, EvalError> {
    let Some((callable, arguments)) = expr.children().split_first() else {
        return raise(expr, ctx, arity_error(expr));
    };
    let function = match eval(callable, ctx)? {
        Value::Function(function) => function,
        other => return raise(expr, ctx, not_callable(other.type_name())),
    };

    let mut parameters = Vec::with_capacity(arguments.len());
    for argument in arguments {
        parameters.push(eval(argument, ctx)?);
    }

    let arity = function.arity();
    if !arity.accepts(parameters.len()) {
        let error = arity_mismatch(function.name().as_str(), &arity.to_string(), parameters.len());
        return raise(expr, ctx, error);
    }

    let mut converted = Vec::with_capacity(parameters.len());
    for (index, parameter) in parameters.into_iter().enumerate() {
        match ctx.convert(parameter, function.parameter_shape(index)) {
            Ok(value) => converted.push(value),
            Err(error) => return raise(expr, ctx, error),
        }
    }

    tracing::debug!(function = %function.name(), parameters = converted.len(), "applying");
    function
        .apply(&converted, ctx)
        .or_else(|error| raise(expr, ctx, error))
}

/// Offer `error`, located at `expr`, to the recovery policy.
#[cold]
fn raise(
    expr: &Expression,
    ctx: &dyn EvaluationContext,
    error: EvalError,
) -> Result<Value, EvalError> {
    let error = error.at(expr);
    tracing::debug!(%error, "offering error to recovery policy");
    let outcome = ctx.handle_error(error);
    match &outcome {
        Ok(substitute) => tracing::debug!(%substitute, "recovered"),
        Err(_) => tracing::debug!("aborting"),
    }
    outcome
}

#[cold]
fn arity_error(expr: &Expression) -> EvalError {
    arity_mismatch(
        expr.display_name(),
        &expr.arity().to_string(),
        expr.children().len(),
    )
}

#[cfg(test)]
mod tests;
