use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use fx_expr::{Arity, Expression, ExpressionReference};
use fx_name::FunctionExpressionName;
use fx_number::{ExpressionNumberKind, RawNumber};
use pretty_assertions::assert_eq;

use super::Evaluate;
use crate::{
    BasicEvaluationContext, BasicFunction, EvalError, EvalErrorKind, EvaluationContext, Value,
    ValueShape,
};

const DECIMAL: ExpressionNumberKind = ExpressionNumberKind::Decimal;

fn name(text: &str) -> FunctionExpressionName {
    FunctionExpressionName::with(text).unwrap_or_else(|e| panic!("{e}"))
}

fn int(value: i64) -> Expression {
    Expression::number(DECIMAL.from_i64(value))
}

fn reference(text: &str) -> Expression {
    Expression::reference(ExpressionReference::new(text))
}

fn value(expr: &Expression, ctx: &dyn EvaluationContext) -> Value {
    expr.to_value(ctx).unwrap_or_else(|e| panic!("{e}"))
}

fn error(expr: &Expression, ctx: &dyn EvaluationContext) -> EvalError {
    match expr.to_value(ctx) {
        Ok(v) => panic!("expected an error, got {v:?}"),
        Err(e) => e,
    }
}

fn double() -> BasicFunction {
    BasicFunction::new(name("double"), Arity::Exact(1), |params, ctx| {
        let [Value::Number(n)] = params else {
            return Err(EvalError::new("double takes one number"));
        };
        Ok(Value::Number(n.add(n, ctx.math_context())?))
    })
    .with_parameter_shape(ValueShape::Number)
}

/// Context whose recovery policy counts calls and substitutes `substitute`,
/// or aborts when it is `None`.
fn counting(substitute: Option<Value>) -> (BasicEvaluationContext, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let ctx = BasicEvaluationContext::builder()
        .error_handler(move |error| {
            seen.fetch_add(1, Ordering::SeqCst);
            substitute.clone().ok_or(error)
        })
        .build();
    (ctx, calls)
}

#[test]
fn add_of_multiply_with_conversions() {
    let ctx = BasicEvaluationContext::default();
    let expr = Expression::add(
        Expression::number(DECIMAL.from_f64(1.5).unwrap_or_else(|e| panic!("{e}"))),
        Expression::multiply(Expression::text("20"), Expression::boolean(true)),
    );
    let result = expr.to_expression_number(&ctx).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(result.to_string(), "21.5");
}

#[test]
fn reference_outcomes() {
    let ctx = BasicEvaluationContext::builder()
        .reference("A1", "x")
        .absent_reference("B1")
        .build();
    assert_eq!(value(&reference("A1"), &ctx), Value::text("x"));
    assert_eq!(value(&reference("B1"), &ctx), Value::Null);

    let err = error(&reference("C1"), &ctx);
    assert_eq!(
        err.kind,
        EvalErrorKind::ReferenceNotFound {
            reference: ExpressionReference::new("C1"),
        }
    );
    assert_eq!(err.to_string(), "Reference \"C1\" not found (at ReferenceExpression C1)");
}

#[test]
fn raw_references_reduce_before_normalizing() {
    let ctx = BasicEvaluationContext::builder()
        .reference("A1", Value::raw(60_i64))
        .reference("B1", Value::raw(12_i64))
        .build();
    let expr = Expression::divide(reference("A1"), reference("B1"));
    assert_eq!(value(&expr, &ctx), Value::Raw(RawNumber::I64(5)));
    let number = expr.to_expression_number(&ctx).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(number, DECIMAL.from_i64(5));
}

#[test]
fn unary_operators() {
    let ctx = BasicEvaluationContext::default();
    assert_eq!(value(&Expression::negate(int(4)), &ctx), Value::Number(DECIMAL.from_i64(-4)));
    assert_eq!(value(&Expression::not(Expression::text("TRUE")), &ctx), Value::from(false));
    assert_eq!(value(&Expression::not(int(0)), &ctx), Value::from(true));
}

#[test]
fn list_evaluates_items_in_order() {
    let ctx = BasicEvaluationContext::default();
    let list = Expression::list([Expression::boolean(true), Expression::add(int(1), int(2))]);
    assert_eq!(
        value(&list, &ctx),
        Value::List(vec![Value::from(true), Value::Number(DECIMAL.from_i64(3))])
    );
}

#[test]
fn call_converts_parameters_to_the_function_shape() {
    let ctx = BasicEvaluationContext::builder()
        .function(double().shared())
        .build();
    let expr = Expression::call(
        Expression::named_function(name("DOUBLE")),
        [Expression::text("21")],
    );
    assert_eq!(value(&expr, &ctx), Value::Number(DECIMAL.from_i64(42)));
}

#[test]
fn call_checks_arity() {
    let ctx = BasicEvaluationContext::builder()
        .function(double().shared())
        .build();
    let expr = Expression::call(Expression::named_function(name("double")), [int(1), int(2)]);
    let err = error(&expr, &ctx);
    assert_eq!(err.message, "double expects exactly 1 arguments, got 2");
    assert_eq!(err.expression.as_deref(), Some("CallExpression"));
}

#[test]
fn call_of_a_non_function() {
    let ctx = BasicEvaluationContext::default();
    let expr = Expression::call(Expression::boolean(true), Vec::<Expression>::new());
    assert_eq!(
        error(&expr, &ctx).kind,
        EvalErrorKind::NotCallable {
            type_name: "Boolean".into(),
        }
    );
}

#[test]
fn unknown_function() {
    let ctx = BasicEvaluationContext::default();
    let expr = Expression::call(Expression::named_function(name("nope")), [int(1)]);
    let err = error(&expr, &ctx);
    assert_eq!(err.message, "Function \"nope\" not found");
    assert_eq!(err.expression.as_deref(), Some("NamedFunctionExpression nope"));
}

#[test]
fn named_function_evaluates_to_the_function() {
    let function = double().shared();
    let ctx = BasicEvaluationContext::builder()
        .function(Arc::clone(&function))
        .build();
    let resolved = value(&Expression::named_function(name("double")), &ctx);
    assert_eq!(resolved, Value::Function(function));
}

#[test]
fn typed_value_of_a_function_name_is_unsupported() {
    let ctx = BasicEvaluationContext::builder()
        .function(double().shared())
        .build();
    let err = Expression::named_function(name("double"))
        .to_boolean(&ctx)
        .map_err(|e| e.kind);
    assert!(matches!(err, Err(EvalErrorKind::Unsupported { .. })));
}

#[test]
fn typed_entries_convert() {
    let ctx = BasicEvaluationContext::default();
    let day = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap_or_else(|| panic!("valid date"));
    let noon = day.and_hms_opt(12, 0, 0).unwrap_or_else(|| panic!("valid time"));
    let expr = Expression::date_time(noon);
    assert_eq!(expr.to_local_date(&ctx), Ok(day));
    assert_eq!(expr.to_local_time(&ctx), Ok(noon.time()));
    assert_eq!(expr.to_text(&ctx), Ok("2023-07-01T12:00:00".to_string()));
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .unwrap_or_else(|| panic!("valid time"));
    assert_eq!(Expression::date(day).to_local_date_time(&ctx), Ok(midnight));
    assert_eq!(Expression::add(int(1), int(1)).to_text(&ctx), Ok("2".to_string()));
}

#[test]
fn failed_conversion_is_a_conversion_error() {
    let ctx = BasicEvaluationContext::default();
    let err = Expression::text("maybe").to_boolean(&ctx).map_err(|e| e.kind);
    assert_eq!(
        err,
        Err(EvalErrorKind::Conversion {
            from: "Text".into(),
            to: ValueShape::Boolean,
        })
    );
}

#[test]
fn recovery_substitutes_at_the_raising_node() {
    let (ctx, calls) = counting(Some(Value::Number(DECIMAL.zero())));
    let expr = Expression::add(int(1), Expression::divide(int(1), int(0)));
    assert_eq!(value(&expr, &ctx), Value::Number(DECIMAL.from_i64(1)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn aborted_errors_are_offered_once() {
    let (ctx, calls) = counting(None);
    let expr = Expression::negate(Expression::add(int(1), Expression::modulo(int(1), int(0))));
    let err = error(&expr, &ctx);
    assert_eq!(err.kind, EvalErrorKind::ModuloByZero);
    assert_eq!(err.expression.as_deref(), Some("ModuloExpression"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn recovered_typed_conversion_converts_the_substitute() {
    let (ctx, calls) = counting(Some(Value::from(true)));
    let result = Expression::text("maybe").to_boolean(&ctx);
    assert_eq!(result, Ok(true));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn binary_kind_division_by_zero_is_infinite() {
    let ctx = BasicEvaluationContext::builder()
        .number_kind(ExpressionNumberKind::Binary)
        .build();
    let expr = Expression::divide(int(1), int(0));
    let result = expr.to_expression_number(&ctx).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(result.to_f64(), f64::INFINITY);
}

#[test]
fn deep_trees_do_not_overflow_the_stack() {
    let ctx = BasicEvaluationContext::default();
    let mut expr = int(1);
    for _ in 0..100_001 {
        expr = Expression::negate(expr);
    }
    assert_eq!(value(&expr, &ctx), Value::Number(DECIMAL.from_i64(-1)));
}
