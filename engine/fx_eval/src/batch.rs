//! Parallel evaluation of independent trees.

use fx_expr::Expression;
use rayon::prelude::*;

use crate::{EvalError, EvaluationContext, Evaluate, Value};

/// Evaluate every expression against `ctx` on the rayon pool.
///
/// Results come back in input order. Each evaluation is independent: one
/// failing does not affect the others.
pub fn evaluate_all(
    expressions: &[Expression],
    ctx: &dyn EvaluationContext,
) -> Vec<Result<Value, EvalError>> {
    tracing::debug!(count = expressions.len(), "evaluating batch");
    expressions
        .par_iter()
        .map(|expr| expr.to_value(ctx))
        .collect()
}
