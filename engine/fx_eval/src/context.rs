//! The evaluation context protocol.

use fx_expr::ExpressionReference;
use fx_name::{CaseSensitivity, FunctionExpressionName};
use fx_number::{DecimalNumberSymbols, ExpressionNumberKind, MathContext};

use crate::{converter, EvalError, SharedFunction, Value, ValueShape};

/// Everything evaluation needs from its environment.
///
/// Implemented by the embedder. The core supplies no functions, references
/// or locale data of its own; [`crate::BasicEvaluationContext`] is a
/// ready-made implementation.
pub trait EvaluationContext: Send + Sync {
    /// Kind every number in this evaluation is created as.
    fn expression_number_kind(&self) -> ExpressionNumberKind;

    /// Precision and rounding for decimal arithmetic.
    fn math_context(&self) -> &MathContext;

    /// Locale symbols for number text.
    fn number_symbols(&self) -> &DecimalNumberSymbols;

    /// How text operands compare.
    fn case_sensitivity(&self) -> CaseSensitivity;

    /// Convert `value` to `target`.
    ///
    /// Defaults to the built-in rules in [`crate::converter`].
    fn convert(&self, value: Value, target: ValueShape) -> Result<Value, EvalError> {
        converter::convert(
            value,
            target,
            self.expression_number_kind(),
            self.number_symbols(),
        )
    }

    /// Resolve a function by name.
    fn function(&self, name: &FunctionExpressionName) -> Result<SharedFunction, EvalError>;

    /// Resolve a reference: `Ok(None)` when absent, `Ok(Some(Value::Null))`
    /// when present but null, `Err` when unknown.
    fn reference(&self, reference: &ExpressionReference) -> Result<Option<Value>, EvalError>;

    /// Recovery policy, offered every error once at the node that raised
    /// it. Return a substitute value to continue, or the error to abort.
    ///
    /// Defaults to aborting.
    fn handle_error(&self, error: EvalError) -> Result<Value, EvalError> {
        Err(error)
    }
}
