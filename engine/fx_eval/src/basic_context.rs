//! A ready-made `EvaluationContext`.

mod builder;

use std::fmt;
use std::sync::Arc;

use fx_expr::ExpressionReference;
use fx_name::{CaseSensitivity, FunctionExpressionName};
use fx_number::{DecimalNumberSymbols, ExpressionNumberKind, MathContext};
use rustc_hash::FxHashMap;

pub use builder::BasicEvaluationContextBuilder;

use crate::errors::{function_not_found, reference_not_found};
use crate::{EvalError, EvaluationContext, FunctionRegistry, SharedFunction, Value};

/// Recovery policy: a substitute value, or the error to abort with.
pub type ErrorHandler = Arc<dyn Fn(EvalError) -> Result<Value, EvalError> + Send + Sync>;

/// Context backed by a function registry and a fixed reference table.
///
/// Built with [`BasicEvaluationContext::builder`]. Defaults: decimal numbers,
/// `MathContext::DECIMAL128`, `-`/`.`/`,` symbols, case-insensitive text,
/// no functions, no references, abort on every error.
#[derive(Clone)]
pub struct BasicEvaluationContext {
    kind: ExpressionNumberKind,
    math_context: MathContext,
    symbols: DecimalNumberSymbols,
    case_sensitivity: CaseSensitivity,
    functions: FunctionRegistry,
    references: FxHashMap<ExpressionReference, Option<Value>>,
    error_handler: Option<ErrorHandler>,
}

impl BasicEvaluationContext {
    pub fn builder() -> BasicEvaluationContextBuilder {
        BasicEvaluationContextBuilder::new()
    }

    /// The registry functions are resolved from; shared with clones.
    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }
}

impl Default for BasicEvaluationContext {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EvaluationContext for BasicEvaluationContext {
    fn expression_number_kind(&self) -> ExpressionNumberKind {
        self.kind
    }

    fn math_context(&self) -> &MathContext {
        &self.math_context
    }

    fn number_symbols(&self) -> &DecimalNumberSymbols {
        &self.symbols
    }

    fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    fn function(&self, name: &FunctionExpressionName) -> Result<SharedFunction, EvalError> {
        self.functions
            .get(name)
            .ok_or_else(|| function_not_found(name))
    }

    fn reference(&self, reference: &ExpressionReference) -> Result<Option<Value>, EvalError> {
        self.references
            .get(reference)
            .cloned()
            .ok_or_else(|| reference_not_found(reference))
    }

    fn handle_error(&self, error: EvalError) -> Result<Value, EvalError> {
        match &self.error_handler {
            Some(handler) => handler(error),
            None => Err(error),
        }
    }
}

impl fmt::Debug for BasicEvaluationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicEvaluationContext")
            .field("kind", &self.kind)
            .field("math_context", &self.math_context)
            .field("symbols", &self.symbols)
            .field("case_sensitivity", &self.case_sensitivity)
            .field("functions", &self.functions)
            .field("references", &self.references.len())
            .field("error_handler", &self.error_handler.is_some())
            .finish()
    }
}
