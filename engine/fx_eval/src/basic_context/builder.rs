//! `BasicEvaluationContextBuilder` for assembling contexts.

use std::sync::Arc;

use fx_expr::ExpressionReference;
use fx_name::CaseSensitivity;
use fx_number::{DecimalNumberSymbols, ExpressionNumberKind, MathContext};
use rustc_hash::FxHashMap;

use super::{BasicEvaluationContext, ErrorHandler};
use crate::{EvalError, FunctionRegistry, SharedFunction, Value};

/// Builder for [`BasicEvaluationContext`].
pub struct BasicEvaluationContextBuilder {
    kind: ExpressionNumberKind,
    math_context: MathContext,
    symbols: DecimalNumberSymbols,
    case_sensitivity: CaseSensitivity,
    functions: Option<FunctionRegistry>,
    pending: Vec<SharedFunction>,
    references: FxHashMap<ExpressionReference, Option<Value>>,
    error_handler: Option<ErrorHandler>,
}

impl BasicEvaluationContextBuilder {
    pub fn new() -> Self {
        Self {
            kind: ExpressionNumberKind::Decimal,
            math_context: MathContext::default(),
            symbols: DecimalNumberSymbols::default(),
            case_sensitivity: CaseSensitivity::Insensitive,
            functions: None,
            pending: Vec::new(),
            references: FxHashMap::default(),
            error_handler: None,
        }
    }

    /// Set the kind every number is created as.
    #[must_use]
    pub fn number_kind(mut self, kind: ExpressionNumberKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set precision and rounding for decimal arithmetic.
    #[must_use]
    pub fn math_context(mut self, math_context: MathContext) -> Self {
        self.math_context = math_context;
        self
    }

    #[must_use]
    pub fn symbols(mut self, symbols: DecimalNumberSymbols) -> Self {
        self.symbols = symbols;
        self
    }

    /// Set how text operands compare.
    #[must_use]
    pub fn case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = case_sensitivity;
        self
    }

    /// Use an existing registry, shared with whoever else holds it.
    #[must_use]
    pub fn functions(mut self, registry: FunctionRegistry) -> Self {
        self.functions = Some(registry);
        self
    }

    /// Register `function` when the context is built.
    #[must_use]
    pub fn function(mut self, function: SharedFunction) -> Self {
        self.pending.push(function);
        self
    }

    /// Resolve `reference` to `value`. A null value means present but null.
    #[must_use]
    pub fn reference(mut self, reference: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.references
            .insert(ExpressionReference::new(reference), Some(value.into()));
        self
    }

    /// Resolve `reference` as known but absent.
    #[must_use]
    pub fn absent_reference(mut self, reference: impl AsRef<str>) -> Self {
        self.references.insert(ExpressionReference::new(reference), None);
        self
    }

    /// Set the recovery policy offered every evaluation error.
    ///
    /// Default aborts on the first error.
    #[must_use]
    pub fn error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(EvalError) -> Result<Value, EvalError> + Send + Sync + 'static,
    {
        self.error_handler = Some(Arc::new(handler));
        self
    }

    pub fn build(self) -> BasicEvaluationContext {
        let functions = self.functions.unwrap_or_default();
        for function in self.pending {
            functions.register(function);
        }
        BasicEvaluationContext {
            kind: self.kind,
            math_context: self.math_context,
            symbols: self.symbols,
            case_sensitivity: self.case_sensitivity,
            functions,
            references: self.references,
            error_handler: self.error_handler,
        }
    }
}

impl Default for BasicEvaluationContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
