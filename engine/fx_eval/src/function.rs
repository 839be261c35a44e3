//! Functions callable from expressions.

use std::fmt;
use std::sync::Arc;

use fx_expr::Arity;
use fx_name::FunctionExpressionName;

use crate::{EvalError, EvaluationContext, Value, ValueShape};

/// A function a `Call` node can apply.
///
/// Parameters arrive evaluated and converted to
/// [`parameter_shape`](ExpressionFunction::parameter_shape), after the
/// count was checked against [`arity`](ExpressionFunction::arity).
pub trait ExpressionFunction: Send + Sync {
    fn name(&self) -> &FunctionExpressionName;

    /// Accepted parameter counts.
    fn arity(&self) -> Arity {
        Arity::AtLeast(0)
    }

    /// Shape the parameter at `index` is converted to before `apply`.
    fn parameter_shape(&self, _index: usize) -> ValueShape {
        ValueShape::Value
    }

    fn apply(
        &self,
        parameters: &[Value],
        context: &dyn EvaluationContext,
    ) -> Result<Value, EvalError>;
}

/// Shared handle to a function.
pub type SharedFunction = Arc<dyn ExpressionFunction>;

type Body = dyn Fn(&[Value], &dyn EvaluationContext) -> Result<Value, EvalError> + Send + Sync;

/// A function built from a closure.
///
/// ```text
/// let twice = BasicFunction::new(name, Arity::Exact(1), |params, ctx| { ... })
///     .with_parameter_shape(ValueShape::Number);
/// ```
pub struct BasicFunction {
    name: FunctionExpressionName,
    arity: Arity,
    parameter_shape: ValueShape,
    body: Box<Body>,
}

impl BasicFunction {
    pub fn new<F>(name: FunctionExpressionName, arity: Arity, body: F) -> Self
    where
        F: Fn(&[Value], &dyn EvaluationContext) -> Result<Value, EvalError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name,
            arity,
            parameter_shape: ValueShape::Value,
            body: Box::new(body),
        }
    }

    /// Convert every parameter to `shape`.
    #[must_use]
    pub fn with_parameter_shape(mut self, shape: ValueShape) -> Self {
        self.parameter_shape = shape;
        self
    }

    pub fn shared(self) -> SharedFunction {
        Arc::new(self)
    }
}

impl ExpressionFunction for BasicFunction {
    fn name(&self) -> &FunctionExpressionName {
        &self.name
    }

    fn arity(&self) -> Arity {
        self.arity
    }

    fn parameter_shape(&self, _index: usize) -> ValueShape {
        self.parameter_shape
    }

    fn apply(
        &self,
        parameters: &[Value],
        context: &dyn EvaluationContext,
    ) -> Result<Value, EvalError> {
        (self.body)(parameters, context)
    }
}

impl fmt::Debug for BasicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("parameter_shape", &self.parameter_shape)
            .finish_non_exhaustive()
    }
}
