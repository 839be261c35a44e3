//! FX Eval - evaluating expression trees against a caller-supplied context.
//!
//! The core owns no data. Everything an evaluation needs comes through an
//! [`EvaluationContext`]:
//! - the number kind, `MathContext` and locale symbols
//! - value conversion (defaults to [`converter`])
//! - function lookup by name
//! - reference resolution
//! - the recovery policy, offered each error once where it is raised
//!
//! Evaluation itself is the [`Evaluate`] trait on `Expression`. Trees are
//! immutable and every context is `Send + Sync`, so the same tree can be
//! evaluated on several threads at once; [`evaluate_all`] does that for a
//! batch of trees.
//!
//! # Tracing
//!
//! Reference and function resolution, function application and recovery
//! decisions emit `tracing` events. [`init_tracing`] installs a subscriber
//! when `RUST_LOG` is set.

mod basic_context;
mod batch;
mod context;
pub mod converter;
pub mod errors;
mod evaluate;
mod function;
mod operators;
mod registry;
mod shape;
mod value;

use std::sync::Once;

pub use basic_context::{BasicEvaluationContext, BasicEvaluationContextBuilder, ErrorHandler};
pub use batch::evaluate_all;
pub use context::EvaluationContext;
pub use errors::{EvalError, EvalErrorKind, EvalNote};
pub use evaluate::Evaluate;
pub use function::{BasicFunction, ExpressionFunction, SharedFunction};
pub use registry::FunctionRegistry;
pub use shape::ValueShape;
pub use value::Value;

static TRACING_INIT: Once = Once::new();

/// Print the evaluator's events to stderr.
///
/// Does nothing unless `RUST_LOG` is set; only the first call has an
/// effect. Every event is under the `fx_eval` target:
/// - `debug`: function application, batch size, each error offered to the
///   recovery policy and whether it recovered or aborted
/// - `trace`: reference and function resolution, function registration
///
/// A bare level (`RUST_LOG=debug`) is narrowed to `fx_eval`; directives
/// naming targets are used as given. A subscriber already installed by the
/// host is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("RUST_LOG") else {
            return;
        };
        let filter = match directives.trim().parse::<tracing::Level>() {
            Ok(_) => EnvFilter::new(format!("fx_eval={}", directives.trim())),
            Err(_) => EnvFilter::new(directives),
        };
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
