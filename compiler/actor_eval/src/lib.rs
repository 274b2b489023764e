//! Tree-walking evaluator for the Actor expression language.
//!
//! Programs arrive as an [`ExprArena`](actor_ir::ExprArena) built by a front
//! end. The [`Interpreter`] walks it with decimal arithmetic from
//! `actor_numeric`, lazy list elements and data fields, shared data
//! instances and a declared-type registry.
//!
//! Most hosts want [`interpret`]: evaluate a program in a given global
//! environment and collect its output.

mod diagnostics;
mod display;
mod interpreter;
mod library;
mod operators;
mod print_handler;
mod registry;

pub use diagnostics::{CallFrame, CallStack};
pub use display::display_value;
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_RECURSION_DEPTH};
pub use library::{install_prelude, prelude_environment};
pub use operators::{evaluate_binary, values_equal};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use registry::{AlgebraicType, DataRegistry, VariantDef};

// Re-export the runtime model for embedders.
pub use actor_runtime::{
    DataValue, Environment, EvalError, EvalErrorKind, EvalResult, FunctionValue, Thunk, Value,
};

use std::sync::Once;

use actor_ir::{ExprArena, ExprId, StringInterner};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for evaluator diagnostics.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=actor_eval=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Outcome of [`interpret`].
#[derive(Debug)]
pub struct Interpretation {
    /// The global environment, including bindings made before any error.
    pub env: Environment,
    /// Declared data types, including those declared before any error.
    pub registry: DataRegistry,
    /// Everything written by `print` and `println`.
    pub output: String,
    /// Value of the last top-level expression, or the first error.
    pub result: EvalResult,
}

impl Interpretation {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Evaluate `roots` in order in `env`, capturing output.
///
/// The environment is shared, not copied: bindings the program makes are
/// visible in the caller's `env` afterwards. `registry` holds the types
/// declared by earlier programs and comes back in the result with this
/// program's declarations added.
pub fn interpret(
    interner: &StringInterner,
    arena: &ExprArena,
    env: &Environment,
    registry: DataRegistry,
    roots: &[ExprId],
) -> Interpretation {
    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new(interner, arena)
        .env(env.clone())
        .registry(registry)
        .print_handler(handler.clone())
        .build();
    let result = interpreter.run(roots);
    Interpretation {
        env: env.clone(),
        registry: interpreter.into_registry(),
        output: handler.take_output(),
        result,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
