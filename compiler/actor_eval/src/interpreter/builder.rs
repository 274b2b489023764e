//! `InterpreterBuilder` for configuring an [`Interpreter`].

use actor_ir::{ExprArena, StringInterner};
use actor_runtime::Environment;

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::registry::DataRegistry;
use crate::{stdout_handler, SharedPrintHandler};

/// Call depth at which evaluation stops with a stack-overflow error.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 10_000;

/// Builder for [`Interpreter`] instances.
///
/// Defaults: a fresh global environment, stdout output, an empty data
/// registry and [`DEFAULT_MAX_RECURSION_DEPTH`].
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    env: Option<Environment>,
    registry: Option<DataRegistry>,
    print_handler: Option<SharedPrintHandler>,
    max_recursion_depth: usize,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            env: None,
            registry: None,
            print_handler: None,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }

    /// Global environment to evaluate in. Bindings made by the program are
    /// visible through the caller's clone afterwards.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Start from already declared data types.
    #[must_use]
    pub fn registry(mut self, registry: DataRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Maximum number of simultaneously active calls.
    #[must_use]
    pub fn max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: self.env.unwrap_or_default(),
            registry: self.registry.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_stack: CallStack::new(self.max_recursion_depth),
        }
    }
}
