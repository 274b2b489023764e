//! Function call evaluation.

use actor_ir::{ExprId, ExprKind, ExprRange, Mutability, Span};
use actor_runtime::errors::{undefined_function, wrong_function_args};
use actor_runtime::{EvalResult, Thunk, Value};

use super::Interpreter;
use crate::diagnostics::CallFrame;

impl Interpreter<'_> {
    /// Evaluate `func(args...)`.
    ///
    /// The body runs in a snapshot of the caller's environment taken before
    /// the arguments are evaluated. Arguments are evaluated in the caller's
    /// environment and bound in the snapshot, so the body sees every caller
    /// binding while its own assignments stay local, and thunks it leaves
    /// behind do not see later caller writes. The function is bound under
    /// its own name unless that name is already visible.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn eval_call(&mut self, func: ExprId, args: ExprRange, span: Span) -> EvalResult {
        let callee = match self.arena.get_expr(func).kind {
            ExprKind::Ident(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| undefined_function(self.interner.lookup(name)))?,
            _ => self.eval(func)?,
        };
        let Some(function) = callee.as_function() else {
            return Err(undefined_function(&self.callee_label(func, &callee)));
        };

        let call_env = self.env.snapshot();
        let self_name = function.name();
        if !self_name.is_empty() && !call_env.contains(self_name) {
            call_env.define(self_name, callee.clone(), Mutability::Mutable);
        }

        let arena = self.arena;
        let arg_ids = arena.get_expr_list(args);
        if arg_ids.len() != function.arity() {
            return Err(wrong_function_args(
                &self.callee_label(func, &callee),
                function.arity(),
                arg_ids.len(),
            ));
        }
        for (&param, &arg) in function.params().iter().zip(arg_ids) {
            let value = self.eval(arg)?;
            call_env.define(param, value, Mutability::Mutable);
        }

        self.call_stack
            .push(CallFrame {
                name: self_name,
                call_span: Some(span),
            })
            .map_err(|err| {
                tracing::warn!(depth = self.call_stack.depth(), "recursion limit reached");
                self.call_stack.attach_backtrace(err, self.interner)
            })?;
        let result = self
            .eval_in(function.body(), call_env)
            .and_then(|value| self.escape(value))
            .map_err(|err| self.call_stack.attach_backtrace(err, self.interner));
        self.call_stack.pop();
        result
    }

    /// Force every element of a returned list, recursively, so the result
    /// no longer depends on the call's environment.
    fn escape(&mut self, value: Value) -> EvalResult {
        let Value::List(items) = value else {
            return Ok(value);
        };
        let mut forced = Vec::with_capacity(items.len());
        for item in items.iter() {
            let element = self.force(item)?;
            forced.push(Thunk::Forced(self.escape(element)?));
        }
        Ok(Value::list(forced))
    }

    fn callee_label(&self, func: ExprId, callee: &Value) -> String {
        match (self.arena.get_expr(func).kind, callee) {
            (ExprKind::Ident(name), _) => self.interner.lookup(name).to_string(),
            (_, Value::Function(function)) if !function.name().is_empty() => {
                self.interner.lookup(function.name()).to_string()
            }
            (_, Value::Function(_)) => "<lambda>".to_string(),
            (_, other) => format!("<{} value>", other.type_name()),
        }
    }
}
