//! Tree-walking interpreter over an [`ExprArena`].
//!
//! The interpreter holds the current environment and swaps it for the
//! duration of a call or a thunk evaluation. Every node evaluation goes
//! through [`ensure_sufficient_stack`], so deep recursion in the evaluated
//! program grows the native stack instead of overflowing it; the
//! [`CallStack`] bound turns runaway recursion into an error.

mod builder;
mod data;
mod function_call;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_RECURSION_DEPTH};

use actor_ir::{ExprArena, ExprId, ExprKind, ExprRange, Name, Span, StringInterner};
use actor_runtime::errors::{
    immutable_binding, index_out_of_bounds, type_mismatch, undefined_variable,
};
use actor_runtime::{
    Environment, EvalError, EvalResult, FunctionValue, Thunk, ThunkForcer, Value,
};
use actor_stack::ensure_sufficient_stack;

use crate::diagnostics::CallStack;
use crate::library;
use crate::operators::evaluate_binary;
use crate::registry::DataRegistry;
use crate::SharedPrintHandler;

/// Evaluates expressions from one arena.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) arena: &'a ExprArena,
    /// Environment of the expression currently being evaluated.
    pub(crate) env: Environment,
    pub(crate) registry: DataRegistry,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) call_stack: CallStack,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with a fresh global environment and stdout output.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Evaluate top-level expressions in order.
    ///
    /// Returns the value of the last one (`Void` for an empty program) or
    /// the first error. Bindings made before an error stay in the global
    /// environment.
    pub fn run(&mut self, roots: &[ExprId]) -> EvalResult {
        let mut last = Value::Void;
        for (index, &root) in roots.iter().enumerate() {
            tracing::debug!(statement = index, "evaluating top-level expression");
            last = self.eval(root).map_err(|err| {
                tracing::debug!(statement = index, error = %err, "evaluation failed");
                err
            })?;
        }
        Ok(last)
    }

    /// Evaluate one expression in the current environment.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    /// The global environment while no call is active.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn registry(&self) -> &DataRegistry {
        &self.registry
    }

    /// Give up the interpreter, keeping the types it declared.
    #[inline]
    pub fn into_registry(self) -> DataRegistry {
        self.registry
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Value of a thunk. Deferred thunks are evaluated in their own
    /// environment every time they are forced.
    pub fn force(&mut self, thunk: &Thunk) -> EvalResult {
        match thunk {
            Thunk::Forced(value) => Ok(value.clone()),
            Thunk::Deferred { expr, env } => self.eval_in(*expr, env.clone()),
        }
    }

    /// Evaluate `expr` with `env` as the current environment.
    pub(crate) fn eval_in(&mut self, expr: ExprId, env: Environment) -> EvalResult {
        let saved = std::mem::replace(&mut self.env, env);
        let result = self.eval(expr);
        self.env = saved;
        result
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.arena.get_expr(id);
        let result = self.eval_kind(expr.kind, expr.span);
        if expr.span.is_dummy() {
            result
        } else {
            result.map_err(|err| err.with_span(expr.span))
        }
    }

    fn eval_kind(&mut self, kind: ExprKind, span: Span) -> EvalResult {
        let arena = self.arena;
        match kind {
            ExprKind::Number(number) => Ok(Value::Number(arena.get_number(number).clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Char(c) => Ok(Value::Char(c)),
            ExprKind::Str(text) => Ok(Value::string(self.interner.lookup(text))),
            ExprKind::Void => Ok(Value::Void),
            ExprKind::Ident(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| undefined_variable(self.interner.lookup(name))),
            ExprKind::Assign {
                name,
                value,
                mutability,
            } => {
                let value = self.eval(value)?;
                self.env
                    .bind(name, value.clone(), mutability)
                    .map_err(|_| immutable_binding(self.interner.lookup(name)))?;
                Ok(value)
            }
            ExprKind::Seq { stmts, result } => {
                for &stmt in arena.get_expr_list(stmts) {
                    self.eval(stmt)?;
                }
                self.eval(result)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond = self.eval(cond)?;
                match cond.as_bool() {
                    Some(true) => self.eval(then_branch),
                    Some(false) => self.eval(else_branch),
                    None => Err(type_mismatch("bool", cond.type_name())),
                }
            }
            ExprKind::Lambda { name, params, body } => Ok(Value::function(FunctionValue::new(
                name,
                arena.get_names(params).to_vec(),
                body,
            ))),
            ExprKind::Call { func, args } => self.eval_call(func, args, span),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(left, right, op, self)
            }
            ExprKind::List(elements) => Ok(self.eval_list(elements)),
            ExprKind::Index { list, index } => self.eval_index(list, index),
            ExprKind::IndexAssign {
                target,
                index,
                value,
            } => self.eval_index_assign(target, index, value),
            ExprKind::Field { receiver, field } => self.eval_field(receiver, field),
            ExprKind::FieldAssign {
                receiver,
                field,
                value,
            } => self.eval_field_assign(receiver, field, value),
            ExprKind::DataDecl {
                type_name,
                variants,
            } => self.eval_data_decl(type_name, variants),
            ExprKind::Construct {
                type_name,
                variant,
                fields,
            } => self.eval_construct(type_name, variant, fields),
            ExprKind::Intrinsic { kind, args } => library::eval_intrinsic(self, kind, args),
        }
    }

    /// Elements are suspended in the current environment; nothing is
    /// evaluated until indexed, compared, displayed or returned.
    fn eval_list(&self, elements: ExprRange) -> Value {
        let items = self
            .arena
            .get_expr_list(elements)
            .iter()
            .map(|&element| Thunk::deferred(element, self.env.clone()))
            .collect();
        Value::list(items)
    }

    /// `list[index]`: forces only the selected element.
    fn eval_index(&mut self, list: ExprId, index: ExprId) -> EvalResult {
        let list = self.eval(list)?;
        let index = self.eval(index)?;
        let Some(items) = list.as_list() else {
            return Err(type_mismatch("list", list.type_name()));
        };
        let position = list_position(&index, items.len())?;
        let element = items[position].clone();
        self.force(&element)
    }

    /// `name[index] = value`: rebinds `name` to a copy of the list with one
    /// element replaced. Other holders of the old list do not see the
    /// change.
    fn eval_index_assign(&mut self, target: Name, index: ExprId, value: ExprId) -> EvalResult {
        let current = self
            .env
            .lookup(target)
            .ok_or_else(|| undefined_variable(self.interner.lookup(target)))?;
        let Some(items) = current.as_list() else {
            return Err(type_mismatch("list", current.type_name()));
        };
        let index = self.eval(index)?;
        let position = list_position(&index, items.len())?;
        let value = self.eval(value)?;

        let mut updated = items.to_vec();
        updated[position] = Thunk::Forced(value);
        let mutability = self
            .env
            .mutability(target)
            .unwrap_or(actor_ir::Mutability::Mutable);
        self.env
            .bind(target, Value::list(updated), mutability)
            .map_err(|_| immutable_binding(self.interner.lookup(target)))?;
        Ok(Value::Void)
    }
}

impl ThunkForcer for Interpreter<'_> {
    fn force(&mut self, thunk: &Thunk) -> EvalResult {
        Interpreter::force(self, thunk)
    }
}

/// Validate `index` against a list of `len` elements.
fn list_position(index: &Value, len: usize) -> Result<usize, EvalError> {
    let Some(n) = index.as_number() else {
        return Err(type_mismatch("number", index.type_name()));
    };
    if !n.is_integer() {
        return Err(type_mismatch("integer index", &n.to_string()));
    }
    let raw = n
        .to_i64()
        .unwrap_or(if n.is_negative() { i64::MIN } else { i64::MAX });
    usize::try_from(raw)
        .ok()
        .filter(|&position| position < len)
        .ok_or_else(|| index_out_of_bounds(raw, len))
}
