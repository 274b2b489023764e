//! Suspended list elements and data fields.

use std::fmt;

use actor_ir::ExprId;

use crate::{Environment, EvalResult, Value};

/// A list element or data field: a value, or an expression together with
/// the environment to evaluate it in.
///
/// Forcing a deferred thunk does not replace it; forcing it twice evaluates
/// the expression twice.
#[derive(Clone)]
pub enum Thunk {
    Forced(Value),
    Deferred { expr: ExprId, env: Environment },
}

impl Thunk {
    #[inline]
    pub fn deferred(expr: ExprId, env: Environment) -> Self {
        Thunk::Deferred { expr, env }
    }
}

impl PartialEq for Thunk {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Thunk::Forced(a), Thunk::Forced(b)) => a == b,
            (
                Thunk::Deferred { expr: a, env: env_a },
                Thunk::Deferred { expr: b, env: env_b },
            ) => a == b && env_a.ptr_eq(env_b),
            _ => false,
        }
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thunk::Forced(value) => fmt::Debug::fmt(value, f),
            Thunk::Deferred { expr, .. } => write!(f, "Deferred({expr:?})"),
        }
    }
}

/// Evaluates thunks on behalf of code that only holds values.
///
/// Operator dispatch and display need to look inside lists without owning
/// the evaluator; the evaluator implements this trait for them.
pub trait ThunkForcer {
    fn force(&mut self, thunk: &Thunk) -> EvalResult;
}
