//! Runtime model of the Actor language: values, thunks, environments and
//! evaluation errors.
//!
//! The evaluator (`actor_eval`) gives these types their behavior; this
//! crate only defines them and the invariants they maintain on their own
//! (shared data fields, scope chains, fixed-length lists).

mod environment;
pub mod errors;
mod thunk;
mod value;

pub use environment::{AssignError, Environment};
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use thunk::{Thunk, ThunkForcer};
pub use value::{DataValue, FunctionValue, Heap, Value};
