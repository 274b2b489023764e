//! Runtime values of the Actor language.
//!
//! The variant set is closed. Operator dispatch, display and structural
//! equality in the evaluator match on it exhaustively, so a new variant has
//! to be handled in each of those tables.
//!
//! Heap payloads go through the factory methods on [`Value`]; the [`Heap`]
//! constructor is private to this module.

mod composite;
mod heap;

use std::fmt;

use actor_numeric::Decimal;

pub use composite::{DataValue, FunctionValue};
pub use heap::Heap;

use crate::Thunk;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    Number(Decimal),
    Bool(bool),
    Char(char),
    /// Fixed-length sequence of suspended (or already forced) elements.
    List(Heap<Vec<Thunk>>),
    Function(FunctionValue),
    Data(DataValue),
    Void,
}

impl Value {
    #[inline]
    pub fn number(value: Decimal) -> Self {
        Value::Number(value)
    }

    #[inline]
    pub fn int(value: i64) -> Self {
        Value::Number(Decimal::from(value))
    }

    pub fn list(elements: Vec<Thunk>) -> Self {
        Value::List(Heap::new(elements))
    }

    /// List whose elements are already forced.
    pub fn list_of(values: impl IntoIterator<Item = Value>) -> Self {
        Value::list(values.into_iter().map(Thunk::Forced).collect())
    }

    /// Strings are lists of characters.
    pub fn string(text: &str) -> Self {
        Value::list_of(text.chars().map(Value::Char))
    }

    #[inline]
    pub fn function(function: FunctionValue) -> Self {
        Value::Function(function)
    }

    /// Kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::List(_) => "list",
            Value::Function(_) => "function",
            Value::Data(_) => "data",
            Value::Void => "void",
        }
    }

    pub fn as_number(&self) -> Option<&Decimal> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Thunk]> {
        match self {
            Value::List(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&DataValue> {
        match self {
            Value::Data(data) => Some(data),
            _ => None,
        }
    }
}

/// Host-side identity comparison.
///
/// Numbers compare by value, lists element by element (forced elements by
/// value, deferred ones by node and environment identity), functions by
/// name and body, and data by instance identity. The language's `=`
/// operator forces thunks and lives in the evaluator.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::List(a), Value::List(b)) => a.ptr_eq(b) || **a == **b,
            (Value::Function(a), Value::Function(b)) => a.same_function(b),
            (Value::Data(a), Value::Data(b)) => a.ptr_eq(b),
            (Value::Void, Value::Void) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::List(elements) => f.debug_tuple("List").field(&**elements).finish(),
            Value::Function(function) => fmt::Debug::fmt(function, f),
            Value::Data(data) => fmt::Debug::fmt(data, f),
            Value::Void => write!(f, "Void"),
        }
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

#[cfg(test)]
mod tests;
