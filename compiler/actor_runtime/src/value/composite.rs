//! Function and algebraic-data values.

use std::fmt;

use actor_ir::{ExprId, Name, StringInterner};

use super::Heap;
use crate::environment::LocalScope;
use crate::Thunk;

/// A function value: name, parameter names and body.
///
/// No environment is captured. A call evaluates the body in a child of the
/// caller's environment, so free variables resolve dynamically.
#[derive(Clone)]
pub struct FunctionValue {
    name: Name,
    params: Heap<Vec<Name>>,
    body: ExprId,
}

impl FunctionValue {
    pub fn new(name: Name, params: Vec<Name>, body: ExprId) -> Self {
        FunctionValue {
            name,
            params: Heap::new(params),
            body,
        }
    }

    /// [`Name::EMPTY`] for anonymous lambdas.
    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn body(&self) -> ExprId {
        self.body
    }

    /// Same name, parameters and body.
    pub fn same_function(&self, other: &FunctionValue) -> bool {
        self.name == other.name && self.body == other.body && *self.params == *other.params
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("params", &*self.params)
            .field("body", &self.body)
            .finish()
    }
}

/// An instance of an algebraic data type.
///
/// Fields are shared: cloning a `DataValue` yields another handle to the
/// same instance, and a field assignment through any handle is visible
/// through all of them.
#[derive(Clone)]
pub struct DataValue {
    type_name: Name,
    variant: Name,
    fields: LocalScope<Vec<(Name, Thunk)>>,
}

impl DataValue {
    /// Instance with fields in declaration order.
    pub fn new(type_name: Name, variant: Name, fields: Vec<(Name, Thunk)>) -> Self {
        DataValue {
            type_name,
            variant,
            fields: LocalScope::new(fields),
        }
    }

    #[inline]
    pub fn type_name(&self) -> Name {
        self.type_name
    }

    #[inline]
    pub fn variant(&self) -> Name {
        self.variant
    }

    /// The `Type$Variant` tag.
    pub fn tag(&self, interner: &StringInterner) -> String {
        format!(
            "{}${}",
            interner.lookup(self.type_name),
            interner.lookup(self.variant)
        )
    }

    pub fn field(&self, name: Name) -> Option<Thunk> {
        self.fields
            .borrow()
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, thunk)| thunk.clone())
    }

    /// Replace an existing field in place. Returns `false` for unknown fields.
    pub fn set_field(&self, name: Name, thunk: Thunk) -> bool {
        let mut fields = self.fields.borrow_mut();
        match fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => {
                *slot = thunk;
                true
            }
            None => false,
        }
    }

    /// Field names and thunks in declaration order.
    pub fn fields(&self) -> Vec<(Name, Thunk)> {
        self.fields.borrow().clone()
    }

    /// Whether both handles refer to the same instance.
    #[inline]
    pub fn ptr_eq(&self, other: &DataValue) -> bool {
        self.fields.ptr_eq(&other.fields)
    }
}

impl fmt::Debug for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataValue")
            .field("type_name", &self.type_name)
            .field("variant", &self.variant)
            .field("fields", &*self.fields.borrow())
            .finish()
    }
}
