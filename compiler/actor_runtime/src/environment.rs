//! Variable environments.
//!
//! The interpreter owns one global environment per interpretation. Every
//! function call evaluates in a snapshot of the caller's environment taken
//! at the moment of the call: the callee sees all caller bindings as they
//! were, its own writes stay in the snapshot, and later caller writes are
//! not seen by anything the call left behind.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use actor_ir::{Mutability, Name};

use crate::Value;

/// Why a checked bind was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// The visible binding of the name is immutable.
    Immutable,
}

/// Single-threaded shared cell: `Rc<RefCell<T>>` behind one constructor.
///
/// Binding tables and data-instance fields are shared this way. Execution is
/// single-threaded, so there is no `Arc` variant.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles share one cell.
    #[inline]
    pub fn ptr_eq(&self, other: &LocalScope<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    mutability: Mutability,
}

/// Handle to a binding table. Cloning shares the table.
#[derive(Clone, Default)]
pub struct Environment {
    bindings: LocalScope<FxHashMap<Name, Binding>>,
}

impl Environment {
    /// An environment with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// An independent environment holding a copy of every binding visible
    /// here, mutability included.
    ///
    /// Values are reference-counted, so the copy is shallow: data instances
    /// stay shared, while rebinding a name in either environment is not seen
    /// by the other.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Environment {
            bindings: LocalScope::new(self.bindings.borrow().clone()),
        }
    }

    /// Whether both handles refer to the same table.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.bindings.ptr_eq(&other.bindings)
    }

    /// Bind `name` without any check, replacing an existing binding.
    #[inline]
    pub fn define(&self, name: Name, value: Value, mutability: Mutability) {
        self.bindings
            .borrow_mut()
            .insert(name, Binding { value, mutability });
    }

    /// Bind `name` unless its current binding is immutable.
    pub fn bind(
        &self,
        name: Name,
        value: Value,
        mutability: Mutability,
    ) -> Result<(), AssignError> {
        if self.mutability(name) == Some(Mutability::Immutable) {
            return Err(AssignError::Immutable);
        }
        self.define(name, value, mutability);
        Ok(())
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.bindings
            .borrow()
            .get(&name)
            .map(|binding| binding.value.clone())
    }

    pub fn mutability(&self, name: Name) -> Option<Mutability> {
        self.bindings
            .borrow()
            .get(&name)
            .map(|binding| binding.mutability)
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.borrow().contains_key(&name)
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.bindings.borrow().len())
            .finish()
    }
}
