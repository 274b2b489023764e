//! Flat storage for a program's expressions.
//!
//! Nodes refer to each other by index. Variable-length children (call
//! arguments, list elements, parameter names, field initializers, variant
//! declarations) are stored contiguously in side tables and referenced by
//! ranges, which keeps [`Expr`] `Copy`.

use std::fmt;
use std::ops::Range;

use actor_numeric::Decimal;

use crate::{Expr, FieldInit, Name, VariantDecl};

/// Index of an expression in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index of a number literal in the arena's decimal pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct NumberId(u32);

impl NumberId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        pub struct $name {
            start: u32,
            len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn len(self) -> usize {
                self.len as usize
            }

            #[inline]
            pub const fn is_empty(self) -> bool {
                self.len == 0
            }

            #[inline]
            fn indices(self) -> Range<usize> {
                let start = self.start as usize;
                start..start + self.len as usize
            }
        }
    };
}

define_range!(
    /// Run of expression ids in [`ExprArena`]'s list table.
    ExprRange
);
define_range!(
    /// Run of names (parameters, declared fields).
    NameRange
);
define_range!(
    /// Run of field initializers of a data construction.
    FieldInitRange
);
define_range!(
    /// Run of variant declarations of a `datatype`.
    VariantRange
);

#[inline]
fn to_u32(count: usize, table: &str) -> u32 {
    u32::try_from(count)
        .unwrap_or_else(|_| panic!("expression arena {table} table exceeded {} entries", u32::MAX))
}

/// Contiguous storage for every node of a program.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    names: Vec<Name>,
    field_inits: Vec<FieldInit>,
    variants: Vec<VariantDecl>,
    numbers: Vec<Decimal>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of expressions allocated.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(to_u32(self.exprs.len(), "expression"));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn try_get_expr(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.index())
    }

    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "list");
        self.expr_lists.extend(ids);
        let len = to_u32(self.expr_lists.len(), "list") - start;
        ExprRange { start, len }
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.indices()]
    }

    pub fn alloc_names(&mut self, names: impl IntoIterator<Item = Name>) -> NameRange {
        let start = to_u32(self.names.len(), "name");
        self.names.extend(names);
        let len = to_u32(self.names.len(), "name") - start;
        NameRange { start, len }
    }

    #[inline]
    pub fn get_names(&self, range: NameRange) -> &[Name] {
        &self.names[range.indices()]
    }

    pub fn alloc_field_inits(
        &mut self,
        inits: impl IntoIterator<Item = FieldInit>,
    ) -> FieldInitRange {
        let start = to_u32(self.field_inits.len(), "field initializer");
        self.field_inits.extend(inits);
        let len = to_u32(self.field_inits.len(), "field initializer") - start;
        FieldInitRange { start, len }
    }

    #[inline]
    pub fn get_field_inits(&self, range: FieldInitRange) -> &[FieldInit] {
        &self.field_inits[range.indices()]
    }

    pub fn alloc_variants(
        &mut self,
        variants: impl IntoIterator<Item = VariantDecl>,
    ) -> VariantRange {
        let start = to_u32(self.variants.len(), "variant");
        self.variants.extend(variants);
        let len = to_u32(self.variants.len(), "variant") - start;
        VariantRange { start, len }
    }

    #[inline]
    pub fn get_variants(&self, range: VariantRange) -> &[VariantDecl] {
        &self.variants[range.indices()]
    }

    pub fn alloc_number(&mut self, value: Decimal) -> NumberId {
        let id = NumberId(to_u32(self.numbers.len(), "number"));
        self.numbers.push(value);
        id
    }

    #[inline]
    pub fn get_number(&self, id: NumberId) -> &Decimal {
        &self.numbers[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::{ExprArena, ExprId};
    use crate::{Expr, ExprKind, Name, Span};
    use pretty_assertions::assert_eq;

    #[test]
    fn expressions_are_addressed_by_allocation_order() {
        let mut arena = ExprArena::new();
        let a = arena.alloc_expr(Expr::new(ExprKind::Bool(true), Span::DUMMY));
        let b = arena.alloc_expr(Expr::new(ExprKind::Void, Span::new(1, 2)));
        assert_eq!(a, ExprId::new(0));
        assert_eq!(arena.get_expr(b).span, Span::new(1, 2));
        assert_eq!(arena.len(), 2);
        assert!(arena.try_get_expr(ExprId::new(7)).is_none());
    }

    #[test]
    fn lists_do_not_overlap() {
        let mut arena = ExprArena::new();
        let x = arena.alloc_expr(Expr::new(ExprKind::Void, Span::DUMMY));
        let y = arena.alloc_expr(Expr::new(ExprKind::Bool(false), Span::DUMMY));
        let first = arena.alloc_expr_list([x, y]);
        let second = arena.alloc_expr_list([y]);
        let empty = arena.alloc_expr_list([]);
        assert_eq!(arena.get_expr_list(first), &[x, y]);
        assert_eq!(arena.get_expr_list(second), &[y]);
        assert!(empty.is_empty());
        assert!(arena.get_expr_list(empty).is_empty());
    }

    #[test]
    fn names_and_numbers_round_trip() {
        let mut arena = ExprArena::new();
        let names = arena.alloc_names([Name::from_raw(3), Name::from_raw(4)]);
        let number = arena.alloc_number(actor_numeric::Decimal::from(12i64));
        assert_eq!(arena.get_names(names), &[Name::from_raw(3), Name::from_raw(4)]);
        assert_eq!(arena.get_number(number).to_string(), "12");
    }
}
