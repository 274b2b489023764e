//! Intermediate representation consumed by the Actor evaluator.
//!
//! A program is a flat [`ExprArena`] of [`Expr`] nodes addressed by
//! [`ExprId`]. Identifiers are interned into [`Name`]s by a
//! [`StringInterner`]. Number literals live in the arena's decimal pool so
//! that nodes stay `Copy`.
//!
//! Nothing here parses text: a front end (or a test) builds the arena with
//! [`ExprBuilder`].

mod arena;
pub mod ast;
mod builder;
mod interner;
mod name;
mod span;

pub use arena::{
    ExprArena, ExprId, ExprRange, FieldInitRange, NameRange, NumberId, VariantRange,
};
pub use ast::{BinaryOp, Expr, ExprKind, FieldInit, Intrinsic, Mutability, VariantDecl};
pub use builder::ExprBuilder;
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
