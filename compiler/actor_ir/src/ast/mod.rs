//! Expression nodes.
//!
//! Nodes are `Copy`: children are [`ExprId`]s and lists are ranges into the
//! arena's side tables.

mod operators;

pub use operators::BinaryOp;

use crate::{ExprId, ExprRange, FieldInitRange, Name, NameRange, NumberId, Span, VariantRange};

/// Whether a binding may be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutability {
    Mutable,
    Immutable,
}

/// Host primitives reachable from the prelude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// Write the argument's display form.
    Print,
    /// Write the argument's display form and a newline.
    Println,
    Sqrt,
    Sin,
    Cos,
    Tan,
}

impl Intrinsic {
    pub const ALL: [Intrinsic; 6] = [
        Intrinsic::Print,
        Intrinsic::Println,
        Intrinsic::Sqrt,
        Intrinsic::Sin,
        Intrinsic::Cos,
        Intrinsic::Tan,
    ];

    /// Name the prelude binds this intrinsic under.
    pub const fn name(self) -> &'static str {
        match self {
            Intrinsic::Print => "print",
            Intrinsic::Println => "println",
            Intrinsic::Sqrt => "sqrt",
            Intrinsic::Sin => "sin",
            Intrinsic::Cos => "cos",
            Intrinsic::Tan => "tan",
        }
    }
}

/// Field initializer in a data construction: `field: value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldInit {
    pub name: Name,
    pub value: ExprId,
}

/// One variant of a `datatype` declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantDecl {
    pub name: Name,
    pub fields: NameRange,
}

/// An expression node with its source location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExprKind {
    /// Number literal, stored in the arena's decimal pool.
    Number(NumberId),
    Bool(bool),
    Char(char),
    /// String literal; evaluates to a list of characters.
    Str(Name),
    Void,

    /// Variable reference.
    Ident(Name),

    /// `name = value` (or its immutable form).
    Assign {
        name: Name,
        value: ExprId,
        mutability: Mutability,
    },

    /// Statements evaluated in order; the value is `result`'s.
    Seq { stmts: ExprRange, result: ExprId },

    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// Function literal. Anonymous lambdas use [`Name::EMPTY`].
    Lambda {
        name: Name,
        params: NameRange,
        body: ExprId,
    },

    Call { func: ExprId, args: ExprRange },

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// List literal `[a, b, c]`.
    List(ExprRange),

    /// `list[index]`
    Index { list: ExprId, index: ExprId },

    /// `target[index] = value`
    IndexAssign {
        target: Name,
        index: ExprId,
        value: ExprId,
    },

    /// `receiver.field`
    Field { receiver: ExprId, field: Name },

    /// `receiver.field = value`
    FieldAssign {
        receiver: ExprId,
        field: Name,
        value: ExprId,
    },

    /// `datatype Name = Variant(fields) | ...`
    DataDecl {
        type_name: Name,
        variants: VariantRange,
    },

    /// `Type.Variant { field: value, ... }`
    Construct {
        type_name: Name,
        variant: Name,
        fields: FieldInitRange,
    },

    /// Host primitive applied to its arguments. Only the prelude creates these.
    Intrinsic { kind: Intrinsic, args: ExprRange },
}
