//! Convenience constructor for expression trees.
//!
//! A front end (or a test) uses [`ExprBuilder`] to allocate nodes without
//! juggling side tables. The builder does no parsing and no precedence
//! handling: callers nest the calls in evaluation order.

use actor_numeric::{Decimal, NumericError};

use crate::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, FieldInit, Intrinsic, Mutability, Name,
    StringInterner, Span, VariantDecl,
};

pub struct ExprBuilder<'a> {
    arena: &'a mut ExprArena,
    interner: &'a StringInterner,
    span: Span,
}

impl<'a> ExprBuilder<'a> {
    pub fn new(arena: &'a mut ExprArena, interner: &'a StringInterner) -> Self {
        ExprBuilder {
            arena,
            interner,
            span: Span::DUMMY,
        }
    }

    /// Span attached to every node allocated from now on.
    pub fn set_span(&mut self, span: Span) {
        self.span = span;
    }

    pub fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    fn alloc(&mut self, kind: ExprKind) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, self.span))
    }

    /// Number literal from its source text, e.g. `"3.14"`.
    pub fn number(&mut self, text: &str) -> Result<ExprId, NumericError> {
        let value: Decimal = text.parse()?;
        Ok(self.decimal(value))
    }

    pub fn decimal(&mut self, value: Decimal) -> ExprId {
        let id = self.arena.alloc_number(value);
        self.alloc(ExprKind::Number(id))
    }

    pub fn int(&mut self, value: i64) -> ExprId {
        self.decimal(Decimal::from(value))
    }

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.alloc(ExprKind::Bool(value))
    }

    pub fn char(&mut self, value: char) -> ExprId {
        self.alloc(ExprKind::Char(value))
    }

    pub fn string(&mut self, text: &str) -> ExprId {
        let name = self.name(text);
        self.alloc(ExprKind::Str(name))
    }

    pub fn void(&mut self) -> ExprId {
        self.alloc(ExprKind::Void)
    }

    pub fn ident(&mut self, name: &str) -> ExprId {
        let name = self.name(name);
        self.alloc(ExprKind::Ident(name))
    }

    /// `name = value`, mutable.
    pub fn assign(&mut self, name: &str, value: ExprId) -> ExprId {
        self.assign_with(name, value, Mutability::Mutable)
    }

    /// Immutable binding of `name`.
    pub fn assign_immutable(&mut self, name: &str, value: ExprId) -> ExprId {
        self.assign_with(name, value, Mutability::Immutable)
    }

    pub fn assign_with(&mut self, name: &str, value: ExprId, mutability: Mutability) -> ExprId {
        let name = self.name(name);
        self.alloc(ExprKind::Assign {
            name,
            value,
            mutability,
        })
    }

    /// Evaluate `stmts` in order, then `result`.
    pub fn seq(&mut self, stmts: &[ExprId], result: ExprId) -> ExprId {
        let stmts = self.arena.alloc_expr_list(stmts.iter().copied());
        self.alloc(ExprKind::Seq { stmts, result })
    }

    pub fn if_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        self.alloc(ExprKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    /// Function literal. Pass `""` for an anonymous lambda.
    pub fn lambda(&mut self, name: &str, params: &[&str], body: ExprId) -> ExprId {
        let name = self.name(name);
        let param_names: Vec<Name> = params.iter().map(|param| self.name(param)).collect();
        let params = self.arena.alloc_names(param_names);
        self.alloc(ExprKind::Lambda { name, params, body })
    }

    pub fn call(&mut self, func: ExprId, args: &[ExprId]) -> ExprId {
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.alloc(ExprKind::Call { func, args })
    }

    /// `name(args...)`
    pub fn call_named(&mut self, name: &str, args: &[ExprId]) -> ExprId {
        let func = self.ident(name);
        self.call(func, args)
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc(ExprKind::Binary { op, left, right })
    }

    pub fn list(&mut self, elements: &[ExprId]) -> ExprId {
        let elements = self.arena.alloc_expr_list(elements.iter().copied());
        self.alloc(ExprKind::List(elements))
    }

    pub fn index(&mut self, list: ExprId, index: ExprId) -> ExprId {
        self.alloc(ExprKind::Index { list, index })
    }

    pub fn index_assign(&mut self, target: &str, index: ExprId, value: ExprId) -> ExprId {
        let target = self.name(target);
        self.alloc(ExprKind::IndexAssign {
            target,
            index,
            value,
        })
    }

    pub fn field(&mut self, receiver: ExprId, field: &str) -> ExprId {
        let field = self.name(field);
        self.alloc(ExprKind::Field { receiver, field })
    }

    pub fn field_assign(&mut self, receiver: ExprId, field: &str, value: ExprId) -> ExprId {
        let field = self.name(field);
        self.alloc(ExprKind::FieldAssign {
            receiver,
            field,
            value,
        })
    }

    /// `datatype type_name = variant(fields) | ...`
    pub fn data_decl(&mut self, type_name: &str, variants: &[(&str, &[&str])]) -> ExprId {
        let type_name = self.name(type_name);
        let mut decls = Vec::with_capacity(variants.len());
        for (variant, fields) in variants {
            let name = self.name(variant);
            let field_names: Vec<Name> = fields.iter().map(|field| self.name(field)).collect();
            let fields = self.arena.alloc_names(field_names);
            decls.push(VariantDecl { name, fields });
        }
        let variants = self.arena.alloc_variants(decls);
        self.alloc(ExprKind::DataDecl {
            type_name,
            variants,
        })
    }

    pub fn construct(
        &mut self,
        type_name: &str,
        variant: &str,
        fields: &[(&str, ExprId)],
    ) -> ExprId {
        let type_name = self.name(type_name);
        let variant = self.name(variant);
        let inits: Vec<FieldInit> = fields
            .iter()
            .map(|&(field, value)| FieldInit {
                name: self.name(field),
                value,
            })
            .collect();
        let fields = self.arena.alloc_field_inits(inits);
        self.alloc(ExprKind::Construct {
            type_name,
            variant,
            fields,
        })
    }

    pub fn intrinsic(&mut self, kind: Intrinsic, args: &[ExprId]) -> ExprId {
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.alloc(ExprKind::Intrinsic { kind, args })
    }
}

#[cfg(test)]
mod tests {
    use super::ExprBuilder;
    use crate::{BinaryOp, ExprArena, ExprKind, Mutability, StringInterner};
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_nested_nodes() {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let mut builder = ExprBuilder::new(&mut arena, &interner);
        let one = builder.int(1);
        let two = builder.int(2);
        let sum = builder.binary(BinaryOp::Add, one, two);
        let assign = builder.assign_immutable("x", sum);

        let ExprKind::Assign {
            name,
            value,
            mutability,
        } = arena.get_expr(assign).kind
        else {
            panic!("expected an assignment");
        };
        assert_eq!(interner.lookup(name), "x");
        assert_eq!(value, sum);
        assert_eq!(mutability, Mutability::Immutable);
    }

    #[test]
    fn rejects_malformed_numbers() {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let mut builder = ExprBuilder::new(&mut arena, &interner);
        assert!(builder.number("1.2.3").is_err());
        assert!(builder.number("1.25").is_ok());
    }

    #[test]
    fn data_declarations_keep_field_order() {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let mut builder = ExprBuilder::new(&mut arena, &interner);
        let decl = builder.data_decl("Shape", &[("Rect", &["width", "height"]), ("Dot", &[])]);

        let ExprKind::DataDecl { variants, .. } = arena.get_expr(decl).kind else {
            panic!("expected a declaration");
        };
        let variants = arena.get_variants(variants);
        assert_eq!(variants.len(), 2);
        let fields: Vec<&str> = arena
            .get_names(variants[0].fields)
            .iter()
            .map(|&name| interner.lookup(name))
            .collect();
        assert_eq!(fields, vec!["width", "height"]);
        assert!(variants[1].fields.is_empty());
    }
}
