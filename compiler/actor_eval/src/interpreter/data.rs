//! Algebraic data: declarations, construction and field access.

use actor_ir::{ExprId, FieldInitRange, Name, VariantRange};
use actor_runtime::errors::{type_mismatch, undefined_field};
use actor_runtime::{DataValue, EvalError, EvalResult, Thunk, Value};

use super::Interpreter;
use crate::registry::{AlgebraicType, VariantDef};

impl Interpreter<'_> {
    pub(super) fn eval_data_decl(&mut self, type_name: Name, variants: VariantRange) -> EvalResult {
        let arena = self.arena;
        let variants = arena
            .get_variants(variants)
            .iter()
            .map(|decl| VariantDef::new(decl.name, arena.get_names(decl.fields).to_vec()))
            .collect();
        self.registry
            .declare(AlgebraicType::new(type_name, variants), self.interner)?;
        tracing::debug!(type_name = self.interner.lookup(type_name), "declared data type");
        Ok(Value::Void)
    }

    /// `Type.Variant { field: expr, ... }`.
    ///
    /// Field expressions are not evaluated here: each becomes a thunk over
    /// the constructing environment, stored in declaration order.
    pub(super) fn eval_construct(
        &mut self,
        type_name: Name,
        variant: Name,
        fields: FieldInitRange,
    ) -> EvalResult {
        let inits = self.arena.get_field_inits(fields);
        let def = self.registry.variant(type_name, variant, self.interner)?;
        let supplied: Vec<Name> = inits.iter().map(|init| init.name).collect();
        def.check_fields(type_name, &supplied, self.interner)?;

        let mut thunks: Vec<(Name, Thunk)> = inits
            .iter()
            .map(|init| (init.name, Thunk::deferred(init.value, self.env.clone())))
            .collect();
        thunks.sort_by_key(|(name, _)| def.position(*name));
        Ok(Value::Data(DataValue::new(type_name, variant, thunks)))
    }

    /// `receiver.field`: forces the field's thunk.
    pub(super) fn eval_field(&mut self, receiver: ExprId, field: Name) -> EvalResult {
        let target = self.eval(receiver)?;
        let data = expect_data(&target)?;
        let thunk = data
            .field(field)
            .ok_or_else(|| undefined_field(self.interner.lookup(field), &data.tag(self.interner)))?;
        self.force(&thunk)
    }

    /// `receiver.field = value`: evaluates `value` now and stores it in the
    /// instance, visible through every alias.
    pub(super) fn eval_field_assign(
        &mut self,
        receiver: ExprId,
        field: Name,
        value: ExprId,
    ) -> EvalResult {
        let target = self.eval(receiver)?;
        let data = expect_data(&target)?;
        let value = self.eval(value)?;
        if !data.set_field(field, Thunk::Forced(value)) {
            return Err(undefined_field(
                self.interner.lookup(field),
                &data.tag(self.interner),
            ));
        }
        Ok(Value::Void)
    }
}

fn expect_data(value: &Value) -> Result<&DataValue, EvalError> {
    value
        .as_data()
        .ok_or_else(|| type_mismatch("data", value.type_name()))
}
