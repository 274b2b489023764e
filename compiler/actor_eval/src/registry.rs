//! Registry of declared algebraic data types.
//!
//! A `datatype` declaration registers a type with its variants and their
//! field names. Construction checks supplied fields against the variant
//! in both directions. Redeclaring a type with the same shape is accepted
//! so that a program can be evaluated twice in one session; any other
//! redeclaration is rejected.

use actor_ir::{Name, StringInterner};
use actor_runtime::errors::{
    constructor_mismatch, invalid_declaration, undefined_type, undefined_variant,
};
use actor_runtime::EvalError;
use rustc_hash::FxHashMap;

/// A variant and its declared field names, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantDef {
    name: Name,
    fields: Vec<Name>,
}

impl VariantDef {
    pub fn new(name: Name, fields: Vec<Name>) -> Self {
        VariantDef { name, fields }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    #[inline]
    pub fn fields(&self) -> &[Name] {
        &self.fields
    }

    /// Declaration position of `field`.
    pub fn position(&self, field: Name) -> Option<usize> {
        self.fields.iter().position(|&declared| declared == field)
    }

    /// Check that `supplied` names exactly the declared fields.
    ///
    /// Reports every missing and every unexpected field at once. A field
    /// supplied twice counts as unexpected.
    pub fn check_fields(
        &self,
        type_name: Name,
        supplied: &[Name],
        interner: &StringInterner,
    ) -> Result<(), EvalError> {
        let missing: Vec<String> = self
            .fields
            .iter()
            .filter(|field| !supplied.contains(field))
            .map(|&field| interner.lookup(field).to_string())
            .collect();

        let mut unexpected = Vec::new();
        for (i, &field) in supplied.iter().enumerate() {
            if self.position(field).is_none() || supplied[..i].contains(&field) {
                unexpected.push(interner.lookup(field).to_string());
            }
        }

        if missing.is_empty() && unexpected.is_empty() {
            return Ok(());
        }
        Err(constructor_mismatch(
            interner.lookup(type_name),
            interner.lookup(self.name),
            missing,
            unexpected,
        ))
    }
}

/// A declared type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgebraicType {
    name: Name,
    variants: Vec<VariantDef>,
}

impl AlgebraicType {
    pub fn new(name: Name, variants: Vec<VariantDef>) -> Self {
        AlgebraicType { name, variants }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    #[inline]
    pub fn variants(&self) -> &[VariantDef] {
        &self.variants
    }

    pub fn variant(&self, name: Name) -> Option<&VariantDef> {
        self.variants.iter().find(|variant| variant.name == name)
    }

    /// Reject duplicate variant names and duplicate fields within a variant.
    fn validate(&self, interner: &StringInterner) -> Result<(), EvalError> {
        let type_name = interner.lookup(self.name);
        if self.variants.is_empty() {
            return Err(invalid_declaration(type_name, "a type needs at least one variant"));
        }
        for (i, variant) in self.variants.iter().enumerate() {
            if self.variants[..i].iter().any(|seen| seen.name == variant.name) {
                return Err(invalid_declaration(
                    type_name,
                    &format!("variant {} is declared twice", interner.lookup(variant.name)),
                ));
            }
            for (j, &field) in variant.fields.iter().enumerate() {
                if variant.fields[..j].contains(&field) {
                    return Err(invalid_declaration(
                        type_name,
                        &format!(
                            "field {} is declared twice in variant {}",
                            interner.lookup(field),
                            interner.lookup(variant.name)
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// All types declared during an interpretation.
#[derive(Clone, Debug, Default)]
pub struct DataRegistry {
    types: FxHashMap<Name, AlgebraicType>,
}

impl DataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `ty`.
    ///
    /// An identical redeclaration is a no-op; a differing one is an
    /// invalid-declaration error and leaves the registered type untouched.
    pub fn declare(
        &mut self,
        ty: AlgebraicType,
        interner: &StringInterner,
    ) -> Result<(), EvalError> {
        ty.validate(interner)?;
        match self.types.get(&ty.name) {
            Some(existing) if *existing == ty => Ok(()),
            Some(_) => Err(invalid_declaration(
                interner.lookup(ty.name),
                "the type is already declared with different variants",
            )),
            None => {
                self.types.insert(ty.name, ty);
                Ok(())
            }
        }
    }

    pub fn lookup(&self, name: Name) -> Option<&AlgebraicType> {
        self.types.get(&name)
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.types.contains_key(&name)
    }

    /// Resolve `type_name.variant`, failing with undefined-type or
    /// undefined-variant.
    pub fn variant(
        &self,
        type_name: Name,
        variant: Name,
        interner: &StringInterner,
    ) -> Result<&VariantDef, EvalError> {
        let ty = self
            .types
            .get(&type_name)
            .ok_or_else(|| undefined_type(interner.lookup(type_name)))?;
        ty.variant(variant).ok_or_else(|| {
            undefined_variant(interner.lookup(type_name), interner.lookup(variant))
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{AlgebraicType, DataRegistry, VariantDef};
    use actor_ir::StringInterner;
    use actor_runtime::EvalErrorKind;
    use pretty_assertions::assert_eq;

    fn shape(interner: &StringInterner, rect_fields: &[&str]) -> AlgebraicType {
        let rect = VariantDef::new(
            interner.intern("Rect"),
            rect_fields.iter().map(|f| interner.intern(f)).collect(),
        );
        let circle = VariantDef::new(interner.intern("Circle"), vec![interner.intern("radius")]);
        AlgebraicType::new(interner.intern("Shape"), vec![rect, circle])
    }

    fn kind_of<T>(result: Result<T, actor_runtime::EvalError>) -> Option<EvalErrorKind> {
        result.err().map(|err| err.kind)
    }

    #[test]
    fn declare_then_resolve_variant() {
        let interner = StringInterner::new();
        let mut registry = DataRegistry::new();
        assert!(registry.declare(shape(&interner, &["width", "height"]), &interner).is_ok());

        let rect = registry.variant(interner.intern("Shape"), interner.intern("Rect"), &interner);
        assert_eq!(rect.map(|v| v.fields().len()).ok(), Some(2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn identical_redeclaration_is_accepted() {
        let interner = StringInterner::new();
        let mut registry = DataRegistry::new();
        assert!(registry.declare(shape(&interner, &["width", "height"]), &interner).is_ok());
        assert!(registry.declare(shape(&interner, &["width", "height"]), &interner).is_ok());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn differing_redeclaration_is_rejected() {
        let interner = StringInterner::new();
        let mut registry = DataRegistry::new();
        assert!(registry.declare(shape(&interner, &["width", "height"]), &interner).is_ok());
        let err = kind_of(registry.declare(shape(&interner, &["width"]), &interner));
        assert!(matches!(err, Some(EvalErrorKind::InvalidDeclaration { .. })));
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let interner = StringInterner::new();
        let mut registry = DataRegistry::new();
        let err = kind_of(registry.declare(shape(&interner, &["width", "width"]), &interner));
        assert!(matches!(err, Some(EvalErrorKind::InvalidDeclaration { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_type_and_variant() {
        let interner = StringInterner::new();
        let mut registry = DataRegistry::new();
        assert!(registry.declare(shape(&interner, &["width"]), &interner).is_ok());

        let tree = interner.intern("Tree");
        let err = kind_of(registry.variant(tree, interner.intern("Leaf"), &interner));
        assert_eq!(err, Some(EvalErrorKind::UndefinedType { name: "Tree".into() }));

        let shape_name = interner.intern("Shape");
        let err = kind_of(registry.variant(shape_name, interner.intern("Square"), &interner));
        assert_eq!(
            err,
            Some(EvalErrorKind::UndefinedVariant {
                type_name: "Shape".into(),
                variant: "Square".into(),
            })
        );
    }

    #[test]
    fn field_check_reports_both_directions() {
        let interner = StringInterner::new();
        let ty = shape(&interner, &["width", "height"]);
        let rect = &ty.variants()[0];
        let supplied = [interner.intern("width"), interner.intern("depth")];

        let err = kind_of(rect.check_fields(ty.name(), &supplied, &interner));
        assert_eq!(
            err,
            Some(EvalErrorKind::ConstructorMismatch {
                type_name: "Shape".into(),
                variant: "Rect".into(),
                missing: vec!["height".into()],
                unexpected: vec!["depth".into()],
            })
        );
    }

    #[test]
    fn field_supplied_twice_is_unexpected() {
        let interner = StringInterner::new();
        let ty = shape(&interner, &["width"]);
        let rect = &ty.variants()[0];
        let width = interner.intern("width");

        let err = kind_of(rect.check_fields(ty.name(), &[width, width], &interner));
        assert!(matches!(
            err,
            Some(EvalErrorKind::ConstructorMismatch { ref unexpected, .. })
                if unexpected == &["width".to_string()]
        ));
    }
}
