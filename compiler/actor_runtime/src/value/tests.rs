use super::{DataValue, FunctionValue, Value};
use crate::{Environment, Thunk};
use actor_ir::{ExprId, Name, StringInterner};
use pretty_assertions::assert_eq;

#[test]
fn type_names() {
    assert_eq!(Value::int(1).type_name(), "number");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::Char('a').type_name(), "char");
    assert_eq!(Value::list(Vec::new()).type_name(), "list");
    assert_eq!(Value::Void.type_name(), "void");
}

#[test]
fn strings_are_char_lists() {
    let value = Value::string("hi");
    let elements = value.as_list().map(<[Thunk]>::to_vec);
    assert_eq!(
        elements,
        Some(vec![
            Thunk::Forced(Value::Char('h')),
            Thunk::Forced(Value::Char('i'))
        ])
    );
}

#[test]
fn numbers_compare_by_value() {
    let ten: actor_numeric::Decimal = "10.0".parse().unwrap_or_else(|_| panic!("literal"));
    assert_eq!(Value::Number(ten), Value::int(10));
    assert_ne!(Value::int(1), Value::Bool(true));
}

#[test]
fn deferred_thunks_compare_by_node_and_environment() {
    let env = Environment::new();
    let a = Thunk::deferred(ExprId::new(3), env.clone());
    let b = Thunk::deferred(ExprId::new(3), env);
    let c = Thunk::deferred(ExprId::new(3), Environment::new());
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(matches!(a, Thunk::Deferred { .. }));
}

#[test]
fn data_fields_are_shared_between_handles() {
    let interner = StringInterner::new();
    let width = interner.intern("width");
    let data = DataValue::new(
        interner.intern("Box"),
        interner.intern("Box"),
        vec![(width, Thunk::Forced(Value::int(5)))],
    );
    let alias = data.clone();

    assert!(alias.set_field(width, Thunk::Forced(Value::int(7))));
    assert_eq!(data.field(width), Some(Thunk::Forced(Value::int(7))));
    assert!(!data.set_field(interner.intern("depth"), Thunk::Forced(Value::Void)));
    assert_eq!(data.tag(&interner), "Box$Box");
    assert_eq!(Value::Data(data), Value::Data(alias));
}

#[test]
fn functions_compare_by_definition() {
    let x = Name::from_raw(1);
    let f = FunctionValue::new(Name::from_raw(2), vec![x], ExprId::new(0));
    let g = FunctionValue::new(Name::from_raw(2), vec![x], ExprId::new(1));
    assert_eq!(f.arity(), 1);
    assert_eq!(Value::function(f.clone()), Value::function(f.clone()));
    assert_ne!(Value::function(f), Value::function(g));
}
