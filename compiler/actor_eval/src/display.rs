//! Display form of values, as written by `print` and `println`.
//!
//! Strings are lists of characters, so a non-empty list whose elements are
//! all characters displays as the text itself. Other lists, including the
//! empty list, display bracketed.

use actor_ir::StringInterner;
use actor_runtime::{EvalError, ThunkForcer, Value};

/// Render `value`, forcing any deferred list elements or data fields.
pub fn display_value(
    value: &Value,
    forcer: &mut dyn ThunkForcer,
    interner: &StringInterner,
) -> Result<String, EvalError> {
    let mut out = String::new();
    write_value(&mut out, value, forcer, interner)?;
    Ok(out)
}

fn write_value(
    out: &mut String,
    value: &Value,
    forcer: &mut dyn ThunkForcer,
    interner: &StringInterner,
) -> Result<(), EvalError> {
    match value {
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Char(c) => out.push(*c),
        Value::List(items) => {
            let values = items
                .iter()
                .map(|thunk| forcer.force(thunk))
                .collect::<Result<Vec<_>, _>>()?;
            if !values.is_empty() && values.iter().all(|v| matches!(v, Value::Char(_))) {
                for v in &values {
                    write_value(out, v, forcer, interner)?;
                }
            } else {
                out.push('[');
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_value(out, v, forcer, interner)?;
                }
                out.push(']');
            }
        }
        Value::Function(function) => {
            if function.name().is_empty() {
                out.push_str("<lambda>");
            } else {
                out.push_str("<function ");
                out.push_str(interner.lookup(function.name()));
                out.push('>');
            }
        }
        Value::Data(data) => {
            out.push_str(&data.tag(interner));
            out.push('{');
            for (i, (name, thunk)) in data.fields().iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(interner.lookup(*name));
                out.push_str(": ");
                let field = forcer.force(thunk)?;
                write_value(out, &field, forcer, interner)?;
            }
            out.push('}');
        }
        Value::Void => out.push_str("void"),
    }
    Ok(())
}
