//! The prelude: host primitives bound as ordinary functions.
//!
//! Each intrinsic is a one-parameter [`FunctionValue`] whose body is an
//! [`ExprKind::Intrinsic`](actor_ir::ExprKind::Intrinsic) node over that
//! parameter, so prelude functions go through the normal call protocol
//! (arity checks, recursion limit, backtraces).

use actor_ir::{ExprArena, ExprBuilder, ExprRange, Intrinsic, Mutability, StringInterner};
use actor_numeric::Decimal;
use actor_runtime::errors::{syntax_error, type_mismatch};
use actor_runtime::{Environment, EvalResult, FunctionValue, Value};

use crate::display::display_value;
use crate::interpreter::Interpreter;

const PARAM: &str = "value";

/// Bind every intrinsic in `env` under its prelude name.
pub fn install_prelude(arena: &mut ExprArena, interner: &StringInterner, env: &Environment) {
    let mut builder = ExprBuilder::new(arena, interner);
    let param = builder.name(PARAM);
    for intrinsic in Intrinsic::ALL {
        let arg = builder.ident(PARAM);
        let body = builder.intrinsic(intrinsic, &[arg]);
        let name = builder.name(intrinsic.name());
        let function = FunctionValue::new(name, vec![param], body);
        env.define(name, Value::function(function), Mutability::Mutable);
    }
}

/// Global environment holding only the prelude.
pub fn prelude_environment(arena: &mut ExprArena, interner: &StringInterner) -> Environment {
    let env = Environment::new();
    install_prelude(arena, interner, &env);
    env
}

pub(crate) fn eval_intrinsic(
    interp: &mut Interpreter<'_>,
    kind: Intrinsic,
    args: ExprRange,
) -> EvalResult {
    let arena = interp.arena;
    let &[arg] = arena.get_expr_list(args) else {
        return Err(syntax_error(&format!(
            "{} takes exactly one argument",
            kind.name()
        )));
    };
    let value = interp.eval(arg)?;
    match kind {
        Intrinsic::Print | Intrinsic::Println => {
            let interner = interp.interner;
            let text = display_value(&value, interp, interner)?;
            if kind == Intrinsic::Print {
                interp.print_handler.print(&text);
            } else {
                interp.print_handler.println(&text);
            }
            Ok(Value::Void)
        }
        Intrinsic::Sqrt => numeric(kind, &value, Decimal::sqrt),
        Intrinsic::Sin => numeric(kind, &value, Decimal::sin),
        Intrinsic::Cos => numeric(kind, &value, Decimal::cos),
        Intrinsic::Tan => numeric(kind, &value, Decimal::tan),
    }
}

fn numeric(
    kind: Intrinsic,
    value: &Value,
    op: fn(&Decimal) -> Result<Decimal, actor_numeric::NumericError>,
) -> EvalResult {
    let Some(n) = value.as_number() else {
        tracing::debug!(intrinsic = kind.name(), got = value.type_name(), "non-numeric argument");
        return Err(type_mismatch("number", value.type_name()));
    };
    Ok(Value::Number(op(n)?))
}
