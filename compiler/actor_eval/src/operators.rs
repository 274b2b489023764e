//! Binary operator implementations for the evaluator.
//!
//! Dispatch is a match over the pair of operand kinds. Operand pairs with no
//! defined meaning end in an operator-mismatch error. List operands may hold
//! deferred elements, so equality takes a [`ThunkForcer`].

use std::cmp::Ordering;

use actor_ir::BinaryOp;
use actor_numeric::Decimal;
use actor_runtime::errors::{arithmetic_domain, operator_mismatch};
use actor_runtime::{EvalError, EvalResult, Heap, Thunk, ThunkForcer, Value};

/// Evaluate `left op right` on already evaluated operands.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Callers hand over freshly evaluated operands"
)]
pub fn evaluate_binary(
    left: Value,
    right: Value,
    op: BinaryOp,
    forcer: &mut dyn ThunkForcer,
) -> EvalResult {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(a, b, op),
        (Value::Number(a), Value::Char(c)) => eval_number_char_binary(a, *c, op),
        (Value::Number(count), Value::List(items)) | (Value::List(items), Value::Number(count))
            if op == BinaryOp::Mul =>
        {
            repeat_list(items, count)
        }
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Char(c), Value::Number(n)) => eval_char_number_binary(*c, n, op),
        (Value::Char(a), Value::Char(b)) => eval_char_binary(*a, *b, op),
        (Value::List(a), Value::List(b)) => eval_list_binary(a, b, op, forcer),
        _ => Err(mismatch(op, &left, &right)),
    }
}

#[cold]
fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    operator_mismatch(op, left.type_name(), right.type_name())
}

/// Map a comparison operator onto an ordering; `None` for other operators.
fn compare(op: BinaryOp, ordering: Ordering) -> Option<Value> {
    let result = match op {
        BinaryOp::Eq => ordering == Ordering::Equal,
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        _ => return None,
    };
    Some(Value::Bool(result))
}

fn eval_number_binary(a: &Decimal, b: &Decimal, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Number(a + b)),
        BinaryOp::Sub => Ok(Value::Number(a - b)),
        BinaryOp::Mul => Ok(Value::Number(a * b)),
        BinaryOp::Div => Ok(Value::Number(a.try_div(b)?)),
        BinaryOp::Mod => Ok(Value::Number(a.try_rem(b)?)),
        BinaryOp::Pow => Ok(Value::Number(a.try_pow(b)?)),
        BinaryOp::Range => Ok(inclusive_range(a, b)),
        BinaryOp::And | BinaryOp::Or => Err(operator_mismatch(op, "number", "number")),
        _ => compare(op, a.cmp(b)).ok_or_else(|| operator_mismatch(op, "number", "number")),
    }
}

/// `a to b`: `a, a + 1, ...` while not past `b`. Empty when `a > b`.
fn inclusive_range(start: &Decimal, end: &Decimal) -> Value {
    let one = Decimal::one();
    let mut items = Vec::new();
    let mut current = start.clone();
    while current <= *end {
        let next = &current + &one;
        items.push(Thunk::Forced(Value::Number(current)));
        current = next;
    }
    Value::list(items)
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        _ => Err(operator_mismatch(op, "bool", "bool")),
    }
}

fn char_from_code(code: &Decimal) -> Result<char, EvalError> {
    code.to_u32()
        .and_then(char::from_u32)
        .ok_or_else(|| {
            arithmetic_domain(
                "character arithmetic",
                &format!("{code} is not a character code"),
            )
        })
}

fn char_code(c: char) -> Decimal {
    Decimal::from(u32::from(c))
}

fn eval_number_char_binary(n: &Decimal, c: char, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Char(char_from_code(&(n + &char_code(c)))?)),
        BinaryOp::Sub => Ok(Value::Char(char_from_code(&(n - &char_code(c)))?)),
        _ => Err(operator_mismatch(op, "number", "char")),
    }
}

fn eval_char_number_binary(c: char, n: &Decimal, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Char(char_from_code(&(&char_code(c) + n))?)),
        BinaryOp::Sub => Ok(Value::Char(char_from_code(&(&char_code(c) - n))?)),
        _ => Err(operator_mismatch(op, "char", "number")),
    }
}

fn eval_char_binary(a: char, b: char, op: BinaryOp) -> EvalResult {
    if op == BinaryOp::Sub {
        return Ok(Value::Number(&char_code(a) - &char_code(b)));
    }
    compare(op, a.cmp(&b)).ok_or_else(|| operator_mismatch(op, "char", "char"))
}

fn eval_list_binary(
    a: &Heap<Vec<Thunk>>,
    b: &Heap<Vec<Thunk>>,
    op: BinaryOp,
    forcer: &mut dyn ThunkForcer,
) -> EvalResult {
    match op {
        BinaryOp::Add => {
            let mut items = Vec::with_capacity(a.len() + b.len());
            items.extend(a.iter().cloned());
            items.extend(b.iter().cloned());
            Ok(Value::list(items))
        }
        BinaryOp::Eq => Ok(Value::Bool(lists_equal(a, b, forcer)?)),
        _ => Err(operator_mismatch(op, "list", "list")),
    }
}

/// `items * count`.
///
/// The whole part of `|count|` gives full copies and the fractional part a
/// proportional prefix, so `[1, 2, 3, 4] * 1.5` is `[1, 2, 3, 4, 1, 2]`.
/// A negative count reverses the result. Elements are shared, not forced.
fn repeat_list(items: &[Thunk], count: &Decimal) -> EvalResult {
    let negative = count.is_negative();
    let count = if negative { -count } else { count.clone() };

    let too_large = || {
        arithmetic_domain(
            "list repetition",
            &format!("cannot repeat a list {count} times"),
        )
    };
    let whole = count.trunc_to_i64().ok_or_else(too_large)?;
    let copies = usize::try_from(whole).map_err(|_| too_large())?;
    let fraction = &count - &Decimal::from(whole);
    let len = i64::try_from(items.len()).map_err(|_| too_large())?;
    let prefix = (&fraction * &Decimal::from(len))
        .trunc_to_i64()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
        .min(items.len());

    let total = copies
        .checked_mul(items.len())
        .and_then(|n| n.checked_add(prefix))
        .ok_or_else(too_large)?;
    let mut result = Vec::with_capacity(total);
    for _ in 0..copies {
        result.extend(items.iter().cloned());
    }
    result.extend(items[..prefix].iter().cloned());
    if negative {
        result.reverse();
    }
    Ok(Value::list(result))
}

fn lists_equal(a: &[Thunk], b: &[Thunk], forcer: &mut dyn ThunkForcer) -> Result<bool, EvalError> {
    if a.len() != b.len() {
        return Ok(false);
    }
    for (x, y) in a.iter().zip(b) {
        let x = forcer.force(x)?;
        let y = forcer.force(y)?;
        if !values_equal(&x, &y, forcer)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Structural equality of two values, forcing list elements and data
/// fields as needed.
///
/// Numbers compare by value (`10 = 10.0`); functions by identity; data by
/// identity or by tag and field values. Values of different kinds are
/// unequal.
pub fn values_equal(a: &Value, b: &Value, forcer: &mut dyn ThunkForcer) -> Result<bool, EvalError> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(x == y),
        (Value::Bool(x), Value::Bool(y)) => Ok(x == y),
        (Value::Char(x), Value::Char(y)) => Ok(x == y),
        (Value::List(x), Value::List(y)) => {
            if x.ptr_eq(y) {
                return Ok(true);
            }
            lists_equal(x, y, forcer)
        }
        (Value::Function(f), Value::Function(g)) => Ok(f.same_function(g)),
        (Value::Data(x), Value::Data(y)) => {
            if x.ptr_eq(y) {
                return Ok(true);
            }
            if x.type_name() != y.type_name() || x.variant() != y.variant() {
                return Ok(false);
            }
            let (xs, ys) = (x.fields(), y.fields());
            if xs.len() != ys.len() {
                return Ok(false);
            }
            for ((name_x, tx), (name_y, ty)) in xs.iter().zip(&ys) {
                if name_x != name_y {
                    return Ok(false);
                }
                let vx = forcer.force(tx)?;
                let vy = forcer.force(ty)?;
                if !values_equal(&vx, &vy, forcer)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Value::Void, Value::Void) => Ok(true),
        _ => Ok(false),
    }
}
