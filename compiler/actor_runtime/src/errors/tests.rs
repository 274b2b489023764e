use super::*;
use actor_ir::Span;
use pretty_assertions::assert_eq;

// Kind and message

#[test]
fn division_by_zero_has_correct_kind() {
    let err = division_by_zero();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.message, "division by zero");
}

#[test]
fn operator_mismatch_names_operator_and_operands() {
    let err = operator_mismatch(BinaryOp::And, "number", "number");
    assert_eq!(
        err.kind,
        EvalErrorKind::OperatorMismatch {
            op: BinaryOp::And,
            left: "number".to_string(),
            right: "number".to_string(),
        }
    );
    assert_eq!(
        err.message,
        "operator `&&` cannot be applied to number and number"
    );
}

#[test]
fn arity_mismatch_names_both_counts() {
    let err = wrong_function_args("f", 2, 1);
    assert_eq!(
        err.message,
        "you gave 1 parameter, function f requires 2 parameters"
    );
}

#[test]
fn constructor_mismatch_lists_fields() {
    let err = constructor_mismatch(
        "Shape",
        "Rect",
        vec!["height".to_string()],
        vec!["depth".to_string()],
    );
    assert_eq!(
        err.message,
        "constructor Shape.Rect field mismatch; missing: height; unexpected: depth"
    );
}

#[test]
fn recursion_limit_has_stack_overflow_kind() {
    let err = recursion_limit_exceeded(100);
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 100 });
}

#[test]
fn custom_errors_keep_their_message() {
    let err = EvalError::new("boom");
    assert_eq!(
        err.kind,
        EvalErrorKind::Custom {
            message: "boom".to_string()
        }
    );
}

#[test]
fn syntax_errors_are_distinguishable() {
    let err = syntax_error("unexpected token");
    assert!(matches!(err.kind, EvalErrorKind::Syntax { .. }));
}

// Span and backtrace

#[test]
fn innermost_span_wins() {
    let err = undefined_variable("x")
        .with_span(Span::new(3, 4))
        .with_span(Span::new(0, 10));
    assert_eq!(err.span, Some(Span::new(3, 4)));
    assert_eq!(err.to_string(), "undefined variable: x at 3..4");
}

#[test]
fn backtrace_renders_frames() {
    let trace = EvalBacktrace::new(vec![
        BacktraceFrame {
            name: "inner".to_string(),
            span: Some(Span::new(5, 9)),
        },
        BacktraceFrame {
            name: "outer".to_string(),
            span: None,
        },
    ]);
    assert_eq!(
        trace.to_string(),
        "stack backtrace:\n  0: inner at 5..9\n  1: outer\n"
    );
    let err = division_by_zero()
        .with_backtrace(trace.clone())
        .with_backtrace(EvalBacktrace::default());
    assert_eq!(err.backtrace, Some(trace));
}

// Numeric conversion

#[test]
fn numeric_errors_map_to_kinds() {
    assert_eq!(
        EvalError::from(NumericError::ModuloByZero).kind,
        EvalErrorKind::ModuloByZero
    );
    let err = EvalError::from(NumericError::Domain {
        operation: "square root",
        reason: "negative argument -1".to_string(),
    });
    assert_eq!(
        err.kind,
        EvalErrorKind::ArithmeticDomain {
            operation: "square root".to_string(),
            reason: "negative argument -1".to_string(),
        }
    );
}
