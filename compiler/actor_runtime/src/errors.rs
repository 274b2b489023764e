//! Evaluation errors.
//!
//! `EvalErrorKind` is the structured category a caller matches on.
//! Factory functions (e.g. `division_by_zero()`) build an [`EvalError`] with
//! both the kind and its rendered message; the evaluator attaches the span
//! of the failing node and, inside calls, a backtrace.

use actor_ir::{BinaryOp, Span};
use actor_numeric::NumericError;
use std::fmt;

use crate::value::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Reported by a front end; the evaluator never raises it.
    Syntax {
        message: String,
    },

    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    ArithmeticDomain {
        operation: String,
        reason: String,
    },

    // Type/Operator
    OperatorMismatch {
        op: BinaryOp,
        left: String,
        right: String,
    },
    TypeMismatch {
        expected: String,
        got: String,
    },

    // Access
    UndefinedVariable {
        name: String,
    },
    UndefinedFunction {
        name: String,
    },
    UndefinedField {
        field: String,
        type_name: String,
    },
    IndexOutOfBounds {
        index: i64,
        len: usize,
    },
    ImmutableBinding {
        name: String,
    },

    // Algebraic data
    UndefinedType {
        name: String,
    },
    UndefinedVariant {
        type_name: String,
        variant: String,
    },
    ConstructorMismatch {
        type_name: String,
        variant: String,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
    InvalidDeclaration {
        type_name: String,
        reason: String,
    },

    // Function
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    StackOverflow {
        depth: usize,
    },

    /// Errors without a structured category.
    Custom {
        message: String,
    },
}

fn join(names: &[String]) -> String {
    names.join(", ")
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { message } => write!(f, "syntax error: {message}"),

            // Arithmetic
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::ArithmeticDomain { operation, reason } => {
                write!(f, "{operation} is undefined: {reason}")
            }

            // Type/Operator
            Self::OperatorMismatch { op, left, right } => write!(
                f,
                "operator `{}` cannot be applied to {left} and {right}",
                op.as_symbol()
            ),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }

            // Access
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UndefinedFunction { name } => write!(f, "undefined function: {name}"),
            Self::UndefinedField { field, type_name } => {
                write!(f, "no field {field} on {type_name}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for list of length {len}")
            }
            Self::ImmutableBinding { name } => {
                write!(f, "cannot assign to immutable variable: {name}")
            }

            // Algebraic data
            Self::UndefinedType { name } => write!(f, "undefined data type: {name}"),
            Self::UndefinedVariant { type_name, variant } => {
                write!(f, "data type {type_name} has no variant {variant}")
            }
            Self::ConstructorMismatch {
                type_name,
                variant,
                missing,
                unexpected,
            } => {
                write!(f, "constructor {type_name}.{variant} field mismatch")?;
                if !missing.is_empty() {
                    write!(f, "; missing: {}", join(missing))?;
                }
                if !unexpected.is_empty() {
                    write!(f, "; unexpected: {}", join(unexpected))?;
                }
                Ok(())
            }
            Self::InvalidDeclaration { type_name, reason } => {
                write!(f, "invalid declaration of {type_name}: {reason}")
            }

            // Function
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let given = if *got == 1 { "parameter" } else { "parameters" };
                let wanted = if *expected == 1 {
                    "parameter"
                } else {
                    "parameters"
                };
                if name.is_empty() {
                    write!(
                        f,
                        "you gave {got} {given}, function requires {expected} {wanted}"
                    )
                } else {
                    write!(
                        f,
                        "you gave {got} {given}, function {name} requires {expected} {wanted}"
                    )
                }
            }
            Self::StackOverflow { depth } => {
                write!(f, "maximum recursion depth exceeded (limit: {depth})")
            }

            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Function name; anonymous functions are rendered as `<lambda>`.
    pub name: String,
    /// Source location of the call site.
    pub span: Option<Span>,
}

/// Snapshot of the active calls at an error site, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            write!(f, "  {i}: {}", frame.name)?;
            if let Some(span) = frame.span {
                write!(f, " at {span}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Rendered message; equals `kind.to_string()` for factory-built errors.
    pub message: String,
    /// Innermost node that failed.
    pub span: Option<Span>,
    /// Active calls when the error was raised.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    /// Error with a free-form message and the `Custom` kind.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::from_kind(EvalErrorKind::Custom {
            message: message.clone(),
        })
    }

    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            backtrace: None,
        }
    }

    /// Attach a span unless a more precise one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// Attach a backtrace unless one was captured deeper in the call chain.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.backtrace.is_none() {
            self.backtrace = Some(backtrace);
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl From<NumericError> for EvalError {
    fn from(error: NumericError) -> Self {
        match error {
            NumericError::DivisionByZero => division_by_zero(),
            NumericError::ModuloByZero => modulo_by_zero(),
            NumericError::Domain { operation, reason } => arithmetic_domain(operation, &reason),
            NumericError::Overflow { operation } => {
                arithmetic_domain(operation, "exponent out of range")
            }
            NumericError::Parse(text) => EvalError::new(format!("invalid number literal '{text}'")),
        }
    }
}

// Syntax

/// Syntax error reported by a front end.
#[cold]
pub fn syntax_error(message: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Syntax {
        message: message.to_string(),
    })
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Operation undefined for its argument (negative root, bad code point, ...).
#[cold]
pub fn arithmetic_domain(operation: &str, reason: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArithmeticDomain {
        operation: operation.to_string(),
        reason: reason.to_string(),
    })
}

// Type/Operator

/// No dispatch entry for `left op right`.
#[cold]
pub fn operator_mismatch(op: BinaryOp, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperatorMismatch {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

// Access

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Callee is absent or not a function.
#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_field(field: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedField {
        field: field.to_string(),
        type_name: type_name.to_string(),
    })
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn immutable_binding(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ImmutableBinding {
        name: name.to_string(),
    })
}

// Algebraic data

#[cold]
pub fn undefined_type(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedType {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_variant(type_name: &str, variant: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariant {
        type_name: type_name.to_string(),
        variant: variant.to_string(),
    })
}

/// Supplied field set differs from the declared one.
#[cold]
pub fn constructor_mismatch(
    type_name: &str,
    variant: &str,
    missing: Vec<String>,
    unexpected: Vec<String>,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ConstructorMismatch {
        type_name: type_name.to_string(),
        variant: variant.to_string(),
        missing,
        unexpected,
    })
}

#[cold]
pub fn invalid_declaration(type_name: &str, reason: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidDeclaration {
        type_name: type_name.to_string(),
        reason: reason.to_string(),
    })
}

// Function

#[cold]
pub fn wrong_function_args(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit })
}

#[cfg(test)]
mod tests;
