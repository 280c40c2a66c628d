//! Error values produced during reading and evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries the typed category of a fault so callers can match
//! on it. The factory functions below are the public way to build errors:
//! each fills in both the `kind` and the human-readable `message` that
//! `Error: <message>` renders.

use std::fmt;

use crate::value::ValueKind;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lookup
    UnboundSymbol {
        name: String,
    },

    // Type/Arity
    TypeMismatch {
        expected: ValueKind,
        got: ValueKind,
    },
    ArityMismatch {
        function: String,
        expected: usize,
        got: usize,
    },
    EmptyArgument {
        function: String,
        index: usize,
    },
    InvalidFormals,

    // Arithmetic
    DivisionByZero,
    IntegerOverflow {
        function: String,
    },

    // Reading
    InvalidNumber {
        text: String,
    },
    InvalidSyntax {
        tag: String,
    },

    // Resources
    RecursionLimit {
        limit: usize,
    },

    /// Free-form error text, e.g. from a user-constructed error value.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundSymbol { name } => write!(f, "unbound symbol '{name}'"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "incorrect type. Got {got}, Expected {expected}.")
            }
            Self::ArityMismatch {
                function,
                expected,
                got,
            } => write!(
                f,
                "Function '{function}' passed incorrect number of arguments. \
                 Got {got}, Expected {expected}."
            ),
            Self::EmptyArgument { function, index } => {
                write!(f, "Function '{function}' passed {{}} for argument {index}.")
            }
            Self::InvalidFormals => write!(
                f,
                "Function format invalid. Symbol '&' not followed by single symbol."
            ),
            Self::DivisionByZero => write!(f, "Division By Zero!"),
            Self::IntegerOverflow { function } => {
                write!(f, "Function '{function}' overflowed the integer range.")
            }
            Self::InvalidNumber { .. } => write!(f, "invalid number"),
            Self::InvalidSyntax { tag } => write!(f, "unrecognised syntax node '{tag}'"),
            Self::RecursionLimit { limit } => {
                write!(f, "maximum recursion depth exceeded (limit: {limit})")
            }
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// An evaluation fault, carried inside `Value::Error`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message rendered after `Error: `.
    ///
    /// For most kinds this is `kind.to_string()`; factories that know the
    /// calling context (argument index, function name) refine it.
    pub message: String,
}

impl EvalError {
    /// Create a free-form error with `Custom` kind.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    fn with_message(kind: EvalErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// Lookup Errors

/// Symbol not bound in any visible scope.
#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    })
}

// Type and Arity Errors

/// A builtin received an argument of the wrong kind.
#[cold]
pub fn type_mismatch(function: &str, index: usize, expected: ValueKind, got: ValueKind) -> EvalError {
    EvalError::with_message(
        EvalErrorKind::TypeMismatch { expected, got },
        format!(
            "Function '{function}' passed incorrect type for argument {index}. \
             Got {got}, Expected {expected}."
        ),
    )
}

/// An S-expression whose first element did not reduce to a function.
#[cold]
pub fn not_a_function(got: ValueKind) -> EvalError {
    EvalError::with_message(
        EvalErrorKind::TypeMismatch {
            expected: ValueKind::Function,
            got,
        },
        format!("S-expression starts with incorrect type. Got {got}, Expected Function."),
    )
}

/// A formals or symbol list contained something other than a symbol.
#[cold]
pub fn non_symbol_formal(function: &str, got: ValueKind) -> EvalError {
    EvalError::with_message(
        EvalErrorKind::TypeMismatch {
            expected: ValueKind::Symbol,
            got,
        },
        format!("Function '{function}' cannot define non-symbol. Got {got}, Expected Symbol."),
    )
}

/// A builtin received the wrong number of arguments.
#[cold]
pub fn arity_mismatch(function: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        expected,
        got,
    })
}

/// `def` received a different number of values than symbols.
#[cold]
pub fn binding_count_mismatch(function: &str, symbols: usize, values: usize) -> EvalError {
    EvalError::with_message(
        EvalErrorKind::ArityMismatch {
            function: function.to_string(),
            expected: symbols,
            got: values,
        },
        format!(
            "Function '{function}' passed incorrect number of values for symbols. \
             Got {values}, Expected {symbols}."
        ),
    )
}

/// A lambda was applied to more arguments than it has formals.
#[cold]
pub fn lambda_arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::with_message(
        EvalErrorKind::ArityMismatch {
            function: "\\".to_string(),
            expected,
            got,
        },
        format!("Function passed too many arguments. Got {got}, Expected {expected}."),
    )
}

/// A builtin that needs a non-empty list received `{}`.
#[cold]
pub fn empty_argument(function: &str, index: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyArgument {
        function: function.to_string(),
        index,
    })
}

/// `&` in a formals list not followed by exactly one symbol.
#[cold]
pub fn invalid_formals() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidFormals)
}

// Arithmetic Errors

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Checked arithmetic left the `i64` range.
#[cold]
pub fn integer_overflow(function: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        function: function.to_string(),
    })
}

// Reading Errors

/// Number literal outside the `i64` range.
#[cold]
pub fn invalid_number(text: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumber {
        text: text.to_string(),
    })
}

/// Syntax node with a tag the reader does not understand.
#[cold]
pub fn invalid_syntax(tag: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidSyntax {
        tag: tag.to_string(),
    })
}

// Resource Errors

/// Evaluation nested deeper than the configured limit.
#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

#[cfg(test)]
mod tests;
