//! Lispy Value - the runtime value model shared by the reader, the builtins
//! and the evaluator.
//!
//! # Ownership
//!
//! A [`Value`] exclusively owns everything beneath it: the children of an
//! S-/Q-expression, and the formals, body and captured [`Scope`] of a
//! lambda. Nothing is reference counted. Deep copy is `Clone` and teardown
//! is `Drop`, so a value can never be observed from two places at once.
//!
//! # Errors as values
//!
//! Evaluation faults are ordinary [`Value::Error`] values carrying an
//! [`EvalError`]. They are returned, stored and rendered like any other
//! value. Only the structural list helpers (`pop_at`, `take_at`, `append`)
//! use `Result`, with [`ListError`].

mod errors;
mod scope;
mod value;

pub use errors::{
    arity_mismatch, binding_count_mismatch, division_by_zero, empty_argument, integer_overflow,
    invalid_formals, invalid_number, invalid_syntax, lambda_arity_mismatch, non_symbol_formal,
    not_a_function, recursion_limit_exceeded, type_mismatch, unbound_symbol, EvalError,
    EvalErrorKind,
};
pub use scope::Scope;
pub use value::{Builtin, Function, Lambda, ListError, Value, ValueKind, VARIADIC_MARKER};
