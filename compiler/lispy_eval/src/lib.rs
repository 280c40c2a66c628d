//! Lispy Eval - turns syntax trees into values and reduces them.
//!
//! # Pipeline
//!
//! ```text
//! source --lispy_syntax::parse--> SyntaxNode --read--> Value --Interpreter::eval--> Value
//! ```
//!
//! The top-level [`Environment`] is owned by the caller and lent to each
//! [`Interpreter`] by `&mut`, so definitions persist across input units.

mod builtins;
mod eval_config;
mod environment;
mod interpreter;
mod reader;

pub use environment::Environment;
pub use eval_config::{EvalConfig, DEFAULT_MAX_DEPTH};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use reader::read;

pub use lispy_value::{Builtin, EvalError, EvalErrorKind, Function, Lambda, Scope, Value, ValueKind};

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
