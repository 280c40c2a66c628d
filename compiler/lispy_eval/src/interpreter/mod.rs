//! Tree-walking evaluator.
//!
//! # Reduction rules
//!
//! - `Symbol` resolves through the [`Environment`], yielding a copy.
//! - `SExpr` reduces its children left to right. The first child that reduces
//!   to an error is the result, and later children are dropped unevaluated.
//!   An empty S-expression is itself; a single child is the result. Otherwise
//!   the head must be a function, applied to the rest.
//! - Everything else evaluates to itself.
//!
//! Each S-expression reduction and lambda application counts toward
//! [`EvalConfig::max_depth`]; exceeding it yields a recursion-limit error
//! value instead of exhausting the native stack.

mod builder;
mod function_call;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use lispy_stack::ensure_sufficient_stack;
use lispy_value::{not_a_function, recursion_limit_exceeded, Value, ValueKind};

use crate::{Environment, EvalConfig};

/// Evaluator bound to a caller-owned environment.
pub struct Interpreter<'env> {
    pub(crate) env: &'env mut Environment,
    config: EvalConfig,
    /// Current nesting of reductions and applications.
    depth: usize,
}

impl<'env> Interpreter<'env> {
    /// Create an interpreter with the default configuration.
    pub fn new(env: &'env mut Environment) -> Self {
        InterpreterBuilder::new(env).build()
    }

    /// Create an interpreter builder for more configuration options.
    pub fn builder(env: &'env mut Environment) -> InterpreterBuilder<'env> {
        InterpreterBuilder::new(env)
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        self.env
    }

    #[inline]
    pub fn env_mut(&mut self) -> &mut Environment {
        self.env
    }

    #[inline]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Current evaluation depth; zero between top-level inputs.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Reduce `value` to its result.
    pub fn eval(&mut self, value: Value) -> Value {
        if let Some(name) = value.as_symbol() {
            tracing::trace!(symbol = %name, "resolve");
            return self.env.lookup(name);
        }
        if value.kind() != ValueKind::SExpr {
            return value;
        }
        match value.into_items() {
            Ok(items) => self.nested(|interp| interp.eval_sexpr(items)),
            Err(other) => other,
        }
    }

    /// Run `f` one level deeper, or fail if the depth limit is reached.
    pub(crate) fn nested(&mut self, f: impl FnOnce(&mut Self) -> Value) -> Value {
        let limit = self.config.max_depth;
        if self.depth >= limit {
            tracing::debug!(limit, "recursion limit reached");
            return Value::Error(recursion_limit_exceeded(limit));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    fn eval_sexpr(&mut self, items: Vec<Value>) -> Value {
        let mut reduced = Vec::with_capacity(items.len());
        for item in items {
            let value = self.eval(item);
            if value.is_error() {
                return value;
            }
            reduced.push(value);
        }

        if reduced.len() <= 1 {
            return reduced.pop().unwrap_or_else(Value::sexpr);
        }

        let mut args = reduced.into_iter();
        let Some(head) = args.next() else {
            return Value::sexpr();
        };
        match head.into_function() {
            Ok(func) => self.call(func, args.collect()),
            Err(other) => Value::Error(not_a_function(other.kind())),
        }
    }
}

#[cfg(test)]
mod tests;
