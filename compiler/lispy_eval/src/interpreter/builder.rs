//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::{Environment, EvalConfig};

/// Builder for creating Interpreter instances.
///
/// ```text
/// let mut env = Environment::with_builtins();
/// let mut interp = Interpreter::builder(&mut env).max_depth(500).build();
/// ```
pub struct InterpreterBuilder<'env> {
    env: &'env mut Environment,
    config: EvalConfig,
}

impl<'env> InterpreterBuilder<'env> {
    /// Create a new builder with the default configuration.
    pub fn new(env: &'env mut Environment) -> Self {
        Self {
            env,
            config: EvalConfig::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the maximum evaluation depth.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn build(self) -> Interpreter<'env> {
        Interpreter {
            env: self.env,
            config: self.config,
            depth: 0,
        }
    }
}
