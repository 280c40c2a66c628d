//! RAII scope guard for lambda bodies.
//!
//! [`ScopedInterpreter`] pushes a scope on creation and pops it on drop, so the
//! caller's environment is restored on every exit path, including unwinding.

use std::ops::{Deref, DerefMut};

use lispy_value::Scope;

use super::Interpreter;

/// Guard that owns one pushed environment scope.
///
/// Derefs to the [`Interpreter`], so evaluation goes through it directly.
pub struct ScopedInterpreter<'guard, 'env> {
    interpreter: &'guard mut Interpreter<'env>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl<'env> Deref for ScopedInterpreter<'_, 'env> {
    type Target = Interpreter<'env>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'env> Interpreter<'env> {
    /// Push `scope` and return a guard that pops it when dropped.
    pub fn scoped(&mut self, scope: Scope) -> ScopedInterpreter<'_, 'env> {
        self.env.push_scope(scope);
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` with `scope` pushed on top of the environment.
    pub fn with_scope<T, F>(&mut self, scope: Scope, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'env>) -> T,
    {
        let mut scoped = self.scoped(scope);
        f(&mut scoped)
    }
}
