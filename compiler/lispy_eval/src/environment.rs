//! Scope stack for symbol resolution.
//!
//! The bottom scope is the global scope and is never popped. Applying a lambda
//! pushes the lambda's bound formals on top; lookups search innermost first.

use lispy_value::{unbound_symbol, Builtin, Scope, Value};

/// Stack of scopes, with the current scope at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    /// Never empty: index 0 is the global scope.
    scopes: Vec<Scope>,
}

impl Environment {
    /// Create an environment with an empty global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::new()],
        }
    }

    /// Create an environment whose global scope holds every builtin.
    pub fn with_builtins() -> Self {
        let mut env = Self::new();
        for builtin in Builtin::ALL {
            env.bind_global(builtin.name(), Value::builtin(builtin));
        }
        env
    }

    /// Number of scopes on the stack, including the global scope.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn global(&self) -> &Scope {
        &self.scopes[0]
    }

    /// The innermost scope, where `def` binds.
    #[inline]
    pub fn current(&self) -> &Scope {
        let top = self.scopes.len() - 1;
        &self.scopes[top]
    }

    /// Push a scope on top of the stack.
    #[inline]
    pub fn push_scope(&mut self, scope: Scope) {
        self.scopes.push(scope);
    }

    /// Pop the innermost scope. The global scope stays put.
    #[inline]
    pub fn pop_scope(&mut self) -> Option<Scope> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    /// Copy of the value bound to `name`, or an unbound-symbol error value.
    pub fn lookup(&self, name: &str) -> Value {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.lookup(name))
            .unwrap_or_else(|| Value::Error(unbound_symbol(name)))
    }

    /// Bind `name` in the current scope, replacing any previous binding there.
    pub fn bind(&mut self, name: &str, value: Value) {
        let top = self.scopes.len() - 1;
        self.scopes[top].bind(name, value);
    }

    /// Bind `name` in the global scope.
    pub fn bind_global(&mut self, name: &str, value: Value) {
        self.scopes[0].bind(name, value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use lispy_value::EvalErrorKind;

    #[test]
    fn lookup_missing_is_unbound_error() {
        let env = Environment::new();
        let value = env.lookup("x");
        let err = value.as_error().unwrap();
        assert_eq!(
            err.kind,
            EvalErrorKind::UnboundSymbol {
                name: "x".to_string()
            }
        );
        assert_eq!(err.message, "unbound symbol 'x'");
    }

    #[test]
    fn builtins_are_global() {
        let env = Environment::with_builtins();
        assert_eq!(env.global().len(), Builtin::ALL.len());
        assert_eq!(env.lookup("head"), Value::builtin(Builtin::Head));
        assert_eq!(env.lookup("\\"), Value::builtin(Builtin::Lambda));
    }

    #[test]
    fn inner_scope_shadows_and_pops() {
        let mut env = Environment::new();
        env.bind("x", Value::number(1));

        let mut inner = Scope::new();
        inner.bind("x", Value::number(2));
        env.push_scope(inner);
        assert_eq!(env.depth(), 2);
        assert_eq!(env.lookup("x"), Value::number(2));

        env.bind("y", Value::number(3));
        assert!(env.current().contains("y"));
        assert!(!env.global().contains("y"));

        let popped = env.pop_scope().unwrap();
        assert_eq!(popped.len(), 2);
        assert_eq!(env.lookup("x"), Value::number(1));
    }

    #[test]
    fn global_scope_never_popped() {
        let mut env = Environment::new();
        assert!(env.pop_scope().is_none());
        assert_eq!(env.depth(), 1);
    }

    #[test]
    fn rebind_replaces_in_place() {
        let mut env = Environment::new();
        env.bind("x", Value::number(1));
        env.bind("x", Value::number(5));
        assert_eq!(env.global().len(), 1);
        assert_eq!(env.lookup("x"), Value::number(5));
    }

    #[test]
    fn clone_is_independent() {
        let mut env = Environment::new();
        env.bind("x", Value::qexpr());
        let copy = env.clone();
        env.bind("x", Value::number(9));
        assert_eq!(copy.lookup("x"), Value::qexpr());
    }

    #[test]
    fn bind_global_from_inner_scope() {
        let mut env = Environment::new();
        env.push_scope(Scope::new());
        env.bind_global("g", Value::number(1));
        env.pop_scope();
        assert_eq!(env.lookup("g"), Value::number(1));
    }
}
