//! Function values: builtin primitives and user lambdas.

use std::fmt;

use crate::scope::Scope;
use crate::value::Value;

/// Formal that collects every remaining argument into the formal after it.
pub const VARIADIC_MARKER: &str = "&";

/// Callable value.
///
/// Builtins are an opaque operation id; the evaluator dispatches on it with
/// a `match`. Lambdas own their formals, body and captured scope.
#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    Builtin(Builtin),
    Lambda(Box<Lambda>),
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin(_) => f.write_str("<builtin>"),
            Function::Lambda(lambda) => write!(f, "{lambda}"),
        }
    }
}

/// Primitive operation id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Def,
    List,
    Head,
    Tail,
    Eval,
    Join,
    Add,
    Sub,
    Mul,
    Div,
    Lambda,
}

impl Builtin {
    /// Every builtin, in registration order.
    pub const ALL: [Builtin; 11] = [
        Builtin::Def,
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Lambda,
    ];

    /// The symbol this builtin is bound to in the global scope.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Def => "def",
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Lambda => "\\",
        }
    }

}

/// User-defined function.
///
/// `formals` holds the names still waiting for arguments; a partially
/// applied lambda carries the already-bound ones in `scope`.
#[derive(Clone, Debug, PartialEq)]
pub struct Lambda {
    formals: Vec<String>,
    body: Vec<Value>,
    scope: Scope,
}

impl Lambda {
    /// Create a lambda with a fresh, empty scope.
    pub fn new(formals: Vec<String>, body: Vec<Value>) -> Self {
        Self::with_scope(formals, body, Scope::new())
    }

    /// Create a lambda that has already captured `scope`.
    pub fn with_scope(formals: Vec<String>, body: Vec<Value>, scope: Scope) -> Self {
        Lambda {
            formals,
            body,
            scope,
        }
    }

    #[inline]
    pub fn formals(&self) -> &[String] {
        &self.formals
    }

    #[inline]
    pub fn body(&self) -> &[Value] {
        &self.body
    }

    #[inline]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Check that `&`, if present, is followed by exactly one formal.
    pub fn has_valid_formals(formals: &[String]) -> bool {
        match formals.iter().position(|f| f == VARIADIC_MARKER) {
            Some(pos) => pos + 2 == formals.len() && formals[pos + 1] != VARIADIC_MARKER,
            None => true,
        }
    }

    /// Number of arguments that complete this lambda, ignoring a variadic tail.
    pub fn fixed_arity(&self) -> usize {
        self.formals
            .iter()
            .position(|f| f == VARIADIC_MARKER)
            .unwrap_or(self.formals.len())
    }

    pub fn is_variadic(&self) -> bool {
        self.formals.iter().any(|f| f == VARIADIC_MARKER)
    }

    /// Move out the body and every captured value, for iterative teardown.
    pub(crate) fn take_values(&mut self) -> Vec<Value> {
        let mut values = std::mem::take(&mut self.body);
        values.extend(self.scope.take_values());
        values
    }

    /// Split into formals, body and captured scope.
    pub fn into_parts(self) -> (Vec<String>, Vec<Value>, Scope) {
        (self.formals, self.body, self.scope)
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(\\ {")?;
        f.write_str(&self.formals.join(" "))?;
        f.write_str("} ")?;
        super::write_seq(f, '{', &self.body, '}')?;
        f.write_str(")")
    }
}
