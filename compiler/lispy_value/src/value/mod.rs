//! Runtime values for the Lispy evaluator.
//!
//! # Construction
//!
//! ```text
//! let n = Value::number(42);
//! let s = Value::symbol("head");
//! let mut q = Value::qexpr();
//! q.append(Value::number(1))?;
//! ```
//!
//! # Rendering
//!
//! `Display` produces the canonical textual form printed for each top-level
//! input: `42`, `Error: <message>`, `head`, `(+ 1 2)`, `{1 2}`,
//! `(\ {a b} {+ a b})` and `<builtin>`.

mod function;

use std::fmt;

use lispy_stack::ensure_sufficient_stack;

use crate::errors::EvalError;

pub use function::{Builtin, Function, Lambda, VARIADIC_MARKER};

/// Runtime value.
///
/// `Clone`, `PartialEq` and `Drop` are written by hand so that arbitrarily
/// deep trees neither clone, compare nor drop through unbounded native
/// recursion.
#[derive(Debug)]
pub enum Value {
    /// Signed integer.
    Number(i64),
    /// First-class error value.
    Error(EvalError),
    /// Name resolved against the environment during evaluation.
    Symbol(String),
    /// Builtin primitive or user lambda.
    Function(Function),
    /// Active expression: evaluated by applying its head to its tail.
    SExpr(Vec<Value>),
    /// Quoted list: never evaluated on its own.
    QExpr(Vec<Value>),
}

/// The tag of a [`Value`], used for type checks and error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Error,
    Symbol,
    Function,
    SExpr,
    QExpr,
}

impl ValueKind {
    /// Type name as shown in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "Number",
            ValueKind::Error => "Error",
            ValueKind::Symbol => "Symbol",
            ValueKind::Function => "Function",
            ValueKind::SExpr => "S-Expression",
            ValueKind::QExpr => "Q-Expression",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural misuse of the list helpers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("expected S-Expression or Q-Expression, got {0}")]
    NotAList(ValueKind),
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

// Factory Methods

impl Value {
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn error(err: EvalError) -> Self {
        Value::Error(err)
    }

    /// Create a free-form error value.
    #[inline]
    pub fn error_msg(message: impl Into<String>) -> Self {
        Value::Error(EvalError::new(message))
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn builtin(builtin: Builtin) -> Self {
        Value::Function(Function::Builtin(builtin))
    }

    /// Create a lambda with a fresh, empty captured scope.
    pub fn lambda(formals: Vec<String>, body: Vec<Value>) -> Self {
        Value::Function(Function::Lambda(Box::new(Lambda::new(formals, body))))
    }

    /// Create an empty S-expression.
    #[inline]
    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Create an empty Q-expression.
    #[inline]
    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }
}

// Queries

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Error(_) => ValueKind::Error,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Function(_) => ValueKind::Function,
            Value::SExpr(_) => ValueKind::SExpr,
            Value::QExpr(_) => ValueKind::QExpr,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name.as_str()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Children of an S- or Q-expression.
    pub fn items(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Take ownership of the children of an S- or Q-expression.
    ///
    /// Returns the value unchanged in `Err` if it is not a list.
    pub fn into_items(mut self) -> Result<Vec<Value>, Value> {
        if let Value::SExpr(items) | Value::QExpr(items) = &mut self {
            return Ok(std::mem::take(items));
        }
        Err(self)
    }

    /// Take ownership of a symbol's name.
    pub fn into_symbol(mut self) -> Result<String, Value> {
        if let Value::Symbol(name) = &mut self {
            return Ok(std::mem::take(name));
        }
        Err(self)
    }

    /// Take ownership of a function.
    pub fn into_function(mut self) -> Result<Function, Value> {
        if let Value::Function(func) = &mut self {
            // The emptied shell is dropped on return.
            return Ok(std::mem::replace(func, Function::Builtin(Builtin::List)));
        }
        Err(self)
    }
}

// List Surgery

impl Value {
    fn items_mut(&mut self) -> Result<&mut Vec<Value>, ListError> {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => Ok(items),
            other => Err(ListError::NotAList(other.kind())),
        }
    }

    /// Add `value` to the end of this list.
    pub fn append(&mut self, value: Value) -> Result<(), ListError> {
        self.items_mut()?.push(value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements left.
    pub fn pop_at(&mut self, index: usize) -> Result<Value, ListError> {
        let items = self.items_mut()?;
        if index >= items.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        Ok(items.remove(index))
    }

    /// Remove the element at `index` and drop the rest of the list.
    pub fn take_at(mut self, index: usize) -> Result<Value, ListError> {
        self.pop_at(index)
    }
}

// Deep Copy, Equality, Teardown

impl Value {
    /// Detach every value directly owned by this one, leaving it shallow.
    fn take_children(&mut self) -> Vec<Value> {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => std::mem::take(items),
            Value::Function(Function::Lambda(lambda)) => lambda.take_values(),
            Value::Number(_) | Value::Error(_) | Value::Symbol(_) | Value::Function(_) => {
                Vec::new()
            }
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Number(n) => Value::Number(*n),
            Value::Error(err) => Value::Error(err.clone()),
            Value::Symbol(name) => Value::Symbol(name.clone()),
            Value::Function(func) => Value::Function(ensure_sufficient_stack(|| func.clone())),
            Value::SExpr(items) => Value::SExpr(ensure_sufficient_stack(|| items.clone())),
            Value::QExpr(items) => Value::QExpr(ensure_sufficient_stack(|| items.clone())),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => ensure_sufficient_stack(|| a == b),
            (Value::SExpr(a), Value::SExpr(b)) | (Value::QExpr(a), Value::QExpr(b)) => {
                ensure_sufficient_stack(|| a == b)
            }
            _ => false,
        }
    }
}

impl Drop for Value {
    /// Tears the tree down with a heap worklist instead of recursion.
    fn drop(&mut self) {
        let mut pending = self.take_children();
        while let Some(mut value) = pending.pop() {
            pending.append(&mut value.take_children());
        }
    }
}

// Rendering

fn write_seq(f: &mut fmt::Formatter<'_>, open: char, items: &[Value], close: char) -> fmt::Result {
    ensure_sufficient_stack(|| {
        write!(f, "{open}")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "{close}")
    })
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(err) => write!(f, "Error: {}", err.message),
            Value::Symbol(name) => f.write_str(name),
            Value::Function(func) => write!(f, "{func}"),
            Value::SExpr(items) => write_seq(f, '(', items, ')'),
            Value::QExpr(items) => write_seq(f, '{', items, '}'),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
