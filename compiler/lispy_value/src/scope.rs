//! A single binding scope: an ordered name to value table.
//!
//! Each lambda owns one `Scope` (its captured bindings), and the evaluator's
//! `Environment` is a stack of them. Bindings are always owned copies; a
//! lookup hands out a fresh deep copy, never a reference into the scope.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// A variable binding.
#[derive(Clone, Debug, PartialEq)]
struct Binding {
    name: String,
    value: Value,
}

/// Ordered name to value table with unique names.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    /// Bindings in first-definition order.
    bindings: Vec<Binding>,
    /// Position of each name in `bindings`.
    index: FxHashMap<String, usize>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Scope {
            bindings: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Look up `name`, returning a copy of the bound value.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    /// Borrow the value bound to `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&slot| &self.bindings[slot].value)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Bind `name` to `value`.
    ///
    /// An existing binding of the same name is replaced and its old value
    /// dropped; otherwise a new entry is appended. Returns `true` when an
    /// existing binding was replaced.
    pub fn bind(&mut self, name: &str, value: Value) -> bool {
        if let Some(&slot) = self.index.get(name) {
            self.bindings[slot].value = value;
            return true;
        }
        self.index.insert(name.to_string(), self.bindings.len());
        self.bindings.push(Binding {
            name: name.to_string(),
            value,
        });
        false
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Remove every binding, returning the values.
    pub(crate) fn take_values(&mut self) -> Vec<Value> {
        self.index.clear();
        self.bindings.drain(..).map(|binding| binding.value).collect()
    }

    /// Iterate over bindings in first-definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|b| (b.name.as_str(), &b.value))
    }
}

// `index` is derived from `bindings`.
impl PartialEq for Scope {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
