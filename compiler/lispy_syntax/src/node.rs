//! Syntax tree nodes.

use std::fmt;

use lispy_stack::ensure_sufficient_stack;

/// Tags attached to syntax nodes.
pub mod tags {
    /// The whole input.
    pub const ROOT: &str = ">";
    pub const NUMBER: &str = "expr|number|regex";
    pub const SYMBOL: &str = "expr|symbol|regex";
    pub const SEXPR: &str = "expr|sexpr";
    pub const QEXPR: &str = "expr|qexpr";
    /// A delimiter: `(`, `)`, `{` or `}`.
    pub const CHAR: &str = "char";
    /// Raw matched text with no meaning of its own (input anchors).
    pub const REGEX: &str = "regex";
}

/// Read-only view of a syntax node.
pub trait AstNode {
    fn tag(&self) -> &str;
    fn text(&self) -> &str;
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

/// Owned syntax node produced by [`crate::parse`].
///
/// Parsing is iterative, so trees may be far deeper than the native stack.
/// Teardown uses a worklist; `Clone` and `PartialEq` grow the stack as needed.
#[derive(Debug)]
pub struct SyntaxNode {
    tag: String,
    text: String,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// A node with text and no children.
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        SyntaxNode {
            tag: tag.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// A node with children and no text.
    pub fn branch(tag: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode {
            tag: tag.into(),
            text: String::new(),
            children,
        }
    }

    pub(crate) fn push(&mut self, child: SyntaxNode) {
        self.children.push(child);
    }
}

impl Clone for SyntaxNode {
    fn clone(&self) -> Self {
        SyntaxNode {
            tag: self.tag.clone(),
            text: self.text.clone(),
            children: ensure_sufficient_stack(|| self.children.clone()),
        }
    }
}

impl PartialEq for SyntaxNode {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.text == other.text
            && ensure_sufficient_stack(|| self.children == other.children)
    }
}

impl Eq for SyntaxNode {}

impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl AstNode for SyntaxNode {
    #[inline]
    fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    fn children(&self) -> &[SyntaxNode] {
        &self.children
    }
}

impl fmt::Display for SyntaxNode {
    /// Indented tree dump, one node per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn dump(node: &SyntaxNode, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:indent$}{}", "", node.tag, indent = depth * 2)?;
            if !node.text.is_empty() {
                write!(f, " '{}'", node.text)?;
            }
            writeln!(f)?;
            ensure_sufficient_stack(|| {
                node.children
                    .iter()
                    .try_for_each(|child| dump(child, depth + 1, f))
            })
        }
        dump(self, 0, f)
    }
}
