//! Source text to tagged syntax tree.
//!
//! Nesting is tracked with an explicit stack of open groups, so arbitrarily
//! deep input never recurses on the native stack.

use crate::lexer::{tokenize, Token};
use crate::node::{tags, SyntaxNode};

/// Malformed source text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },
    #[error("unexpected '{close}' at offset {offset}")]
    UnexpectedClose { close: char, offset: usize },
    #[error("'{open}' at offset {open_offset} closed by '{close}' at offset {offset}")]
    Mismatched {
        open: char,
        open_offset: usize,
        close: char,
        offset: usize,
    },
    #[error("'{open}' at offset {offset} is never closed")]
    Unclosed { open: char, offset: usize },
}

impl ParseError {
    /// Byte offset the error points at.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedChar { offset, .. }
            | ParseError::UnexpectedClose { offset, .. }
            | ParseError::Mismatched { offset, .. }
            | ParseError::Unclosed { offset, .. } => *offset,
        }
    }
}

struct OpenGroup {
    node: SyntaxNode,
    open: char,
    offset: usize,
}

fn closer_for(open: char) -> char {
    if open == '(' {
        ')'
    } else {
        '}'
    }
}

/// Parse a whole input unit.
///
/// The root is tagged `>` and brackets the top-level expressions between two
/// `regex` anchors.
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    let tokens = tokenize(source)?;
    tracing::trace!(count = tokens.len(), "tokenized");

    let mut root = SyntaxNode::branch(tags::ROOT, vec![SyntaxNode::leaf(tags::REGEX, "")]);
    let mut stack: Vec<OpenGroup> = Vec::new();

    for (token, span) in tokens {
        let text = &source[span.clone()];
        let node = match token {
            Token::Number => SyntaxNode::leaf(tags::NUMBER, text),
            Token::Symbol => SyntaxNode::leaf(tags::SYMBOL, text),
            Token::LParen | Token::LBrace => {
                let (tag, open) = if token == Token::LParen {
                    (tags::SEXPR, '(')
                } else {
                    (tags::QEXPR, '{')
                };
                let mut node = SyntaxNode::branch(tag, Vec::new());
                node.push(SyntaxNode::leaf(tags::CHAR, text));
                stack.push(OpenGroup {
                    node,
                    open,
                    offset: span.start,
                });
                continue;
            }
            Token::RParen | Token::RBrace => {
                let close = if token == Token::RParen { ')' } else { '}' };
                let Some(mut group) = stack.pop() else {
                    return Err(ParseError::UnexpectedClose {
                        close,
                        offset: span.start,
                    });
                };
                if closer_for(group.open) != close {
                    return Err(ParseError::Mismatched {
                        open: group.open,
                        open_offset: group.offset,
                        close,
                        offset: span.start,
                    });
                }
                group.node.push(SyntaxNode::leaf(tags::CHAR, text));
                group.node
            }
            // Skipped by the lexer.
            Token::Comment => continue,
        };
        match stack.last_mut() {
            Some(parent) => parent.node.push(node),
            None => root.push(node),
        }
    }

    if let Some(group) = stack.into_iter().next() {
        return Err(ParseError::Unclosed {
            open: group.open,
            offset: group.offset,
        });
    }

    root.push(SyntaxNode::leaf(tags::REGEX, ""));
    Ok(root)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
