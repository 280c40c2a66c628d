//! Lispy Syntax - the tagged syntax tree the reader consumes, and a parser
//! that produces it.
//!
//! # Tree shape
//!
//! Trees follow the shape of a parser-combinator AST: every node carries a
//! `tag`, the literal `text` it matched, and ordered `children`. The reader
//! only ever inspects those three things through [`AstNode`], so any parser
//! producing the same tags can be plugged in.
//!
//! ```text
//! "+ 1 {2}"
//!
//! >
//! ├── regex
//! ├── expr|symbol|regex  "+"
//! ├── expr|number|regex  "1"
//! ├── expr|qexpr
//! │   ├── char  "{"
//! │   ├── expr|number|regex  "2"
//! │   └── char  "}"
//! └── regex
//! ```

mod lexer;
mod node;
mod parser;

pub use lexer::{tokenize, Token};
pub use node::{tags, AstNode, SyntaxNode};
pub use parser::{parse, ParseError};
