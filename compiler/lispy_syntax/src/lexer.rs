//! Logos-based tokenizer.

use std::ops::Range;

use logos::Logos;

use crate::parser::ParseError;

/// Lexical token. Literal text is recovered from the source by span.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Comments run to end of line
    #[regex(r";[^\n]*", logos::skip)]
    Comment,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Atoms
    #[regex(r"-?[0-9]+", priority = 3)]
    Number,
    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&]+")]
    Symbol,
}

/// Split `source` into tokens with their byte spans.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Range<usize>)>, ParseError> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let ch = source[span.start..].chars().next().unwrap_or('\u{FFFD}');
                return Err(ParseError::UnexpectedChar {
                    ch,
                    offset: span.start,
                });
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn delimiters_and_atoms() {
        assert_eq!(
            kinds("(+ 1 {x})"),
            vec![
                Token::LParen,
                Token::Symbol,
                Token::Number,
                Token::LBrace,
                Token::Symbol,
                Token::RBrace,
                Token::RParen,
            ]
        );
    }

    #[test]
    fn negative_number_versus_minus() {
        assert_eq!(kinds("-5"), vec![Token::Number]);
        assert_eq!(kinds("-"), vec![Token::Symbol]);
        assert_eq!(kinds("- 5"), vec![Token::Symbol, Token::Number]);
    }

    #[test]
    fn longest_match_wins() {
        assert_eq!(kinds("12abc"), vec![Token::Symbol]);
        assert_eq!(kinds("\\"), vec![Token::Symbol]);
        assert_eq!(kinds("&"), vec![Token::Symbol]);
    }

    #[test]
    fn comments_and_whitespace_skipped() {
        assert_eq!(kinds("; nothing here\n  1\t; trailing"), vec![Token::Number]);
        assert!(kinds("").is_empty());
    }

    #[test]
    fn spans_cover_source() {
        let tokens = tokenize("head {10}").unwrap();
        let spans: Vec<_> = tokens.into_iter().map(|(_, span)| span).collect();
        assert_eq!(spans, vec![0..4, 5..6, 6..8, 8..9]);
    }

    #[test]
    fn unknown_character_reported() {
        assert_eq!(
            tokenize("1 # 2"),
            Err(ParseError::UnexpectedChar { ch: '#', offset: 2 })
        );
    }
}
