use pretty_assertions::assert_eq;

use super::*;
use crate::node::AstNode;

fn tags_of(node: &SyntaxNode) -> Vec<&str> {
    node.children().iter().map(AstNode::tag).collect()
}

#[test]
fn empty_input_has_only_anchors() {
    let root = parse("").unwrap();
    assert_eq!(root.tag(), tags::ROOT);
    assert_eq!(tags_of(&root), vec![tags::REGEX, tags::REGEX]);
}

#[test]
fn top_level_atoms() {
    let root = parse("+ 1 -2").unwrap();
    assert_eq!(
        tags_of(&root),
        vec![
            tags::REGEX,
            tags::SYMBOL,
            tags::NUMBER,
            tags::NUMBER,
            tags::REGEX
        ]
    );
    let texts: Vec<&str> = root.children().iter().map(AstNode::text).collect();
    assert_eq!(texts, vec!["", "+", "1", "-2", ""]);
}

#[test]
fn groups_keep_delimiters() {
    let root = parse("(head {1 2})").unwrap();
    let sexpr = &root.children()[1];
    assert_eq!(sexpr.tag(), tags::SEXPR);
    assert_eq!(
        tags_of(sexpr),
        vec![tags::CHAR, tags::SYMBOL, tags::QEXPR, tags::CHAR]
    );
    assert_eq!(sexpr.children()[0].text(), "(");
    assert_eq!(sexpr.children()[3].text(), ")");

    let qexpr = &sexpr.children()[2];
    assert_eq!(
        tags_of(qexpr),
        vec![tags::CHAR, tags::NUMBER, tags::NUMBER, tags::CHAR]
    );
    assert_eq!(qexpr.children()[0].text(), "{");
    assert_eq!(qexpr.children()[3].text(), "}");
}

#[test]
fn deep_nesting_does_not_recurse() {
    let depth = 200_000;
    let source = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
    let root = parse(&source).unwrap();
    assert_eq!(root.children().len(), 3);

    let mut node = &root.children()[1];
    let mut seen = 1;
    while node.children().len() == 3 {
        node = &node.children()[1];
        seen += 1;
    }
    assert_eq!(seen, depth);
}

#[test]
fn deep_tree_clones_and_compares() {
    let depth = 200_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let root = parse(&source).unwrap();
    let copy = root.clone();
    assert!(copy == root);
    drop(root);
    assert_eq!(copy.children().len(), 3);
}

#[test]
fn unexpected_close() {
    assert_eq!(
        parse("1 )"),
        Err(ParseError::UnexpectedClose {
            close: ')',
            offset: 2
        })
    );
}

#[test]
fn mismatched_delimiter() {
    let err = parse("(1 }").unwrap_err();
    assert_eq!(
        err,
        ParseError::Mismatched {
            open: '(',
            open_offset: 0,
            close: '}',
            offset: 3
        }
    );
    assert_eq!(err.offset(), 3);
}

#[test]
fn unclosed_reports_outermost_group() {
    assert_eq!(
        parse("1 ({2"),
        Err(ParseError::Unclosed {
            open: '(',
            offset: 2
        })
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        parse("{").unwrap_err().to_string(),
        "'{' at offset 0 is never closed"
    );
    assert_eq!(
        parse("$").unwrap_err().to_string(),
        "unexpected character '$' at offset 0"
    );
}

#[test]
fn display_dumps_tree() {
    let root = parse("{1}").unwrap();
    assert_eq!(
        root.to_string(),
        ">\n  regex\n  expr|qexpr\n    char '{'\n    expr|number|regex '1'\n    char '}'\n  regex\n"
    );
}
