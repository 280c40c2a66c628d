//! Syntax tree to value conversion.

use lispy_stack::ensure_sufficient_stack;
use lispy_syntax::{tags, AstNode};
use lispy_value::{invalid_number, invalid_syntax, Value};

/// Children whose text is one of these carry no value.
const DELIMITERS: [&str; 4] = ["(", ")", "{", "}"];

/// Build the value tree for `node`.
///
/// Never fails outright: a malformed number or an unknown tag becomes an
/// error value in place and the rest of the tree is still read.
pub fn read<N: AstNode>(node: &N) -> Value {
    let tag = node.tag();
    if tag.contains("number") {
        return read_number(node.text());
    }
    if tag.contains("symbol") {
        return Value::symbol(node.text());
    }

    let list = if tag == tags::ROOT || tag.contains("sexpr") {
        Value::SExpr(Vec::new())
    } else if tag.contains("qexpr") {
        Value::QExpr(Vec::new())
    } else {
        return Value::Error(invalid_syntax(tag));
    };

    ensure_sufficient_stack(|| {
        let items: Vec<Value> = node
            .children()
            .iter()
            .filter(|child| !DELIMITERS.contains(&child.text()) && child.tag() != tags::REGEX)
            .map(read)
            .collect();
        match list {
            Value::QExpr(_) => Value::QExpr(items),
            _ => Value::SExpr(items),
        }
    })
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(_) => Value::Error(invalid_number(text)),
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
    use lispy_syntax::{parse, SyntaxNode};
    use lispy_value::EvalErrorKind;

    fn read_str(source: &str) -> Value {
        read(&parse(source).unwrap())
    }

    #[test]
    fn root_reads_as_sexpr() {
        assert_eq!(
            read_str("+ 1 2"),
            Value::SExpr(vec![Value::symbol("+"), Value::number(1), Value::number(2)])
        );
        assert_eq!(read_str(""), Value::sexpr());
    }

    #[test]
    fn nested_groups() {
        let value = read_str("(eval {head (list 1 -2)})");
        assert_eq!(value.to_string(), "((eval {head (list 1 -2)}))");
    }

    #[test]
    fn number_out_of_range_is_error_in_place() {
        let value = read_str("+ 1 99999999999999999999 2");
        let items = value.items().unwrap();
        assert_eq!(items.len(), 4);
        assert!(matches!(
            items[2].as_error().map(|e| &e.kind),
            Some(EvalErrorKind::InvalidNumber { .. })
        ));
        assert_eq!(items[2].to_string(), "Error: invalid number");
        assert_eq!(items[3], Value::number(2));
    }

    #[test]
    fn unknown_tag_is_invalid_syntax() {
        let node = SyntaxNode::leaf("string", "\"hi\"");
        let value = read(&node);
        assert_eq!(value.to_string(), "Error: unrecognised syntax node 'string'");
    }

    #[test]
    fn hand_built_tree_without_parser() {
        let node = SyntaxNode::branch(
            "expr|qexpr",
            vec![
                SyntaxNode::leaf("char", "{"),
                SyntaxNode::leaf("expr|symbol|regex", "x"),
                SyntaxNode::leaf("regex", ""),
                SyntaxNode::leaf("char", "}"),
            ],
        );
        assert_eq!(read(&node), Value::QExpr(vec![Value::symbol("x")]));
    }

    #[test]
    fn reading_does_not_mutate_the_tree() {
        let tree = parse("{1 2}").unwrap();
        let before = tree.clone();
        let _ = read(&tree);
        assert_eq!(tree, before);
    }
}
