use super::*;

/// A toy nested list, shaped like an S-expression tree.
enum Nested {
    Leaf(i64),
    List(Vec<Nested>),
}

impl Drop for Nested {
    fn drop(&mut self) {
        if let Nested::List(items) = self {
            let mut pending = std::mem::take(items);
            while let Some(mut node) = pending.pop() {
                if let Nested::List(children) = &mut node {
                    pending.append(children);
                }
            }
        }
    }
}

fn build(depth: usize) -> Nested {
    let mut node = Nested::Leaf(1);
    for _ in 0..depth {
        node = Nested::List(vec![node]);
    }
    node
}

fn sum(node: &Nested) -> i64 {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf(n) => *n,
        Nested::List(items) => items.iter().map(sum).sum(),
    })
}

fn depth_of(node: &Nested) -> usize {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf(_) => 0,
        Nested::List(items) => 1 + items.iter().map(depth_of).max().unwrap_or(0),
    })
}

#[test]
fn shallow_tree_walk() {
    let tree = Nested::List(vec![Nested::Leaf(2), Nested::Leaf(3), build(3)]);
    assert_eq!(sum(&tree), 6);
    assert_eq!(depth_of(&tree), 4);
}

#[test]
fn deep_tree_walk_does_not_overflow() {
    // Far deeper than a default 8 MiB stack allows without growth.
    let tree = build(100_000);
    assert_eq!(depth_of(&tree), 100_000);
    assert_eq!(sum(&tree), 1);
}

#[test]
fn passes_result_through() {
    let ok: Result<i64, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(ok, Ok(7));
    assert_eq!(ensure_sufficient_stack(|| "value"), "value");
}
