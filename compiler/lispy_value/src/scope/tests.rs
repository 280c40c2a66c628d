use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_scope_bind_lookup() {
    let mut scope = Scope::new();
    scope.bind("x", Value::number(42));
    assert_eq!(scope.lookup("x"), Some(Value::number(42)));
    assert_eq!(scope.lookup("y"), None);
}

#[test]
fn test_scope_rebind_replaces_in_place() {
    let mut scope = Scope::new();
    assert!(!scope.bind("x", Value::number(5)));
    assert!(!scope.bind("y", Value::number(1)));
    assert!(scope.bind("x", Value::number(6)));

    assert_eq!(scope.len(), 2);
    assert_eq!(scope.lookup("x"), Some(Value::number(6)));
    let names: Vec<&str> = scope.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn test_scope_lookup_is_a_copy() {
    let mut scope = Scope::new();
    scope.bind("xs", Value::QExpr(vec![Value::number(1), Value::number(2)]));

    let mut copy = scope.lookup("xs").unwrap();
    copy.append(Value::number(3)).unwrap();

    assert_eq!(scope.get("xs").and_then(Value::items).map(<[Value]>::len), Some(2));
    assert_eq!(copy.items().map(<[Value]>::len), Some(3));
}

#[test]
fn test_take_values_empties_scope() {
    let mut scope = Scope::new();
    scope.bind("a", Value::number(1));
    scope.bind("b", Value::symbol("b"));
    assert_eq!(
        scope.take_values(),
        vec![Value::number(1), Value::symbol("b")]
    );
    assert!(scope.is_empty());
    assert!(!scope.contains("a"));
}

#[test]
fn test_scope_clone_is_independent() {
    let mut scope = Scope::new();
    scope.bind("x", Value::number(1));

    let mut dup = scope.clone();
    dup.bind("x", Value::number(2));
    dup.bind("z", Value::number(3));

    assert_eq!(scope.lookup("x"), Some(Value::number(1)));
    assert!(!scope.contains("z"));
    assert_eq!(dup.lookup("x"), Some(Value::number(2)));
}

#[test]
fn test_scope_equality_ignores_index_layout() {
    let mut a = Scope::new();
    a.bind("x", Value::number(1));
    let mut b = Scope::new();
    b.bind("x", Value::number(0));
    assert_ne!(a, b);
    b.bind("x", Value::number(1));
    assert_eq!(a, b);
}

#[test]
fn test_empty_scope() {
    let scope = Scope::default();
    assert!(scope.is_empty());
    assert_eq!(scope.iter().count(), 0);
}
