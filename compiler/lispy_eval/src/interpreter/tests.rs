use pretty_assertions::assert_eq;

use super::*;
use lispy_value::{Builtin, EvalErrorKind, Function, Lambda, Scope};

fn sexpr(items: Vec<Value>) -> Value {
    Value::SExpr(items)
}

#[test]
fn self_evaluating_values() {
    let mut env = Environment::with_builtins();
    let mut interp = Interpreter::new(&mut env);
    for value in [
        Value::number(3),
        Value::error_msg("boom"),
        Value::QExpr(vec![Value::symbol("x")]),
        Value::builtin(Builtin::Head),
        Value::lambda(vec!["x".to_string()], vec![Value::symbol("x")]),
    ] {
        assert_eq!(interp.eval(value.clone()), value);
    }
    assert_eq!(interp.depth(), 0);
}

#[test]
fn empty_and_single_sexpr() {
    let mut env = Environment::with_builtins();
    let mut interp = Interpreter::new(&mut env);
    assert_eq!(interp.eval(Value::sexpr()), Value::sexpr());
    assert_eq!(interp.eval(sexpr(vec![Value::number(5)])), Value::number(5));
    assert_eq!(
        interp.eval(sexpr(vec![Value::symbol("+")])),
        Value::builtin(Builtin::Add)
    );
}

#[test]
fn head_must_be_a_function() {
    let mut env = Environment::with_builtins();
    let mut interp = Interpreter::new(&mut env);
    let result = interp.eval(sexpr(vec![Value::number(1), Value::number(2)]));
    assert_eq!(
        result.to_string(),
        "Error: S-expression starts with incorrect type. Got Number, Expected Function."
    );
}

#[test]
fn builder_sets_depth() {
    let mut env = Environment::new();
    let interp = Interpreter::builder(&mut env).max_depth(3).build();
    assert_eq!(interp.config().max_depth, 3);

    let mut env = Environment::new();
    let interp = Interpreter::builder(&mut env)
        .config(EvalConfig { max_depth: 9 })
        .build();
    assert_eq!(interp.config().max_depth, 9);
}

#[test]
fn nesting_past_limit_is_error() {
    let mut env = Environment::with_builtins();
    let mut interp = Interpreter::builder(&mut env).max_depth(4).build();

    let mut value = Value::number(1);
    for _ in 0..10 {
        value = sexpr(vec![value]);
    }
    let result = interp.eval(value);
    assert_eq!(
        result.as_error().map(|e| &e.kind),
        Some(&EvalErrorKind::RecursionLimit { limit: 4 })
    );
    assert_eq!(interp.depth(), 0);
}

#[test]
fn scope_guard_pops_on_drop() {
    let mut env = Environment::new();
    let mut interp = Interpreter::new(&mut env);
    let mut scope = Scope::new();
    scope.bind("x", Value::number(1));
    {
        let scoped = interp.scoped(scope);
        assert_eq!(scoped.env().depth(), 2);
        assert_eq!(scoped.env().lookup("x"), Value::number(1));
    }
    assert_eq!(interp.env().depth(), 1);
}

#[test]
fn call_lambda_directly() {
    let mut env = Environment::with_builtins();
    let mut interp = Interpreter::new(&mut env);
    let lambda = Lambda::new(
        vec!["a".to_string(), "b".to_string()],
        vec![Value::symbol("-"), Value::symbol("a"), Value::symbol("b")],
    );
    let result = interp.call(
        Function::Lambda(Box::new(lambda)),
        vec![Value::number(10), Value::number(4)],
    );
    assert_eq!(result, Value::number(6));
    assert_eq!(interp.env().depth(), 1);
}

#[test]
fn partial_application_keeps_bound_formals() {
    let mut env = Environment::with_builtins();
    let mut interp = Interpreter::new(&mut env);
    let lambda = Lambda::new(
        vec!["a".to_string(), "b".to_string()],
        vec![Value::symbol("+"), Value::symbol("a"), Value::symbol("b")],
    );
    let partial = interp.call(Function::Lambda(Box::new(lambda)), vec![Value::number(1)]);
    let Ok(Function::Lambda(partial)) = partial.into_function() else {
        panic!("expected a partially applied lambda");
    };
    assert_eq!(partial.formals(), ["b".to_string()]);
    assert_eq!(partial.scope().lookup("a"), Some(Value::number(1)));
}
