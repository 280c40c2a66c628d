use super::*;
use pretty_assertions::assert_eq;

#[test]
fn factory_sets_kind_and_message() {
    let err = division_by_zero();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.message, "Division By Zero!");
}

#[test]
fn unbound_symbol_names_the_symbol() {
    let err = unbound_symbol("foo");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundSymbol {
            name: "foo".to_string()
        }
    );
    assert_eq!(err.to_string(), "unbound symbol 'foo'");
}

#[test]
fn type_mismatch_reports_argument_position() {
    let err = type_mismatch("head", 0, ValueKind::QExpr, ValueKind::Number);
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: ValueKind::QExpr,
            got: ValueKind::Number,
        }
    );
    assert_eq!(
        err.message,
        "Function 'head' passed incorrect type for argument 0. Got Number, Expected Q-Expression."
    );
}

#[test]
fn not_a_function_is_a_type_mismatch() {
    let err = not_a_function(ValueKind::Number);
    assert!(matches!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: ValueKind::Function,
            got: ValueKind::Number,
        }
    ));
    assert_eq!(
        err.message,
        "S-expression starts with incorrect type. Got Number, Expected Function."
    );
}

#[test]
fn arity_messages() {
    assert_eq!(
        arity_mismatch("tail", 1, 3).message,
        "Function 'tail' passed incorrect number of arguments. Got 3, Expected 1."
    );
    assert_eq!(
        lambda_arity_mismatch(2, 3).message,
        "Function passed too many arguments. Got 3, Expected 2."
    );
    let def = binding_count_mismatch("def", 2, 1);
    assert!(matches!(
        def.kind,
        EvalErrorKind::ArityMismatch {
            expected: 2,
            got: 1,
            ..
        }
    ));
}

#[test]
fn empty_argument_renders_braces() {
    assert_eq!(
        empty_argument("head", 0).message,
        "Function 'head' passed {} for argument 0."
    );
}

#[test]
fn invalid_number_keeps_text_out_of_message() {
    let err = invalid_number("99999999999999999999");
    assert_eq!(err.message, "invalid number");
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidNumber {
            text: "99999999999999999999".to_string()
        }
    );
}

#[test]
fn recursion_limit_mentions_limit() {
    assert_eq!(
        recursion_limit_exceeded(64).message,
        "maximum recursion depth exceeded (limit: 64)"
    );
}

#[test]
fn custom_error_round_trips_message() {
    let err = EvalError::new("something odd");
    assert_eq!(
        err.kind,
        EvalErrorKind::Custom {
            message: "something odd".to_string()
        }
    );
    assert_eq!(err.to_string(), "something odd");
}
