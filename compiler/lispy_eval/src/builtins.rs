//! Primitive operations bound in the global scope.
//!
//! Each builtin takes ownership of its reduced arguments and returns exactly
//! one value. Validation happens before any effect, so a failed check leaves
//! the environment untouched.

use lispy_value::{
    arity_mismatch, binding_count_mismatch, division_by_zero, empty_argument, integer_overflow,
    invalid_formals, non_symbol_formal, type_mismatch, Builtin, EvalError, Lambda, Value,
    ValueKind,
};

use crate::Interpreter;

type BuiltinResult = Result<Value, EvalError>;

/// Run `builtin` on `args`, turning a failed check into an error value.
pub(crate) fn dispatch(interp: &mut Interpreter<'_>, builtin: Builtin, args: Vec<Value>) -> Value {
    let result = match builtin {
        Builtin::List => Ok(Value::QExpr(args)),
        Builtin::Head => head(args),
        Builtin::Tail => tail(args),
        Builtin::Eval => eval(interp, args),
        Builtin::Join => join(args),
        Builtin::Add => arithmetic(builtin, add, args),
        Builtin::Sub => arithmetic(builtin, sub, args),
        Builtin::Mul => arithmetic(builtin, mul, args),
        Builtin::Div => arithmetic(builtin, div, args),
        Builtin::Def => def(interp, args),
        Builtin::Lambda => lambda(args),
    };
    result.unwrap_or_else(Value::Error)
}

// Argument checks

fn check_arity(function: Builtin, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(arity_mismatch(function.name(), expected, args.len()))
    }
}

fn check_kind(
    function: Builtin,
    index: usize,
    arg: &Value,
    expected: ValueKind,
) -> Result<(), EvalError> {
    let got = arg.kind();
    if got == expected {
        Ok(())
    } else {
        Err(type_mismatch(function.name(), index, expected, got))
    }
}

/// Unwrap the items of a Q-expression argument.
fn qexpr_items(function: Builtin, index: usize, arg: Value) -> Result<Vec<Value>, EvalError> {
    check_kind(function, index, &arg, ValueKind::QExpr)?;
    arg.into_items()
        .map_err(|other| type_mismatch(function.name(), index, ValueKind::QExpr, other.kind()))
}

/// The single argument of a one-argument builtin.
fn single(function: Builtin, args: Vec<Value>) -> Result<Value, EvalError> {
    check_arity(function, &args, 1)?;
    args.into_iter()
        .next()
        .ok_or_else(|| arity_mismatch(function.name(), 1, 0))
}

/// Collect symbol names, rejecting anything else.
fn symbol_names(function: Builtin, items: Vec<Value>) -> Result<Vec<String>, EvalError> {
    items
        .into_iter()
        .map(|item| {
            item.into_symbol()
                .map_err(|other| non_symbol_formal(function.name(), other.kind()))
        })
        .collect()
}

// List operations

fn head(args: Vec<Value>) -> BuiltinResult {
    let mut items = qexpr_items(Builtin::Head, 0, single(Builtin::Head, args)?)?;
    if items.is_empty() {
        return Err(empty_argument(Builtin::Head.name(), 0));
    }
    items.truncate(1);
    Ok(Value::QExpr(items))
}

fn tail(args: Vec<Value>) -> BuiltinResult {
    let mut items = qexpr_items(Builtin::Tail, 0, single(Builtin::Tail, args)?)?;
    if items.is_empty() {
        return Err(empty_argument(Builtin::Tail.name(), 0));
    }
    items.remove(0);
    Ok(Value::QExpr(items))
}

#[tracing::instrument(level = "debug", skip_all)]
fn eval(interp: &mut Interpreter<'_>, args: Vec<Value>) -> BuiltinResult {
    let items = qexpr_items(Builtin::Eval, 0, single(Builtin::Eval, args)?)?;
    Ok(interp.eval(Value::SExpr(items)))
}

fn join(args: Vec<Value>) -> BuiltinResult {
    for (index, arg) in args.iter().enumerate() {
        check_kind(Builtin::Join, index, arg, ValueKind::QExpr)?;
    }
    let mut joined = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        joined.extend(qexpr_items(Builtin::Join, index, arg)?);
    }
    Ok(Value::QExpr(joined))
}

// Arithmetic

type Step = fn(i64, i64) -> Result<i64, EvalError>;

fn add(x: i64, y: i64) -> Result<i64, EvalError> {
    x.checked_add(y).ok_or_else(|| integer_overflow(Builtin::Add.name()))
}

fn sub(x: i64, y: i64) -> Result<i64, EvalError> {
    x.checked_sub(y).ok_or_else(|| integer_overflow(Builtin::Sub.name()))
}

fn mul(x: i64, y: i64) -> Result<i64, EvalError> {
    x.checked_mul(y).ok_or_else(|| integer_overflow(Builtin::Mul.name()))
}

fn div(x: i64, y: i64) -> Result<i64, EvalError> {
    if y == 0 {
        return Err(division_by_zero());
    }
    // i64::MIN / -1
    x.checked_div(y).ok_or_else(|| integer_overflow(Builtin::Div.name()))
}

/// Left fold of `step` over all-number arguments. Unary `-` negates.
fn arithmetic(op: Builtin, step: Step, args: Vec<Value>) -> BuiltinResult {
    let name = op.name();
    let mut numbers = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        match arg.as_number() {
            Some(n) => numbers.push(n),
            None => return Err(type_mismatch(name, index, ValueKind::Number, arg.kind())),
        }
    }

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(arity_mismatch(name, 1, 0));
    };

    if op == Builtin::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| integer_overflow(name));
    }

    rest.iter()
        .try_fold(first, |acc, &y| step(acc, y))
        .map(Value::Number)
}

// Definitions

fn def(interp: &mut Interpreter<'_>, args: Vec<Value>) -> BuiltinResult {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Err(arity_mismatch(Builtin::Def.name(), 1, 0));
    };
    let symbols = symbol_names(Builtin::Def, qexpr_items(Builtin::Def, 0, first)?)?;
    let values: Vec<Value> = args.collect();
    if symbols.len() != values.len() {
        return Err(binding_count_mismatch(
            Builtin::Def.name(),
            symbols.len(),
            values.len(),
        ));
    }

    for (name, value) in symbols.iter().zip(values) {
        tracing::debug!(symbol = %name, "def");
        interp.env_mut().bind(name, value);
    }
    Ok(Value::sexpr())
}

fn lambda(args: Vec<Value>) -> BuiltinResult {
    check_arity(Builtin::Lambda, &args, 2)?;
    for (index, arg) in args.iter().enumerate() {
        check_kind(Builtin::Lambda, index, arg, ValueKind::QExpr)?;
    }
    let mut args = args.into_iter();
    let (Some(formals), Some(body)) = (args.next(), args.next()) else {
        return Err(arity_mismatch(Builtin::Lambda.name(), 2, 0));
    };
    let formals = symbol_names(Builtin::Lambda, qexpr_items(Builtin::Lambda, 0, formals)?)?;
    if !Lambda::has_valid_formals(&formals) {
        return Err(invalid_formals());
    }
    let body = qexpr_items(Builtin::Lambda, 1, body)?;
    Ok(Value::lambda(formals, body))
}
