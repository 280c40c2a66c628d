//! Function application.

use lispy_value::{
    invalid_formals, lambda_arity_mismatch, Function, Lambda, Scope, Value, VARIADIC_MARKER,
};

use super::Interpreter;
use crate::builtins;

impl Interpreter<'_> {
    /// Apply `func` to already-reduced arguments.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn call(&mut self, func: Function, args: Vec<Value>) -> Value {
        match func {
            Function::Builtin(builtin) => builtins::dispatch(self, builtin, args),
            Function::Lambda(lambda) => self.nested(|interp| interp.call_lambda(*lambda, args)),
        }
    }

    /// Bind arguments to formals, then either return the partially applied
    /// lambda or evaluate the body with the bound scope pushed.
    fn call_lambda(&mut self, lambda: Lambda, args: Vec<Value>) -> Value {
        let given = args.len();
        let total = lambda.formals().len();
        if !lambda.is_variadic() && given > lambda.fixed_arity() {
            return Value::Error(lambda_arity_mismatch(total, given));
        }

        let (formals, body, mut scope) = lambda.into_parts();
        let mut formals = formals.into_iter();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let Some(formal) = formals.next() else {
                return Value::Error(lambda_arity_mismatch(total, given));
            };
            if formal == VARIADIC_MARKER {
                let Some(rest) = variadic_target(&mut formals) else {
                    return Value::Error(invalid_formals());
                };
                let collected = std::iter::once(arg).chain(args.by_ref()).collect();
                scope.bind(&rest, Value::QExpr(collected));
                break;
            }
            scope.bind(&formal, arg);
        }

        let mut remaining: Vec<String> = formals.collect();
        if remaining.first().is_some_and(|f| f == VARIADIC_MARKER) {
            let mut tail = remaining.drain(..).skip(1);
            let Some(rest) = variadic_target(&mut tail) else {
                return Value::Error(invalid_formals());
            };
            scope.bind(&rest, Value::qexpr());
        }

        if remaining.is_empty() {
            self.eval_body(scope, body)
        } else {
            Value::Function(Function::Lambda(Box::new(Lambda::with_scope(
                remaining, body, scope,
            ))))
        }
    }

    fn eval_body(&mut self, scope: Scope, body: Vec<Value>) -> Value {
        self.with_scope(scope, |scoped| scoped.eval(Value::SExpr(body)))
    }
}

/// The single formal after `&`, with nothing left over.
fn variadic_target(formals: &mut impl Iterator<Item = String>) -> Option<String> {
    let target = formals.next()?;
    if target == VARIADIC_MARKER || formals.next().is_some() {
        return None;
    }
    Some(target)
}
