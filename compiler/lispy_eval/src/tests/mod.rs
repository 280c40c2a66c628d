//! End-to-end evaluation scenarios: source text in, rendered result out.


use lispy_syntax::parse;

use crate::{read, Environment, Interpreter, Value};

/// Parse, read and evaluate one input unit.
pub(crate) fn eval_in(env: &mut Environment, source: &str) -> Value {
    let tree = parse(source).unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"));
    Interpreter::new(env).eval(read(&tree))
}

/// Evaluate each line in a fresh environment, returning the last rendering.
pub(crate) fn run(lines: &[&str]) -> String {
    let mut env = Environment::with_builtins();
    run_in(&mut env, lines)
}

pub(crate) fn run_in(env: &mut Environment, lines: &[&str]) -> String {
    let mut last = String::new();
    for line in lines {
        last = eval_in(env, line).to_string();
    }
    last
}
