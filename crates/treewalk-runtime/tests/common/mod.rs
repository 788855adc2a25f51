//! Shared test utilities for treewalk runtime tests

#![allow(dead_code)]

use treewalk_runtime::{
    capture_writer, Environment, EvalResult, Expr, Interpreter, Program, Stmt, Value,
};

/// Outcome of a captured run
pub struct Run {
    pub result: EvalResult<()>,
    pub env: Environment,
    pub output: Vec<String>,
}

/// Run statements against `env`, capturing printed lines
pub fn run_in(env: Environment, body: Vec<Stmt>) -> Run {
    let (writer, captured) = capture_writer();
    let mut interp = Interpreter::new();
    interp.set_output_writer(writer);

    let mut env = env;
    let result = interp.run(&Program::new(body), &mut env);
    Run {
        result,
        env,
        output: captured.lines(),
    }
}

/// Run statements in an empty environment, capturing printed lines
pub fn run(body: Vec<Stmt>) -> Run {
    run_in(Environment::new(), body)
}

/// Evaluate one expression against `env`, expecting a value
pub fn eval_in(env: &mut Environment, expr: &Expr) -> Value {
    let (writer, _) = capture_writer();
    let mut interp = Interpreter::new();
    interp.set_output_writer(writer);
    match interp.eval(expr, env) {
        Ok(Some(value)) => value,
        other => panic!("Expected a value from {}, got {:?}", expr, other),
    }
}

/// Evaluate one expression in an empty environment, expecting a value
pub fn eval(expr: &Expr) -> Value {
    eval_in(&mut Environment::new(), expr)
}

/// Build an environment from integer bindings
pub fn int_env(bindings: &[(&str, i64)]) -> Environment {
    bindings
        .iter()
        .map(|(name, value)| (*name, Value::Int(*value)))
        .collect()
}
