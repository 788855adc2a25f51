//! Evaluation entry points for embedding
//!
//! The methods here run nodes with a default [`Interpreter`] (stdout output,
//! default depth limit). Use an interpreter directly to redirect output or
//! apply configuration.

use crate::ast::{Expr, Program, Stmt};
use crate::environment::Environment;
use crate::interpreter::Interpreter;
use crate::value::{EvalResult, Value};

impl Program {
    /// Run the program in a fresh environment that is discarded afterwards
    ///
    /// # Examples
    ///
    /// ```
    /// use treewalk_runtime::{Expr, Program, Stmt};
    ///
    /// let program = Program::new(vec![
    ///     Stmt::assign("x", Expr::num(2)),
    ///     Stmt::print(Expr::mul(Expr::name("x"), Expr::num(21))),
    /// ]);
    /// program.evaluate().unwrap();
    /// ```
    pub fn evaluate(&self) -> EvalResult<()> {
        let mut env = Environment::new();
        self.evaluate_in(&mut env)
    }

    /// Run the program against a caller-owned environment
    ///
    /// Bindings made before a failing statement remain in `env`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treewalk_runtime::{Environment, Expr, Program, Stmt, Value};
    ///
    /// let program = Program::new(vec![Stmt::parallel_assign(
    ///     ["x", "y"],
    ///     vec![Expr::name("y"), Expr::name("x")],
    /// )]);
    /// let mut env: Environment = [("x", Value::Int(1)), ("y", Value::Int(2))]
    ///     .into_iter()
    ///     .collect();
    /// program.evaluate_in(&mut env).unwrap();
    /// assert_eq!(env.get("x"), Some(&Value::Int(2)));
    /// ```
    pub fn evaluate_in(&self, env: &mut Environment) -> EvalResult<()> {
        Interpreter::new().run(self, env)
    }
}

impl Expr {
    /// Evaluate this expression; print yields `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use treewalk_runtime::{Environment, Expr, Value};
    ///
    /// let expr = Expr::add(Expr::num(10.5), Expr::num(30));
    /// assert_eq!(expr.evaluate(&mut Environment::new()), Ok(Some(Value::Float(40.5))));
    /// ```
    pub fn evaluate(&self, env: &mut Environment) -> EvalResult<Option<Value>> {
        Interpreter::new().eval(self, env)
    }
}

impl Stmt {
    /// Execute this statement
    pub fn evaluate(&self, env: &mut Environment) -> EvalResult<Option<Value>> {
        Interpreter::new().execute(self, env)
    }
}
