//! Statement execution

use crate::ast::*;
use crate::environment::Environment;
use crate::interpreter::{range_bounds, Interpreter};
use crate::value::{EvalResult, RuntimeError, Value};

impl Interpreter {
    /// Execute a statement; expression statements yield their value
    pub fn execute(&mut self, stmt: &Stmt, env: &mut Environment) -> EvalResult<Option<Value>> {
        self.enter()?;
        let result = self.eval_statement(stmt, env);
        self.leave();
        result
    }

    fn eval_statement(&mut self, stmt: &Stmt, env: &mut Environment) -> EvalResult<Option<Value>> {
        match stmt {
            Stmt::Expr(expr) => return self.eval(expr, env),
            Stmt::Assign(assign) => self.eval_assign(assign, env)?,
            Stmt::ParallelAssign(assign) => self.eval_parallel_assign(assign, env)?,
            Stmt::If(if_stmt) => self.eval_if(if_stmt, env)?,
            Stmt::IfElifElse(stmt) => self.eval_if_elif_else(stmt, env)?,
            Stmt::ForRange(for_range) => self.eval_for_range(for_range, env)?,
        }
        Ok(None)
    }

    /// Execute a statement sequence in order
    pub(super) fn exec_block(&mut self, body: &[Stmt], env: &mut Environment) -> EvalResult<()> {
        for stmt in body {
            if self.trace {
                tracing::debug!(source = %stmt, "executing statement");
            } else {
                tracing::trace!(kind = stmt.kind(), "executing statement");
            }
            self.execute(stmt, env)?;
        }
        Ok(())
    }

    /// Evaluate an assignment
    fn eval_assign(&mut self, assign: &Assign, env: &mut Environment) -> EvalResult<()> {
        let value = self.eval_value(&assign.value, env, "assigned value")?;
        env.bind(assign.target.as_str(), value);
        Ok(())
    }

    /// Evaluate a parallel assignment
    ///
    /// Every value is computed against the environment as it was before the
    /// statement, and only then are the targets bound.
    fn eval_parallel_assign(
        &mut self,
        assign: &ParallelAssign,
        env: &mut Environment,
    ) -> EvalResult<()> {
        if assign.targets.len() != assign.values.len() {
            return Err(RuntimeError::LengthMismatch {
                targets: assign.targets.len(),
                values: assign.values.len(),
            });
        }

        let values = assign
            .values
            .iter()
            .map(|value| self.eval_value(value, env, "assigned value"))
            .collect::<EvalResult<Vec<_>>>()?;

        env.extend(assign.targets.iter().cloned().zip(values));
        Ok(())
    }

    /// Evaluate an if statement
    fn eval_if(&mut self, if_stmt: &IfStmt, env: &mut Environment) -> EvalResult<()> {
        let test = self.eval_value(&if_stmt.test, env, "if test")?;
        if test.is_truthy() {
            self.exec_block(&if_stmt.body, env)
        } else {
            self.exec_block(&if_stmt.orelse, env)
        }
    }

    /// Evaluate an if/elif/else statement
    ///
    /// Every elif test runs, whatever the if test gave, and only the last
    /// one's result is kept. When the elif arm is taken all elif bodies run.
    fn eval_if_elif_else(&mut self, stmt: &IfElifElse, env: &mut Environment) -> EvalResult<()> {
        let if_result = self.eval_value(&stmt.if_test, env, "if test")?.is_truthy();

        let mut elif_result = false;
        for test in &stmt.elif_tests {
            elif_result = self.eval_value(test, env, "elif test")?.is_truthy();
        }

        if if_result {
            self.exec_block(&stmt.if_body, env)
        } else if elif_result {
            for body in &stmt.elif_bodies {
                self.exec_block(body, env)?;
            }
            Ok(())
        } else {
            self.exec_block(&stmt.else_body, env)
        }
    }

    /// Evaluate a range loop
    ///
    /// The loop variable lives in the shared environment and keeps its last
    /// value once the loop ends.
    fn eval_for_range(&mut self, for_range: &ForRange, env: &mut Environment) -> EvalResult<()> {
        let start = self.eval_value(&for_range.start, env, "range start")?;
        let stop = self.eval_value(&for_range.stop, env, "range stop")?;
        let (start, stop) = range_bounds("for loop", &start, &stop)?;

        tracing::debug!(target_name = %for_range.target, start, stop, "entering range loop");
        for i in start..stop {
            env.bind(for_range.target.as_str(), Value::Int(i));
            self.exec_block(&for_range.body, env)?;
        }
        Ok(())
    }
}
