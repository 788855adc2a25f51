//! AST interpreter (tree-walking)
//!
//! Direct AST evaluation against a caller-supplied environment.
//! Supports:
//! - Expression evaluation (literals, names, arithmetic, chained comparisons,
//!   print, list comprehensions)
//! - Statement execution (assignment, parallel assignment, conditionals,
//!   range loops)
//! - A nesting depth limit so runaway trees fail instead of overflowing the stack
//!
//! Errors are never caught here. The first failure aborts the run and
//! bindings committed before it stay in the environment.

mod expr;
mod stmt;

use crate::ast::Program;
use crate::environment::Environment;
use crate::stdlib::{stdout_writer, OutputWriter};
use crate::value::{EvalResult, RuntimeError, Value};
use treewalk_config::{RuntimeConfig, DEFAULT_MAX_DEPTH};

/// Interpreter state
pub struct Interpreter {
    /// Destination of print output
    pub(super) output: OutputWriter,
    /// Maximum nesting depth of active node evaluations
    pub(super) max_depth: usize,
    /// Current nesting depth
    pub(super) depth: usize,
    /// Log each executed statement's source at debug level
    pub(super) trace: bool,
}

impl Interpreter {
    /// Create an interpreter printing to stdout with default limits
    pub fn new() -> Self {
        Self {
            output: stdout_writer(),
            max_depth: DEFAULT_MAX_DEPTH,
            depth: 0,
            trace: false,
        }
    }

    /// Create an interpreter from loaded configuration
    pub fn with_config(config: &RuntimeConfig) -> Self {
        Self {
            max_depth: config.max_depth(),
            trace: config.trace(),
            ..Self::new()
        }
    }

    /// Redirect print output
    pub fn set_output_writer(&mut self, writer: OutputWriter) {
        self.output = writer;
    }

    /// Change the nesting depth limit
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// Run every statement of `program` in order against `env`
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.body.len()))]
    pub fn run(&mut self, program: &Program, env: &mut Environment) -> EvalResult<()> {
        self.depth = 0;
        let result = self.exec_block(&program.body, env);
        match &result {
            Ok(()) => tracing::debug!(bindings = env.len(), "program finished"),
            Err(err) => tracing::debug!(error = %err, "program aborted"),
        }
        result
    }

    /// Enter one nesting level, failing past the limit
    fn enter(&mut self) -> EvalResult<()> {
        if self.depth >= self.max_depth {
            return Err(RuntimeError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave one nesting level
    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that both range bounds are integers
pub(super) fn range_bounds(construct: &str, start: &Value, stop: &Value) -> EvalResult<(i64, i64)> {
    match (start.as_int(), stop.as_int()) {
        (Some(start), Some(stop)) => Ok((start, stop)),
        _ => Err(RuntimeError::TypeMismatch {
            msg: format!(
                "{} bounds must be integers, got '{}' and '{}'",
                construct,
                start.type_name(),
                stop.type_name()
            ),
        }),
    }
}
