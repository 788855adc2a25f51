//! Treewalk Runtime - tree-walking evaluator
//!
//! This library provides:
//! - Programmatic construction of expression and statement trees
//! - Evaluation against a mutable name-to-value environment
//! - A single print side effect with pluggable output
//! - Source rendering of every node

/// Treewalk runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod environment;
pub mod interpreter;
pub mod render;
pub mod runtime;
pub mod stdlib;
pub mod value;

// Re-export commonly used types
pub use ast::{BinaryOp, CompareOp, Expr, Program, Stmt};
pub use environment::Environment;
pub use interpreter::Interpreter;
pub use stdlib::{capture_writer, stdout_writer, CapturedOutput, OutputWriter};
pub use value::{EvalResult, Number, RuntimeError, Value};
