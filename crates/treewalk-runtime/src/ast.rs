//! Abstract Syntax Tree (AST) definitions
//!
//! Trees are built programmatically with the constructor helpers on [`Expr`]
//! and [`Stmt`]; there is no parser. Nodes are immutable once built: the
//! interpreter only ever reads them.

use crate::value::{Number, RuntimeError};
use std::str::FromStr;

/// Top-level program: an ordered statement sequence sharing one environment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    /// Create a program from its statements
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }
}

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Mul,
}

impl BinaryOp {
    /// Source symbol of the operator
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Mul => "*",
        }
    }
}

impl FromStr for BinaryOp {
    type Err = RuntimeError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "+" => Ok(BinaryOp::Add),
            "*" => Ok(BinaryOp::Mul),
            _ => Err(RuntimeError::InvalidOperator {
                symbol: symbol.to_string(),
            }),
        }
    }
}

/// Relational operator usable in a chained comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Lt,
    Le,
}

impl CompareOp {
    /// Source symbol of the operator
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
        }
    }
}

impl FromStr for CompareOp {
    type Err = RuntimeError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "<" => Ok(CompareOp::Lt),
            "<=" | "≤" => Ok(CompareOp::Le),
            _ => Err(RuntimeError::InvalidOperator {
                symbol: symbol.to_string(),
            }),
        }
    }
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Num(Number),
    /// Boolean literal
    Bool(bool),
    /// Variable reference
    Name(String),
    /// `left op right`
    BinOp(BinOpExpr),
    /// `left op1 rhs1 op2 rhs2 ...`
    Compare(CompareExpr),
    /// `print(argument)`; evaluates to no value
    Print(PrintExpr),
    /// `[build for target in range(start, stop) if guard]`
    ListComp(ListComprehension),
}

/// Binary arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinOpExpr {
    pub left: Box<Expr>,
    pub op: BinaryOp,
    pub right: Box<Expr>,
}

/// Chained comparison
///
/// Every relation is tested against the single evaluated `left` value.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareExpr {
    pub left: Box<Expr>,
    pub comparisons: Vec<(CompareOp, Expr)>,
}

/// Print call
#[derive(Debug, Clone, PartialEq)]
pub struct PrintExpr {
    pub argument: Box<Expr>,
}

/// List comprehension over an integer range
///
/// Bounds and guard are evaluated in an empty environment, and each element
/// is built in a fresh environment holding only the loop variable.
#[derive(Debug, Clone, PartialEq)]
pub struct ListComprehension {
    pub build: Box<Expr>,
    pub target: String,
    pub start: Box<Expr>,
    pub stop: Box<Expr>,
    pub guard: Box<Expr>,
}

/// Statement node
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Expression evaluated as a statement
    Expr(Expr),
    /// `target = value`
    Assign(Assign),
    /// `t1, t2 = v1, v2`
    ParallelAssign(ParallelAssign),
    /// `if test: body else: orelse`
    If(IfStmt),
    /// `if ...: elif ...: else:`
    IfElifElse(IfElifElse),
    /// `for target in range(start, stop): body`
    ForRange(ForRange),
}

/// Single-target assignment
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub target: String,
    pub value: Expr,
}

/// Simultaneous multi-target assignment
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelAssign {
    pub targets: Vec<String>,
    pub values: Vec<Expr>,
}

/// Two-armed conditional
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub test: Expr,
    pub body: Vec<Stmt>,
    pub orelse: Vec<Stmt>,
}

/// Conditional with elif arms
///
/// All elif tests are evaluated, only the last one decides whether the elif
/// arm runs, and the elif arm runs every elif body in order.
#[derive(Debug, Clone, PartialEq)]
pub struct IfElifElse {
    pub if_test: Expr,
    pub if_body: Vec<Stmt>,
    pub elif_tests: Vec<Expr>,
    pub elif_bodies: Vec<Vec<Stmt>>,
    pub else_body: Vec<Stmt>,
}

/// Loop over a half-open integer range
#[derive(Debug, Clone, PartialEq)]
pub struct ForRange {
    pub target: String,
    pub start: Expr,
    pub stop: Expr,
    pub body: Vec<Stmt>,
}

// Constructor helpers

impl Expr {
    pub fn num(value: impl Into<Number>) -> Self {
        Expr::Num(value.into())
    }

    pub fn bool(value: bool) -> Self {
        Expr::Bool(value)
    }

    pub fn name(id: impl Into<String>) -> Self {
        Expr::Name(id.into())
    }

    pub fn binop(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::BinOp(BinOpExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Self::binop(left, BinaryOp::Add, right)
    }

    pub fn mul(left: Expr, right: Expr) -> Self {
        Self::binop(left, BinaryOp::Mul, right)
    }

    pub fn compare(left: Expr, comparisons: Vec<(CompareOp, Expr)>) -> Self {
        Expr::Compare(CompareExpr {
            left: Box::new(left),
            comparisons,
        })
    }

    pub fn print(argument: Expr) -> Self {
        Expr::Print(PrintExpr {
            argument: Box::new(argument),
        })
    }

    pub fn list_comp(
        build: Expr,
        target: impl Into<String>,
        start: Expr,
        stop: Expr,
        guard: Expr,
    ) -> Self {
        Expr::ListComp(ListComprehension {
            build: Box::new(build),
            target: target.into(),
            start: Box::new(start),
            stop: Box::new(stop),
            guard: Box::new(guard),
        })
    }
}

impl Stmt {
    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Stmt::Assign(Assign {
            target: target.into(),
            value,
        })
    }

    pub fn parallel_assign<I, S>(targets: I, values: Vec<Expr>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Stmt::ParallelAssign(ParallelAssign {
            targets: targets.into_iter().map(Into::into).collect(),
            values,
        })
    }

    pub fn print(argument: Expr) -> Self {
        Stmt::Expr(Expr::print(argument))
    }

    pub fn if_else(test: Expr, body: Vec<Stmt>, orelse: Vec<Stmt>) -> Self {
        Stmt::If(IfStmt { test, body, orelse })
    }

    pub fn if_elif_else(
        if_test: Expr,
        if_body: Vec<Stmt>,
        elif_tests: Vec<Expr>,
        elif_bodies: Vec<Vec<Stmt>>,
        else_body: Vec<Stmt>,
    ) -> Self {
        Stmt::IfElifElse(IfElifElse {
            if_test,
            if_body,
            elif_tests,
            elif_bodies,
            else_body,
        })
    }

    pub fn for_range(target: impl Into<String>, start: Expr, stop: Expr, body: Vec<Stmt>) -> Self {
        Stmt::ForRange(ForRange {
            target: target.into(),
            start,
            stop,
            body,
        })
    }

    /// Short node name, used in log records
    pub fn kind(&self) -> &'static str {
        match self {
            Stmt::Expr(_) => "expr",
            Stmt::Assign(_) => "assign",
            Stmt::ParallelAssign(_) => "parallel_assign",
            Stmt::If(_) => "if",
            Stmt::IfElifElse(_) => "if_elif_else",
            Stmt::ForRange(_) => "for_range",
        }
    }
}

impl From<Expr> for Stmt {
    fn from(expr: Expr) -> Self {
        Stmt::Expr(expr)
    }
}
