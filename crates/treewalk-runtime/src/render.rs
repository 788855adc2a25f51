//! Source rendering for AST nodes
//!
//! `Display` on every node prints it back in the language's surface syntax.
//! Blocks are indented four spaces per level and an empty block prints as
//! `pass`.

use crate::ast::*;
use std::fmt;

const INDENT: &str = "    ";

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(n) => write!(f, "{}", n),
            Expr::Bool(true) => f.write_str("True"),
            Expr::Bool(false) => f.write_str("False"),
            Expr::Name(name) => f.write_str(name),
            Expr::BinOp(b) => write!(f, "({} {} {})", b.left, b.op, b.right),
            Expr::Compare(c) => {
                write!(f, "{}", c.left)?;
                for (op, rhs) in &c.comparisons {
                    write!(f, " {} {}", op, rhs)?;
                }
                Ok(())
            }
            Expr::Print(p) => write!(f, "print({})", p.argument),
            Expr::ListComp(c) => write!(
                f,
                "[{} for {} in range({}, {}) if {}]",
                c.build, c.target, c.start, c.stop, c.guard
            ),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_stmt(f, stmt, 0)?;
        }
        Ok(())
    }
}

fn write_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, level: usize) -> fmt::Result {
    let pad = INDENT.repeat(level);
    match stmt {
        Stmt::Expr(expr) => write!(f, "{}{}", pad, expr),
        Stmt::Assign(a) => write!(f, "{}{} = {}", pad, a.target, a.value),
        Stmt::ParallelAssign(a) => {
            let values: Vec<String> = a.values.iter().map(|v| v.to_string()).collect();
            write!(f, "{}{} = {}", pad, a.targets.join(", "), values.join(", "))
        }
        Stmt::If(s) => {
            write!(f, "{}if {}:", pad, s.test)?;
            write_block(f, &s.body, level + 1)?;
            if !s.orelse.is_empty() {
                write!(f, "\n{}else:", pad)?;
                write_block(f, &s.orelse, level + 1)?;
            }
            Ok(())
        }
        Stmt::IfElifElse(s) => {
            write!(f, "{}if {}:", pad, s.if_test)?;
            write_block(f, &s.if_body, level + 1)?;
            // Tests and bodies pair up by position for display only
            for (i, test) in s.elif_tests.iter().enumerate() {
                write!(f, "\n{}elif {}:", pad, test)?;
                let body = s.elif_bodies.get(i).map(Vec::as_slice).unwrap_or(&[]);
                write_block(f, body, level + 1)?;
            }
            if !s.else_body.is_empty() {
                write!(f, "\n{}else:", pad)?;
                write_block(f, &s.else_body, level + 1)?;
            }
            Ok(())
        }
        Stmt::ForRange(s) => {
            write!(f, "{}for {} in range({}, {}):", pad, s.target, s.start, s.stop)?;
            write_block(f, &s.body, level + 1)
        }
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, body: &[Stmt], level: usize) -> fmt::Result {
    if body.is_empty() {
        return write!(f, "\n{}pass", INDENT.repeat(level));
    }
    for stmt in body {
        writeln!(f)?;
        write_stmt(f, stmt, level)?;
    }
    Ok(())
}
