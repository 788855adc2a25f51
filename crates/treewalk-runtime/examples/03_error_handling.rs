//! Error handling example
//!
//! Demonstrates the runtime errors an evaluation can raise, and that
//! bindings made before a failure survive it.
//!
//! Run with: cargo run --example 03_error_handling -p treewalk-runtime

use treewalk_runtime::{BinaryOp, Environment, Expr, Program, RuntimeError, Stmt};

fn report(label: &str, program: Program) {
    let mut env = Environment::new();
    match program.evaluate_in(&mut env) {
        Ok(()) => println!("{}: ok", label),
        Err(err @ RuntimeError::UnboundName { .. })
        | Err(err @ RuntimeError::LengthMismatch { .. })
        | Err(err @ RuntimeError::TypeMismatch { .. }) => {
            println!("{}: {}", label, err);
        }
        Err(err) => println!("{}: unexpected error: {:?}", label, err),
    }
    println!("   bindings left behind: {}", env.len());
}

fn main() {
    println!("Demonstrating error handling:\n");

    // Operators are checked when the tree is built
    match "//".parse::<BinaryOp>() {
        Ok(op) => println!("Unexpected operator: {}", op),
        Err(err) => println!("invalid operator: {}", err),
    }

    report(
        "unbound name",
        Program::new(vec![
            Stmt::assign("kept", Expr::num(1)),
            Stmt::print(Expr::name("missing")),
        ]),
    );

    report(
        "length mismatch",
        Program::new(vec![Stmt::parallel_assign(
            ["x", "y"],
            vec![Expr::num(1), Expr::num(2), Expr::num(3)],
        )]),
    );

    report(
        "type mismatch",
        Program::new(vec![Stmt::for_range(
            "i",
            Expr::num(0),
            Expr::num(2.5),
            vec![],
        )]),
    );
}
