//! Minimal embedding example
//!
//! Builds a small program from node constructors and runs it.
//!
//! Run with: cargo run --example 01_hello_world -p treewalk-runtime

use treewalk_runtime::{Expr, Program, Stmt};

fn main() {
    // x = 10.5 + 30
    // for i in range(1, 4):
    //     print(x * i)
    let program = Program::new(vec![
        Stmt::assign("x", Expr::add(Expr::num(10.5), Expr::num(30))),
        Stmt::for_range(
            "i",
            Expr::num(1),
            Expr::num(4),
            vec![Stmt::print(Expr::mul(Expr::name("x"), Expr::name("i")))],
        ),
    ]);

    println!("Source:\n{}", program);

    println!("Output:");
    program.evaluate().expect("Failed to evaluate");
    // Output: 40.5, 81.0, 121.5
}
