//! Persistent state example
//!
//! Keeps one environment across several programs and inspects the final
//! bindings.
//!
//! Run with: cargo run --example 02_persistent_state -p treewalk-runtime

use treewalk_runtime::{Environment, Expr, Program, Stmt};

fn main() {
    let mut env = Environment::new();

    // a, b = 0, 1
    Program::new(vec![Stmt::parallel_assign(
        ["a", "b"],
        vec![Expr::num(0), Expr::num(1)],
    )])
    .evaluate_in(&mut env)
    .expect("Failed to initialise");

    // Advance the Fibonacci pair ten steps with a simultaneous swap
    let step = Program::new(vec![Stmt::for_range(
        "i",
        Expr::num(0),
        Expr::num(10),
        vec![Stmt::parallel_assign(
            ["a", "b"],
            vec![Expr::name("b"), Expr::add(Expr::name("a"), Expr::name("b"))],
        )],
    )]);
    step.evaluate_in(&mut env).expect("Failed to step");

    for (name, value) in env.snapshot() {
        println!("{} = {}", name, value);
    }
    // Output: a = 55, b = 89, i = 9
}
