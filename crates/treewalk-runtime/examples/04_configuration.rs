//! Configuration example
//!
//! Loads treewalk.toml (searched upwards from the current directory, with
//! TREEWALK_* overrides) and applies it to an interpreter.
//!
//! Run with: TREEWALK_TRACE=1 cargo run --example 04_configuration -p treewalk-runtime

use std::path::Path;
use treewalk_config::ConfigLoader;
use treewalk_runtime::{Environment, Expr, Interpreter, Program, Stmt};

fn main() {
    let loaded = ConfigLoader::new()
        .load_from_directory(Path::new("."))
        .expect("Failed to load configuration");

    match loaded.config_root() {
        Some(root) => println!("Using {}", root.display()),
        None => println!("No treewalk.toml found, using defaults"),
    }
    println!("max depth: {}, trace: {}", loaded.max_depth(), loaded.trace());

    let mut interp = Interpreter::with_config(&loaded.runtime);

    // A tree nested deeper than the limit fails instead of overflowing the stack
    let deep = (0..loaded.max_depth()).fold(Expr::num(0), |acc, _| Expr::add(acc, Expr::num(1)));
    let program = Program::new(vec![Stmt::print(deep)]);

    match interp.run(&program, &mut Environment::new()) {
        Ok(()) => println!("evaluated"),
        Err(err) => println!("rejected: {}", err),
    }
}
