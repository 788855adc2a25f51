//! Property-based tests for the evaluator.
//!
//! Random trees check that:
//! 1. Literals evaluate to themselves in any environment
//! 2. Parallel assignment swaps any pair of values
//! 3. Range loops and comprehensions visit exactly `start..stop`
//! 4. Integer arithmetic agrees with Rust's checked arithmetic

mod common;

use common::{eval_in, int_env, run, run_in};
use proptest::prelude::*;
use treewalk_runtime::{Expr, RuntimeError, Stmt, Value};

// -- Strategies --

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").expect("valid regex")
}

fn bindings_strategy() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec((identifier_strategy(), any::<i64>()), 0..6)
}

fn literal_strategy() -> impl Strategy<Value = (Expr, Value)> {
    prop_oneof![
        any::<i64>().prop_map(|n| (Expr::num(n), Value::Int(n))),
        (-1.0e9f64..1.0e9).prop_map(|x| (Expr::num(x), Value::Float(x))),
        any::<bool>().prop_map(|b| (Expr::bool(b), Value::Bool(b))),
    ]
}

fn env_from(bindings: &[(String, i64)]) -> treewalk_runtime::Environment {
    let pairs: Vec<(&str, i64)> = bindings
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect();
    int_env(&pairs)
}

// -- Properties --

proptest! {
    #[test]
    fn literals_ignore_environment(
        (expr, expected) in literal_strategy(),
        bindings in bindings_strategy(),
    ) {
        let mut env = env_from(&bindings);
        let before = env.clone();
        prop_assert_eq!(eval_in(&mut env, &expr), expected);
        prop_assert_eq!(env, before);
    }

    #[test]
    fn parallel_assign_swaps(x in any::<i64>(), y in any::<i64>()) {
        let outcome = run_in(
            int_env(&[("x", x), ("y", y)]),
            vec![Stmt::parallel_assign(["x", "y"], vec![Expr::name("y"), Expr::name("x")])],
        );
        prop_assert!(outcome.result.is_ok());
        prop_assert_eq!(outcome.env, int_env(&[("x", y), ("y", x)]));
    }

    #[test]
    fn for_range_prints_start_to_stop(start in -20i64..20, stop in -20i64..20) {
        let outcome = run(vec![Stmt::for_range(
            "i",
            Expr::num(start),
            Expr::num(stop),
            vec![Stmt::print(Expr::name("i"))],
        )]);

        let expected: Vec<String> = (start..stop).map(|i| i.to_string()).collect();
        prop_assert!(outcome.result.is_ok());
        prop_assert_eq!(outcome.output, expected);
    }

    #[test]
    fn comprehension_length_matches_range(start in -50i64..50, stop in -50i64..50) {
        let expr = Expr::list_comp(
            Expr::name("x"),
            "x",
            Expr::num(start),
            Expr::num(stop),
            Expr::bool(true),
        );
        let expected: Vec<Value> = (start..stop).map(Value::Int).collect();
        prop_assert_eq!(eval_in(&mut int_env(&[]), &expr), Value::List(expected));
    }

    #[test]
    fn integer_arithmetic_matches_checked_ops(a in any::<i64>(), b in any::<i64>()) {
        let cases = [
            (Expr::add(Expr::num(a), Expr::num(b)), a.checked_add(b)),
            (Expr::mul(Expr::num(a), Expr::num(b)), a.checked_mul(b)),
        ];
        for (expr, expected) in cases {
            let outcome = run(vec![Stmt::assign("r", expr)]);
            match expected {
                Some(n) => prop_assert_eq!(outcome.env.get("r"), Some(&Value::Int(n))),
                None => prop_assert!(
                    matches!(outcome.result, Err(RuntimeError::ArithmeticOverflow { .. })),
                    "expected overflow, got {:?}",
                    outcome.result
                ),
            }
        }
    }

    #[test]
    fn chained_comparison_matches_anchor_semantics(
        left in -10i64..10,
        rhs in prop::collection::vec(-10i64..10, 1..5),
    ) {
        let comparisons = rhs
            .iter()
            .map(|r| (treewalk_runtime::CompareOp::Lt, Expr::num(*r)))
            .collect();
        let expr = Expr::compare(Expr::num(left), comparisons);
        let expected = rhs.iter().all(|r| left < *r);
        prop_assert_eq!(eval_in(&mut int_env(&[]), &expr), Value::Bool(expected));
    }
}
