//! Expression semantics: literals, names, arithmetic, chained comparison

mod common;

use common::{eval, eval_in, int_env, run};
use pretty_assertions::assert_eq;
use rstest::rstest;
use treewalk_runtime::{
    BinaryOp, CompareOp, Environment, Expr, Interpreter, RuntimeError, Stmt, Value,
};

// ============================================================================
// Literals and names
// ============================================================================

#[rstest]
#[case(Expr::num(10.5), Value::Float(10.5))]
#[case(Expr::num(0), Value::Int(0))]
#[case(Expr::num(-4), Value::Int(-4))]
#[case(Expr::bool(true), Value::Bool(true))]
#[case(Expr::bool(false), Value::Bool(false))]
fn test_literals_ignore_environment(#[case] expr: Expr, #[case] expected: Value) {
    assert_eq!(eval(&expr), expected);

    let mut busy = int_env(&[("x", 99), ("y", -1)]);
    assert_eq!(eval_in(&mut busy, &expr), expected);
}

#[test]
fn test_name_lookup() {
    let mut env = int_env(&[("x", 10)]);
    assert_eq!(eval_in(&mut env, &Expr::name("x")), Value::Int(10));
}

#[test]
fn test_unbound_name_leaves_environment_untouched() {
    let mut env = int_env(&[("y", 1)]);
    let before = env.clone();

    let err = Interpreter::new()
        .eval(&Expr::name("x"), &mut env)
        .unwrap_err();

    assert_eq!(
        err,
        RuntimeError::UnboundName {
            name: "x".to_string()
        }
    );
    assert_eq!(env, before);
}

// ============================================================================
// Arithmetic
// ============================================================================

#[rstest]
#[case(Expr::add(Expr::num(10.5), Expr::num(30)), Value::Float(40.5))]
#[case(Expr::add(Expr::num(2), Expr::num(3)), Value::Int(5))]
#[case(Expr::mul(Expr::num(2), Expr::num(2.5)), Value::Float(5.0))]
#[case(Expr::mul(Expr::add(Expr::num(1), Expr::num(2)), Expr::num(4)), Value::Int(12))]
#[case(Expr::add(Expr::bool(true), Expr::bool(true)), Value::Int(2))]
fn test_arithmetic(#[case] expr: Expr, #[case] expected: Value) {
    assert_eq!(eval(&expr), expected);
}

#[test]
fn test_operands_evaluate_left_to_right() {
    let outcome = run(vec![Expr::add(
        Expr::list_comp(Expr::name("i"), "i", Expr::num(0), Expr::num(1), Expr::bool(true)),
        Expr::print(Expr::num(2)),
    )
    .into()]);

    // The left operand succeeds, the right one prints before failing
    assert_eq!(outcome.output, vec!["2"]);
    assert!(matches!(outcome.result, Err(RuntimeError::MissingValue { .. })));
}

#[test]
fn test_arithmetic_type_mismatch() {
    let expr = Expr::add(
        Expr::num(1),
        Expr::list_comp(Expr::name("i"), "i", Expr::num(0), Expr::num(2), Expr::bool(true)),
    );
    let err = Interpreter::new()
        .eval(&expr, &mut Environment::new())
        .unwrap_err();
    assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
}

// ============================================================================
// Chained comparison
// ============================================================================

#[test]
fn test_chained_comparison_holds() {
    let expr = Expr::compare(
        Expr::num(1),
        vec![
            (CompareOp::Le, Expr::num(2)),
            (CompareOp::Lt, Expr::num(4.5)),
            (CompareOp::Le, Expr::num(4.5)),
        ],
    );
    assert_eq!(eval(&expr), Value::Bool(true));
}

#[test]
fn test_nested_comparison_composes() {
    // 1 < (2 < 4) is 1 < True, which is 1 < 1
    let expr = Expr::compare(
        Expr::num(1),
        vec![(
            CompareOp::Lt,
            Expr::compare(Expr::num(2), vec![(CompareOp::Lt, Expr::num(4))]),
        )],
    );
    assert_eq!(eval(&expr), Value::Bool(false));
}

#[test]
fn test_every_relation_uses_the_left_anchor() {
    // 1 < 5 and 1 < 3 both hold, even though 5 < 3 would not
    let expr = Expr::compare(
        Expr::num(1),
        vec![(CompareOp::Lt, Expr::num(5)), (CompareOp::Lt, Expr::num(3))],
    );
    assert_eq!(eval(&expr), Value::Bool(true));
}

#[test]
fn test_comparison_short_circuits() {
    let outcome = run(vec![Stmt::assign(
        "r",
        Expr::compare(
            Expr::num(3),
            vec![
                (CompareOp::Lt, Expr::num(1)),
                (CompareOp::Lt, Expr::name("never_bound")),
            ],
        ),
    )]);

    assert!(outcome.result.is_ok());
    assert_eq!(outcome.env.get("r"), Some(&Value::Bool(false)));
}

#[test]
fn test_int_float_comparison_is_exact_past_f64_precision() {
    // 2^53 + 1 has no exact f64 representation
    let expr = Expr::compare(
        Expr::num(9_007_199_254_740_993i64),
        vec![(CompareOp::Le, Expr::num(9_007_199_254_740_992.0))],
    );
    assert_eq!(eval(&expr), Value::Bool(false));

    let expr = Expr::compare(
        Expr::num(9_007_199_254_740_992.0),
        vec![(CompareOp::Lt, Expr::num(9_007_199_254_740_993i64))],
    );
    assert_eq!(eval(&expr), Value::Bool(true));
}

#[rstest]
#[case(CompareOp::Lt, 2, 2, false)]
#[case(CompareOp::Le, 2, 2, true)]
#[case(CompareOp::Lt, 1, 2, true)]
#[case(CompareOp::Le, 3, 2, false)]
fn test_single_relation(#[case] op: CompareOp, #[case] a: i64, #[case] b: i64, #[case] expected: bool) {
    let expr = Expr::compare(Expr::num(a), vec![(op, Expr::num(b))]);
    assert_eq!(eval(&expr), Value::Bool(expected));
}

#[test]
fn test_operator_symbols() {
    let op: CompareOp = "<=".parse().unwrap();
    assert_eq!(op, CompareOp::Le);
    assert_eq!(
        "//".parse::<BinaryOp>(),
        Err(RuntimeError::InvalidOperator {
            symbol: "//".to_string()
        })
    );
}
