//! Expression evaluation

use crate::ast::*;
use crate::environment::Environment;
use crate::interpreter::{range_bounds, Interpreter};
use crate::stdlib;
use crate::value::{EvalResult, Number, RuntimeError, Value};
use std::cmp::Ordering;

impl Interpreter {
    /// Evaluate an expression; `None` means the expression has no value (print)
    pub fn eval(&mut self, expr: &Expr, env: &mut Environment) -> EvalResult<Option<Value>> {
        self.enter()?;
        let result = self.eval_expr(expr, env);
        self.leave();
        result
    }

    /// Evaluate an expression that must produce a value
    pub(super) fn eval_value(
        &mut self,
        expr: &Expr,
        env: &mut Environment,
        context: &str,
    ) -> EvalResult<Value> {
        self.eval(expr, env)?.ok_or_else(|| RuntimeError::MissingValue {
            context: context.to_string(),
        })
    }

    fn eval_expr(&mut self, expr: &Expr, env: &mut Environment) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Num(n) => Ok(Some(Value::from(*n))),
            Expr::Bool(b) => Ok(Some(Value::Bool(*b))),
            Expr::Name(name) => env.lookup(name).map(Some),
            Expr::BinOp(binop) => self.eval_binop(binop, env).map(Some),
            Expr::Compare(compare) => self
                .eval_compare(compare, env)
                .map(|holds| Some(Value::Bool(holds))),
            Expr::Print(print) => {
                let value = self.eval_value(&print.argument, env, "print argument")?;
                stdlib::print(&self.output, &value)?;
                Ok(None)
            }
            Expr::ListComp(comp) => self.eval_list_comp(comp).map(Some),
        }
    }

    /// Evaluate a binary expression, left operand first
    fn eval_binop(&mut self, binop: &BinOpExpr, env: &mut Environment) -> EvalResult<Value> {
        let left = self.eval_value(&binop.left, env, "left operand")?;
        let right = self.eval_value(&binop.right, env, "right operand")?;

        match binop.op {
            BinaryOp::Add => add_values(left, right),
            BinaryOp::Mul => mul_values(left, right),
        }
    }

    /// Evaluate a chained comparison
    ///
    /// `left` is evaluated once and every relation tests it against its own
    /// right-hand side. The first relation that does not hold ends the
    /// evaluation; later right-hand sides are never evaluated.
    fn eval_compare(&mut self, compare: &CompareExpr, env: &mut Environment) -> EvalResult<bool> {
        if compare.comparisons.is_empty() {
            return Err(RuntimeError::EmptyComparison);
        }

        let left = self.eval_value(&compare.left, env, "comparison operand")?;
        for (op, rhs) in &compare.comparisons {
            let right = self.eval_value(rhs, env, "comparison operand")?;
            let holds = match left.compare(&right)? {
                None => false,
                Some(ordering) => match op {
                    CompareOp::Lt => ordering == Ordering::Less,
                    CompareOp::Le => ordering != Ordering::Greater,
                },
            };
            if !holds {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Evaluate a list comprehension in isolation from the caller's environment
    fn eval_list_comp(&mut self, comp: &ListComprehension) -> EvalResult<Value> {
        let start = self.eval_value(&comp.start, &mut Environment::new(), "range start")?;
        let stop = self.eval_value(&comp.stop, &mut Environment::new(), "range stop")?;
        let (start, stop) = range_bounds("list comprehension", &start, &stop)?;

        // The guard is checked once, up front, not per element
        let guard = self.eval_value(&comp.guard, &mut Environment::new(), "comprehension guard")?;
        if !guard.is_truthy() {
            tracing::trace!(target_name = %comp.target, "comprehension guard is falsy");
            return Ok(Value::List(Vec::new()));
        }

        tracing::debug!(target_name = %comp.target, start, stop, "building comprehension");
        let mut items = Vec::new();
        for i in start..stop {
            let mut scope = Environment::new();
            scope.bind(comp.target.as_str(), Value::Int(i));
            items.push(self.eval_value(&comp.build, &mut scope, "comprehension element")?);
        }
        Ok(Value::List(items))
    }
}

/// `+`: list concatenation or numeric addition
fn add_values(left: Value, right: Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::List(mut items), Value::List(rest)) => {
            items.extend(rest);
            Ok(Value::List(items))
        }
        (left, right) => numeric_binary_op(BinaryOp::Add, &left, &right),
    }
}

/// `*`: list repetition or numeric multiplication
fn mul_values(left: Value, right: Value) -> EvalResult<Value> {
    match (&left, &right) {
        (Value::List(items), count) | (count, Value::List(items)) => {
            if let Some(Number::Int(n)) = count.as_number() {
                return repeat_list(items, n);
            }
        }
        _ => {}
    }
    numeric_binary_op(BinaryOp::Mul, &left, &right)
}

fn repeat_list(items: &[Value], count: i64) -> EvalResult<Value> {
    if count <= 0 || items.is_empty() {
        return Ok(Value::List(Vec::new()));
    }
    let too_large = || RuntimeError::ListTooLarge {
        items: items.len(),
        count,
    };
    let times = usize::try_from(count).map_err(|_| too_large())?;
    let len = items.len().checked_mul(times).ok_or_else(too_large)?;
    // Allocation sizes must stay within isize::MAX bytes
    match len.checked_mul(std::mem::size_of::<Value>()) {
        Some(bytes) if bytes <= isize::MAX as usize => {}
        _ => return Err(too_large()),
    }

    let mut repeated = Vec::new();
    repeated.try_reserve_exact(len).map_err(|_| too_large())?;
    for _ in 0..times {
        repeated.extend(items.iter().cloned());
    }
    Ok(Value::List(repeated))
}

/// Integer arithmetic stays integral; any float operand promotes the result
fn numeric_binary_op(op: BinaryOp, left: &Value, right: &Value) -> EvalResult<Value> {
    let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
        return Err(RuntimeError::TypeMismatch {
            msg: format!(
                "unsupported operand types for {}: '{}' and '{}'",
                op.symbol(),
                left.type_name(),
                right.type_name()
            ),
        });
    };

    match (a, b) {
        (Number::Int(x), Number::Int(y)) => {
            let result = match op {
                BinaryOp::Add => x.checked_add(y),
                BinaryOp::Mul => x.checked_mul(y),
            };
            result.map(Value::Int).ok_or_else(|| overflow(op))
        }
        (a, b) => {
            let (x, y) = (a.to_f64(), b.to_f64());
            Ok(Value::Float(match op {
                BinaryOp::Add => x + y,
                BinaryOp::Mul => x * y,
            }))
        }
    }
}

fn overflow(op: BinaryOp) -> RuntimeError {
    RuntimeError::ArithmeticOverflow {
        op: op.symbol().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(expr: &Expr) -> EvalResult<Option<Value>> {
        Interpreter::new().eval(expr, &mut Environment::new())
    }

    #[test]
    fn test_eval_literal() {
        assert_eq!(eval(&Expr::num(10.5)).unwrap(), Some(Value::Float(10.5)));
        assert_eq!(eval(&Expr::num(7)).unwrap(), Some(Value::Int(7)));
        assert_eq!(eval(&Expr::bool(true)).unwrap(), Some(Value::Bool(true)));
    }

    #[test]
    fn test_numeric_promotion() {
        let expr = Expr::add(Expr::num(10.5), Expr::num(30));
        assert_eq!(eval(&expr).unwrap(), Some(Value::Float(40.5)));

        let expr = Expr::mul(Expr::num(6), Expr::num(7));
        assert_eq!(eval(&expr).unwrap(), Some(Value::Int(42)));
    }

    #[test]
    fn test_bool_arithmetic() {
        let expr = Expr::add(Expr::bool(true), Expr::num(1));
        assert_eq!(eval(&expr).unwrap(), Some(Value::Int(2)));
    }

    #[test]
    fn test_list_concat_and_repeat() {
        assert_eq!(
            add_values(
                Value::List(vec![Value::Int(1)]),
                Value::List(vec![Value::Int(2)])
            )
            .unwrap(),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
        assert_eq!(
            mul_values(Value::Int(2), Value::List(vec![Value::Int(0)])).unwrap(),
            Value::List(vec![Value::Int(0), Value::Int(0)])
        );
        assert_eq!(
            mul_values(Value::List(vec![Value::Int(0)]), Value::Int(-3)).unwrap(),
            Value::List(vec![])
        );
    }

    #[test]
    fn test_huge_repeat_fails_without_allocating() {
        let single = Expr::list_comp(Expr::num(0), "x", Expr::num(0), Expr::num(1), Expr::bool(true));
        let expr = Expr::mul(single, Expr::num(i64::MAX));
        assert_eq!(
            eval(&expr).unwrap_err(),
            RuntimeError::ListTooLarge {
                items: 1,
                count: i64::MAX
            }
        );

        let pair = Value::List(vec![Value::Int(1), Value::Int(2)]);
        let err = mul_values(pair, Value::Int(i64::MAX / 2)).unwrap_err();
        assert!(matches!(err, RuntimeError::ListTooLarge { items: 2, .. }));
    }

    #[test]
    fn test_mismatched_operands() {
        let err = add_values(Value::List(vec![]), Value::Int(1)).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeMismatch { .. }));

        let err = mul_values(Value::List(vec![]), Value::Float(2.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_integer_overflow() {
        let expr = Expr::add(Expr::num(i64::MAX), Expr::num(1));
        assert_eq!(
            eval(&expr).unwrap_err(),
            RuntimeError::ArithmeticOverflow {
                op: "+".to_string()
            }
        );
    }

    #[test]
    fn test_print_has_no_value() {
        let expr = Expr::add(Expr::print(Expr::num(1)), Expr::num(2));
        let mut interp = Interpreter::new();
        interp.set_output_writer(crate::stdlib::capture_writer().0);
        let err = interp.eval(&expr, &mut Environment::new()).unwrap_err();
        assert!(matches!(err, RuntimeError::MissingValue { .. }));
    }

    #[test]
    fn test_empty_comparison() {
        let expr = Expr::compare(Expr::num(1), vec![]);
        assert_eq!(eval(&expr).unwrap_err(), RuntimeError::EmptyComparison);
    }
}
