//! Runtime value representation
//!
//! Values are plain owned data: integers, floats, booleans and lists.
//! Booleans take part in arithmetic and ordering as the integers 0 and 1.

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Numeric literal payload (integer or float)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Widen to a float
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Compare two numbers by exact value.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Int(a), Number::Float(b)) => compare_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => compare_int_float(b, a).map(Ordering::reverse),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
        }
    }
}

/// Compare an integer with a float without rounding the integer
fn compare_int_float(i: i64, x: f64) -> Option<Ordering> {
    // 2^63 and -2^63 are exact in f64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if x.is_nan() {
        return None;
    }
    if x >= LIMIT {
        return Some(Ordering::Less);
    }
    if x < -LIMIT {
        return Some(Ordering::Greater);
    }

    // In range, so the integral part converts to i64 exactly
    let whole = x.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(x - whole)),
        ordering => Some(ordering),
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write_float(f, *x),
        }
    }
}

/// Runtime value type
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 64-bit integer
    Int(i64),
    /// IEEE 754 double-precision float
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Ordered list of values
    List(Vec<Value>),
}

impl Value {
    /// Name of the value's kind, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::List(_) => "list",
        }
    }

    /// Truthiness: zero, `False` and the empty list are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Bool(b) => *b,
            Value::List(items) => !items.is_empty(),
        }
    }

    /// Numeric view of the value. Booleans count as 0 and 1.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::List(_) => None,
        }
    }

    /// Strict integer view; booleans are not integers here
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Compare two values.
    ///
    /// Numbers and booleans compare by numeric value, lists compare
    /// lexicographically. Any other pairing is a type mismatch. `Ok(None)`
    /// means the values are unordered (NaN).
    pub fn compare(&self, other: &Value) -> Result<Option<Ordering>, RuntimeError> {
        match (self, other) {
            (Value::List(a), Value::List(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    match x.compare(y)? {
                        Some(Ordering::Equal) => continue,
                        other => return Ok(other),
                    }
                }
                Ok(Some(a.len().cmp(&b.len())))
            }
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => Ok(a.compare(b)),
                _ => Err(RuntimeError::TypeMismatch {
                    msg: format!(
                        "cannot compare '{}' with '{}'",
                        self.type_name(),
                        other.type_name()
                    ),
                }),
            },
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write_float(f, *x),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::List(items) => {
                let elements: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", elements.join(", "))
            }
        }
    }
}

/// Floats always show a fractional part (`4.0`, not `4`)
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        write!(f, "nan")
    } else if x.is_infinite() {
        write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" })
    } else {
        let repr = format!("{:?}", x);
        match repr.split_once('e') {
            // Exponents carry a sign and at least two digits: 1e+16, 1e-05
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => f.write_str(&repr),
        }
    }
}

/// Runtime error type
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// Name lookup against a missing binding
    #[error("Unbound name: {name}")]
    UnboundName { name: String },
    /// Operator symbol outside the supported set
    #[error("Invalid operator: {symbol}")]
    InvalidOperator { symbol: String },
    /// Parallel assignment with differing target and value counts
    #[error("Length mismatch: {targets} targets but {values} values")]
    LengthMismatch { targets: usize, values: usize },
    /// Operand or bound of the wrong kind
    #[error("Type error: {msg}")]
    TypeMismatch { msg: String },
    /// A node without a value (print) used where a value is required
    #[error("Missing value: {context} produced no value")]
    MissingValue { context: String },
    /// Chained comparison without any relation
    #[error("Comparison has no operators")]
    EmptyComparison,
    /// Integer arithmetic overflowed
    #[error("Integer overflow in '{op}'")]
    ArithmeticOverflow { op: String },
    /// List repetition whose result cannot be allocated
    #[error("List too large: {items} items repeated {count} times")]
    ListTooLarge { items: usize, count: i64 },
    /// Nesting exceeded the configured limit
    #[error("Evaluation depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },
    /// The print sink failed
    #[error("Output error: {message}")]
    Output { message: String },
}

/// Result type for evaluation
pub type EvalResult<T> = Result<T, RuntimeError>;
