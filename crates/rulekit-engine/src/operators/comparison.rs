//! Comparison operator execution
//!
//! Comparisons are total and deterministic. Equality is strict on type and
//! value, so `Number(5)` never equals `String("5")`. Orderings compare
//! numbers numerically and strings by code point; any other pairing has no
//! defined order and compares false.

use std::cmp::Ordering;

use rulekit_core::{Comparator, Value};

/// Apply a comparator to two present values
pub(crate) fn compare(left: &Value, op: Comparator, right: &Value) -> bool {
    match op {
        Comparator::Eq => left == right,
        Comparator::Ne => left != right,
        _ => match order(left, right) {
            Some(ord) => op.matches(ord),
            None => {
                tracing::debug!(
                    left = left.type_name(),
                    right = right.type_name(),
                    op = %op,
                    "no ordering between operand types, comparing false"
                );
                false
            }
        },
    }
}

/// Native ordering between two values of the same orderable type
fn order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => l.partial_cmp(r),
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    #[test]
    fn test_numeric_orderings() {
        assert!(compare(&num(35.0), Comparator::Gt, &num(30.0)));
        assert!(!compare(&num(30.0), Comparator::Gt, &num(30.0)));
        assert!(compare(&num(30.0), Comparator::Ge, &num(30.0)));
        assert!(compare(&num(20.0), Comparator::Lt, &num(25.0)));
        assert!(compare(&num(25.0), Comparator::Le, &num(25.0)));
    }

    #[test]
    fn test_string_orderings_are_lexicographic() {
        assert!(compare(&s("b"), Comparator::Gt, &s("a")));
        assert!(compare(&s("Sales"), Comparator::Lt, &s("Support")));
        // Code-point order: uppercase sorts before lowercase
        assert!(compare(&s("Z"), Comparator::Lt, &s("a")));
    }

    #[test]
    fn test_equality_is_type_strict() {
        assert!(compare(&num(5.0), Comparator::Eq, &num(5.0)));
        assert!(!compare(&num(5.0), Comparator::Eq, &s("5")));
        assert!(compare(&num(5.0), Comparator::Ne, &s("5")));
        assert!(compare(&s("Sales"), Comparator::Eq, &s("Sales")));
        assert!(!compare(&Value::Bool(true), Comparator::Eq, &num(1.0)));
    }

    #[test]
    fn test_mismatched_type_orderings_are_false() {
        assert!(!compare(&s("10"), Comparator::Gt, &num(5.0)));
        assert!(!compare(&num(10.0), Comparator::Lt, &s("20")));
        assert!(!compare(&Value::Bool(true), Comparator::Ge, &Value::Bool(false)));
    }

    #[test]
    fn test_nan_never_orders() {
        assert!(!compare(&num(f64::NAN), Comparator::Gt, &num(0.0)));
        assert!(!compare(&num(f64::NAN), Comparator::Le, &num(0.0)));
    }
}
