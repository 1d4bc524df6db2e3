//! Recursive AST evaluation

use rulekit_core::{Condition, LogicalOp, Node, Predicate, Record, Value};

use crate::operators::compare;

/// Evaluate a rule tree against one record
///
/// Both children of an operator node are always evaluated. Conditions are
/// side-effect free, so skipping the right child would only change
/// performance, never the verdict.
pub fn evaluate(node: &Node, record: &Record) -> bool {
    match node {
        Node::Operator { op, left, right } => {
            let lhs = evaluate(left, record);
            let rhs = evaluate(right, record);
            match op {
                LogicalOp::And => lhs && rhs,
                LogicalOp::Or => lhs || rhs,
            }
        }
        Node::Operand { condition } => evaluate_condition(condition, record),
    }
}

/// Evaluate a combined predicate; the empty predicate is vacuously true
pub fn evaluate_predicate(predicate: &Predicate, record: &Record) -> bool {
    match predicate {
        Predicate::Empty => true,
        Predicate::Rule(node) => evaluate(node, record),
    }
}

/// A condition on a field missing from the record is false, whatever the
/// comparator.
fn evaluate_condition(condition: &Condition, record: &Record) -> bool {
    let field_value = record.get(&condition.field).unwrap_or(&Value::Null);
    if field_value.is_null() {
        tracing::debug!(
            field = %condition.field,
            "field missing from record, condition is false"
        );
        return false;
    }
    compare(field_value, condition.operator, &condition.value)
}
