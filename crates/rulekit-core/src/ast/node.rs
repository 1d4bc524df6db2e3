//! Rule AST nodes
//!
//! A rule is a strict binary tree: operator nodes combine exactly two
//! sub-trees with AND/OR, operand nodes compare one record field against a
//! literal. Trees are immutable once built; combination wraps existing
//! sub-trees in new operator nodes and never mutates them, so a tree can be
//! read concurrently once construction happens-before the reads.

use serde::{Deserialize, Serialize};

use super::operator::{Comparator, LogicalOp};
use crate::types::Value;

/// One AST node
///
/// The serialized shape is the engine's document format: internally tagged
/// with `type` (`"operator"` or `"operand"`), carrying the operator tag or
/// the condition payload under `value`:
///
/// ```json
/// {
///   "type": "operator",
///   "value": "AND",
///   "left": { "type": "operand", "value": { "field": "age", "operator": ">", "value": 30 } },
///   "right": { "type": "operand", "value": { "field": "department", "operator": "=", "value": "Sales" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Binary AND/OR combination of two sub-trees
    Operator {
        #[serde(rename = "value")]
        op: LogicalOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Leaf condition on a single record field
    Operand {
        #[serde(rename = "value")]
        condition: Condition,
    },
}

/// Leaf condition: `field comparator literal`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Key into the data record
    pub field: String,
    /// One of the six comparison operators
    pub operator: Comparator,
    /// Literal to compare against, numeric or string
    pub value: Value,
}

impl Node {
    /// Build an operator node around two sub-trees
    pub fn operator(op: LogicalOp, left: Node, right: Node) -> Self {
        Node::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build a leaf condition node
    pub fn operand(field: impl Into<String>, operator: Comparator, value: Value) -> Self {
        Node::Operand {
            condition: Condition {
                field: field.into(),
                operator,
                value,
            },
        }
    }

    /// Nesting depth of the tree; a leaf is depth 1
    pub fn depth(&self) -> usize {
        match self {
            Node::Operand { .. } => 1,
            Node::Operator { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of leaf conditions in the tree
    pub fn condition_count(&self) -> usize {
        match self {
            Node::Operand { .. } => 1,
            Node::Operator { left, right, .. } => left.condition_count() + right.condition_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> Node {
        Node::operator(
            LogicalOp::And,
            Node::operand("age", Comparator::Gt, Value::Number(30.0)),
            Node::operand(
                "department",
                Comparator::Eq,
                Value::String("Sales".to_string()),
            ),
        )
    }

    #[test]
    fn test_operator_node_has_two_children() {
        match sample_tree() {
            Node::Operator { op, left, right } => {
                assert_eq!(op, LogicalOp::And);
                assert!(matches!(*left, Node::Operand { .. }));
                assert!(matches!(*right, Node::Operand { .. }));
            }
            _ => panic!("Expected operator node"),
        }
    }

    #[test]
    fn test_depth_and_condition_count() {
        let leaf = Node::operand("age", Comparator::Gt, Value::Number(30.0));
        assert_eq!(leaf.depth(), 1);
        assert_eq!(leaf.condition_count(), 1);

        let tree = sample_tree();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.condition_count(), 2);

        let deeper = Node::operator(LogicalOp::Or, tree, leaf);
        assert_eq!(deeper.depth(), 3);
        assert_eq!(deeper.condition_count(), 3);
    }

    #[test]
    fn test_document_shape() {
        let doc = serde_json::to_value(sample_tree()).unwrap();
        assert_eq!(
            doc,
            json!({
                "type": "operator",
                "value": "AND",
                "left": {
                    "type": "operand",
                    "value": { "field": "age", "operator": ">", "value": 30.0 }
                },
                "right": {
                    "type": "operand",
                    "value": { "field": "department", "operator": "=", "value": "Sales" }
                }
            })
        );
    }

    #[test]
    fn test_document_round_trip() {
        let tree = sample_tree();
        let doc = serde_json::to_string(&tree).unwrap();
        let back: Node = serde_json::from_str(&doc).unwrap();
        assert_eq!(tree, back);
    }

    #[test]
    fn test_corrupted_document_is_rejected() {
        // Unknown node kind
        assert!(serde_json::from_value::<Node>(json!({
            "type": "ternary",
            "value": "AND"
        }))
        .is_err());

        // Operator tag outside the closed set
        assert!(serde_json::from_value::<Node>(json!({
            "type": "operand",
            "value": { "field": "age", "operator": "~", "value": 30.0 }
        }))
        .is_err());
    }
}
