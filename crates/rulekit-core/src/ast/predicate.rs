//! Combined predicates
//!
//! `Predicate` is the output of rule combination. The empty case is an
//! explicit variant, so a caller can detect an empty rule set and reject it
//! instead of silently treating it as always satisfied.

use serde::{Deserialize, Serialize};

use super::node::Node;

/// A combined rule set: either a single tree or explicitly empty
///
/// Serializes as the tree's document form, or as `null` when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Predicate {
    /// No rules were combined; evaluates vacuously true
    Empty,
    /// A combined rule tree
    Rule(Node),
}

impl Predicate {
    pub fn is_empty(&self) -> bool {
        matches!(self, Predicate::Empty)
    }

    /// The underlying tree, if any
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Predicate::Empty => None,
            Predicate::Rule(node) => Some(node),
        }
    }
}

impl From<Node> for Predicate {
    fn from(node: Node) -> Self {
        Predicate::Rule(node)
    }
}

impl From<Option<Node>> for Predicate {
    fn from(node: Option<Node>) -> Self {
        node.map_or(Predicate::Empty, Predicate::Rule)
    }
}
