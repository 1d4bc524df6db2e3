//! Rule combination
//!
//! Folds several independently parsed rules into one predicate by
//! left-folding with AND in input order: `(((r1 AND r2) AND r3) ... AND
//! rN)`. Nothing is deduplicated, simplified, or reordered, and the input
//! trees are wrapped as-is, never rewritten.

use rulekit_core::{LogicalOp, Node, Predicate};

use crate::error::Result;
use crate::parser::RuleParser;

impl RuleParser {
    /// Parse each rule string and left-fold the trees with AND
    ///
    /// Zero inputs yield [`Predicate::Empty`]; one input is equivalent to
    /// parsing that string alone.
    pub fn combine<S: AsRef<str>>(&self, rules: &[S]) -> Result<Predicate> {
        let mut nodes = Vec::with_capacity(rules.len());
        for rule in rules {
            nodes.push(self.parse_str(rule.as_ref())?);
        }
        Ok(combine_nodes(nodes))
    }
}

/// Combine rule strings into a single predicate with the default parser
pub fn combine_rules<S: AsRef<str>>(rules: &[S]) -> Result<Predicate> {
    RuleParser::new().combine(rules)
}

/// Left-fold already-parsed trees with AND, in input order
pub fn combine_nodes(nodes: Vec<Node>) -> Predicate {
    let mut iter = nodes.into_iter();
    match iter.next() {
        None => Predicate::Empty,
        Some(first) => Predicate::Rule(
            iter.fold(first, |combined, node| {
                Node::operator(LogicalOp::And, combined, node)
            }),
        ),
    }
}
