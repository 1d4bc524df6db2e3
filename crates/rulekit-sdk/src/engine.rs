//! High-level rule engine facade
//!
//! Ties the parser, the evaluator, and a storage backend together behind
//! the operations a service layer needs: create a rule from its string
//! form, fetch and delete stored rules, combine stored rules into one
//! predicate, and evaluate against JSON records.

use rulekit_core::{record_from_json, Node, Predicate};
use rulekit_engine::{evaluate, evaluate_predicate};
use rulekit_parser::{combine_nodes, RuleParser};
use rulekit_repository::RuleStore;

use crate::builder::RuleEngineBuilder;
use crate::error::Result;

/// Authoring, storage, and evaluation of rules behind one API
pub struct RuleEngine {
    parser: RuleParser,
    store: Box<dyn RuleStore>,
}

impl RuleEngine {
    /// Start configuring an engine
    pub fn builder() -> RuleEngineBuilder {
        RuleEngineBuilder::new()
    }

    pub(crate) fn with_parts(parser: RuleParser, store: Box<dyn RuleStore>) -> Self {
        Self { parser, store }
    }

    /// Parse a rule string and persist its AST under `id`
    ///
    /// Returns the parsed tree; an invalid rule string leaves the store
    /// untouched.
    pub async fn create_rule(&self, id: &str, rule: &str) -> Result<Node> {
        let node = self.parser.parse_str(rule)?;
        self.store.save_rule(id, &node).await?;
        tracing::info!(id, "rule created");
        Ok(node)
    }

    /// Load a stored rule tree
    pub async fn get_rule(&self, id: &str) -> Result<Node> {
        Ok(self.store.load_rule(id).await?)
    }

    /// Delete a stored rule
    pub async fn delete_rule(&self, id: &str) -> Result<()> {
        self.store.delete_rule(id).await?;
        tracing::info!(id, "rule deleted");
        Ok(())
    }

    /// Identifiers of every stored rule, sorted
    pub async fn list_rules(&self) -> Result<Vec<String>> {
        Ok(self.store.list_rules().await?)
    }

    /// Combine stored rules into one predicate, ANDed in the given order
    ///
    /// An empty id list yields [`Predicate::Empty`], which evaluates to
    /// true; callers that consider an empty rule set a mistake should
    /// check [`Predicate::is_empty`] before evaluating.
    pub async fn combine_stored(&self, ids: &[&str]) -> Result<Predicate> {
        let mut nodes = Vec::with_capacity(ids.len());
        for id in ids {
            nodes.push(self.store.load_rule(id).await?);
        }
        Ok(combine_nodes(nodes))
    }

    /// Combine raw rule strings into one predicate
    pub fn combine_rules<S: AsRef<str>>(&self, rules: &[S]) -> Result<Predicate> {
        Ok(self.parser.combine(rules)?)
    }

    /// Evaluate one stored rule against a JSON object record
    pub async fn evaluate_rule(&self, id: &str, record: &serde_json::Value) -> Result<bool> {
        let node = self.store.load_rule(id).await?;
        let record = record_from_json(record)?;
        Ok(evaluate(&node, &record))
    }

    /// Evaluate a combined predicate against a JSON object record
    pub fn evaluate(&self, predicate: &Predicate, record: &serde_json::Value) -> Result<bool> {
        let record = record_from_json(record)?;
        Ok(evaluate_predicate(predicate, &record))
    }
}
