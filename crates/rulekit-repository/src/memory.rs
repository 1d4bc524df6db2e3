//! In-memory rule store
//!
//! Suitable for tests and development; rules are lost when the store is
//! dropped.

use std::collections::HashMap;

use async_trait::async_trait;
use rulekit_core::Node;
use tokio::sync::RwLock;

use crate::error::RepositoryError;
use crate::traits::RuleStore;
use crate::RepositoryResult;

/// In-memory rule store
pub struct MemoryStore {
    /// Map of rule id -> parsed tree
    rules: RwLock<HashMap<String, Node>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            rules: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RuleStore for MemoryStore {
    async fn save_rule(&self, id: &str, rule: &Node) -> RepositoryResult<()> {
        let mut rules = self.rules.write().await;
        rules.insert(id.to_string(), rule.clone());
        tracing::debug!(id, "rule saved to memory store");
        Ok(())
    }

    async fn load_rule(&self, id: &str) -> RepositoryResult<Node> {
        let rules = self.rules.read().await;
        rules
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })
    }

    async fn delete_rule(&self, id: &str) -> RepositoryResult<()> {
        let mut rules = self.rules.write().await;
        match rules.remove(id) {
            Some(_) => {
                tracing::debug!(id, "rule deleted from memory store");
                Ok(())
            }
            None => Err(RepositoryError::NotFound { id: id.to_string() }),
        }
    }

    async fn list_rules(&self) -> RepositoryResult<Vec<String>> {
        let rules = self.rules.read().await;
        let mut ids: Vec<String> = rules.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
