//! Storage trait for rule ASTs

use async_trait::async_trait;
use rulekit_core::Node;

use crate::RepositoryResult;

/// Rule storage backend
///
/// Stored documents use the AST document format, so whatever the backend,
/// a corrupted document fails on load rather than producing a malformed
/// tree. All implementations must be `Send + Sync` for use across async
/// tasks.
#[async_trait]
pub trait RuleStore: Send + Sync {
    /// Persist a rule tree under an identifier, replacing any existing one
    async fn save_rule(&self, id: &str, rule: &Node) -> RepositoryResult<()>;

    /// Load a rule tree by identifier
    async fn load_rule(&self, id: &str) -> RepositoryResult<Node>;

    /// Delete a stored rule; deleting an unknown id is `NotFound`
    async fn delete_rule(&self, id: &str) -> RepositoryResult<()>;

    /// Identifiers of every stored rule, sorted
    async fn list_rules(&self) -> RepositoryResult<Vec<String>>;
}
