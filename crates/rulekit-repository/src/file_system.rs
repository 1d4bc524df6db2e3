//! File-system rule store
//!
//! One pretty-printed JSON document per rule, `<id>.json` under the store
//! root. Identifiers are restricted to a safe character set so they cannot
//! name paths outside the root directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use rulekit_core::Node;
use tokio::fs;

use crate::error::RepositoryError;
use crate::traits::RuleStore;
use crate::RepositoryResult;

/// File-system rule store
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`; the directory is created lazily on
    /// the first save
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, id: &str) -> RepositoryResult<PathBuf> {
        let safe = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !safe {
            return Err(RepositoryError::InvalidId { id: id.to_string() });
        }
        Ok(self.root.join(format!("{}.json", id)))
    }
}

#[async_trait]
impl RuleStore for FileStore {
    async fn save_rule(&self, id: &str, rule: &Node) -> RepositoryResult<()> {
        let path = self.path_for(id)?;
        fs::create_dir_all(&self.root).await?;
        let doc = serde_json::to_vec_pretty(rule)?;
        fs::write(&path, doc).await?;
        tracing::debug!(id, path = %path.display(), "rule saved to file store");
        Ok(())
    }

    async fn load_rule(&self, id: &str) -> RepositoryResult<Node> {
        let path = self.path_for(id)?;
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(RepositoryError::NotFound { id: id.to_string() })
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn delete_rule(&self, id: &str) -> RepositoryResult<()> {
        let path = self.path_for(id)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(id, "rule deleted from file store");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(RepositoryError::NotFound { id: id.to_string() })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn list_rules(&self) -> RepositoryResult<Vec<String>> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            // An unused store has no directory yet
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if let Some(id) = name.to_str().and_then(|n| n.strip_suffix(".json")) {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}
