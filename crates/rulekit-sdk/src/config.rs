//! Engine configuration

use std::path::PathBuf;

/// Where the engine persists rule ASTs
#[derive(Debug, Clone, Default)]
pub enum StorageConfig {
    /// In-memory storage, lost when the engine is dropped
    #[default]
    Memory,
    /// One JSON document per rule under the given directory
    FileSystem { root: PathBuf },
}

impl StorageConfig {
    /// File-system storage rooted at `root`
    pub fn file_system(root: impl Into<PathBuf>) -> Self {
        StorageConfig::FileSystem { root: root.into() }
    }
}
