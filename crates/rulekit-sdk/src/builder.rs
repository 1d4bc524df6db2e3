//! Builder for [`RuleEngine`]

use rulekit_parser::{RuleParser, DEFAULT_MAX_DEPTH};
use rulekit_repository::{FileStore, MemoryStore, RuleStore};

use crate::config::StorageConfig;
use crate::engine::RuleEngine;

/// Configures and builds a [`RuleEngine`]
#[derive(Debug, Default)]
pub struct RuleEngineBuilder {
    storage: StorageConfig,
    max_depth: Option<usize>,
}

impl RuleEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the storage backend (in-memory by default)
    pub fn with_storage(mut self, storage: StorageConfig) -> Self {
        self.storage = storage;
        self
    }

    /// Override the parser's nesting depth limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Build the engine
    pub fn build(self) -> RuleEngine {
        let store: Box<dyn RuleStore> = match self.storage {
            StorageConfig::Memory => Box::new(MemoryStore::new()),
            StorageConfig::FileSystem { root } => Box::new(FileStore::new(root)),
        };
        let parser = RuleParser::with_max_depth(self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH));
        RuleEngine::with_parts(parser, store)
    }
}
