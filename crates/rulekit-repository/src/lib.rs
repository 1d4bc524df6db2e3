//! rulekit repository - persistence for rule ASTs
//!
//! Stores parsed rule trees as JSON documents keyed by identifier, using
//! the AST document format from `rulekit-core`. Two backends: an in-memory
//! store for tests and development, and a file-system store with one
//! document per rule. A corrupted stored document fails on load instead of
//! producing a malformed tree.

pub mod error;
pub mod file_system;
pub mod memory;
pub mod traits;

pub use error::{RepositoryError, RepositoryResult};
pub use file_system::FileStore;
pub use memory::MemoryStore;
pub use traits::RuleStore;
