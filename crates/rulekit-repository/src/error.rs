//! Error types for the repository layer

use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No rule stored under the identifier
    #[error("Rule not found: {id}")]
    NotFound { id: String },

    /// Identifier outside the allowed character set
    #[error("Invalid rule id: {id}")]
    InvalidId { id: String },

    /// I/O error from the file-system backend
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document that is not a valid rule tree
    #[error("Failed to decode rule document: {0}")]
    Document(#[from] serde_json::Error),
}
