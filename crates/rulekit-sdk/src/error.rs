//! SDK error types

use thiserror::Error;

/// SDK error, wrapping failures from the layers underneath
#[derive(Error, Debug)]
pub enum SdkError {
    /// Rule string rejected by the parser
    #[error("Rule parsing failed: {0}")]
    Parse(#[from] rulekit_parser::ParseError),

    /// Storage backend failure
    #[error("Rule storage failed: {0}")]
    Repository(#[from] rulekit_repository::RepositoryError),

    /// A record that is not a flat JSON object of scalars
    #[error("Invalid record: {0}")]
    Record(#[from] rulekit_core::CoreError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
