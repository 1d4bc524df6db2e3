//! Error types for rulekit core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unknown logical operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown comparison operator: {0}")]
    UnknownComparator(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
