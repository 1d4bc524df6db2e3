//! rulekit core - shared types for the rulekit rule engine
//!
//! This crate provides the fundamental types used across the rulekit
//! workspace:
//! - `Value` runtime scalars and flat data records
//! - The rule AST (`Node`, `Condition`, `Predicate`)
//! - Operator tags (`LogicalOp`, `Comparator`)
//! - Error types

pub mod ast;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use ast::{Comparator, Condition, LogicalOp, Node, Predicate};
pub use error::CoreError;
pub use types::{record_from_json, Record, Value};
