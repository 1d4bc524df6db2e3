//! rulekit parser - rule strings to AST
//!
//! This crate turns rule strings like
//! `(age > 30 AND department = 'Sales') OR (experience > 5)` into
//! `rulekit-core` AST trees, and folds several parsed rules into one
//! combined predicate.

pub mod combiner;
pub mod error;
pub mod parser;
pub mod tokenizer;

// Re-export main parser types
pub use combiner::{combine_nodes, combine_rules};
pub use error::{ParseError, Result};
pub use parser::{RuleParser, DEFAULT_MAX_DEPTH};
pub use tokenizer::{tokenize, Token};

/// Parse one rule string with the default depth limit
pub fn parse_rule(rule: &str) -> Result<rulekit_core::Node> {
    RuleParser::new().parse_str(rule)
}
