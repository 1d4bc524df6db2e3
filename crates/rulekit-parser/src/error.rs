//! Parser error types

use thiserror::Error;

/// Malformed-rule errors raised while parsing
///
/// Every structural defect is an error: running past the end of the token
/// sequence, an unmatched opening parenthesis, trailing tokens after a
/// complete expression, and nesting beyond the configured depth limit are
/// all rejected uniformly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The rule string produced no tokens at all
    #[error("Malformed rule: empty rule string")]
    EmptyRule,

    /// The token sequence ended where more input was required
    #[error("Malformed rule: unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    /// A token that does not fit the grammar at this position
    #[error("Malformed rule: unexpected token '{token}', expected {expected}")]
    UnexpectedToken {
        token: String,
        expected: &'static str,
    },

    /// An opening parenthesis without a matching closing one
    #[error("Malformed rule: unmatched opening parenthesis")]
    UnmatchedParenthesis,

    /// Tokens left over after a complete expression
    #[error("Malformed rule: trailing input after expression: '{token}'")]
    TrailingInput { token: String },

    /// Nesting beyond the configured depth limit
    #[error("Malformed rule: nesting depth exceeds limit of {limit}")]
    DepthExceeded { limit: usize },
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
