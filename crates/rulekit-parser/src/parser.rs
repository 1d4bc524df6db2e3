//! Recursive-descent rule parser
//!
//! Grammar, left-associative with no precedence between AND and OR:
//!
//! ```text
//! expression := condition { ("AND" | "OR") condition }
//! condition  := "(" expression ")" | field comparator literal
//! ```
//!
//! `a > 1 AND b > 2 OR c > 3` therefore parses as `(a>1 AND b>2) OR c>3`:
//! operators fold strictly left-to-right in the order encountered.

use rulekit_core::{Node, Value};

use crate::error::{ParseError, Result};
use crate::tokenizer::{tokenize, Token};

/// Default parenthesis nesting depth limit
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Rule parser with a configurable nesting depth limit
///
/// Rule strings are untrusted input and descent depth is call-stack depth,
/// so nesting past `max_depth` is rejected as malformed.
#[derive(Debug, Clone)]
pub struct RuleParser {
    max_depth: usize,
}

impl Default for RuleParser {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RuleParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom nesting depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Tokenize and parse one rule string
    pub fn parse_str(&self, rule: &str) -> Result<Node> {
        self.parse_tokens(&tokenize(rule))
    }

    /// Parse an already-tokenized rule
    pub fn parse_tokens(&self, tokens: &[Token]) -> Result<Node> {
        if tokens.is_empty() {
            return Err(ParseError::EmptyRule);
        }
        let mut cursor = Cursor {
            tokens,
            position: 0,
            max_depth: self.max_depth,
        };
        let node = cursor.expression(0)?;
        if let Some(extra) = cursor.peek() {
            return Err(ParseError::TrailingInput {
                token: extra.to_string(),
            });
        }
        Ok(node)
    }
}

struct Cursor<'a> {
    tokens: &'a [Token],
    position: usize,
    max_depth: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a Token> {
        let token = self
            .tokens
            .get(self.position)
            .ok_or(ParseError::UnexpectedEnd { expected })?;
        self.position += 1;
        Ok(token)
    }

    /// expression := condition { ("AND" | "OR") condition }
    fn expression(&mut self, depth: usize) -> Result<Node> {
        let mut left = self.condition(depth)?;
        while let Some(Token::Logical(op)) = self.peek() {
            let op = *op;
            self.position += 1;
            let right = self.condition(depth)?;
            left = Node::operator(op, left, right);
        }
        Ok(left)
    }

    /// condition := "(" expression ")" | field comparator literal
    fn condition(&mut self, depth: usize) -> Result<Node> {
        if depth >= self.max_depth {
            return Err(ParseError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        if let Some(Token::OpenParen) = self.peek() {
            self.position += 1;
            let expr = self.expression(depth + 1)?;
            match self.peek() {
                Some(Token::CloseParen) => {
                    self.position += 1;
                    Ok(expr)
                }
                _ => Err(ParseError::UnmatchedParenthesis),
            }
        } else {
            self.operand()
        }
    }

    /// Reads exactly three tokens: field, comparator, value literal
    fn operand(&mut self) -> Result<Node> {
        let field = match self.next("a field name")? {
            Token::Text(text) => text.clone(),
            other => {
                return Err(ParseError::UnexpectedToken {
                    token: other.to_string(),
                    expected: "a field name",
                })
            }
        };
        let comparator = match self.next("a comparator")? {
            Token::Comparator(cmp) => *cmp,
            other => {
                return Err(ParseError::UnexpectedToken {
                    token: other.to_string(),
                    expected: "a comparator",
                })
            }
        };
        let value = match self.next("a value literal")? {
            Token::Text(text) => literal_value(text),
            other => {
                return Err(ParseError::UnexpectedToken {
                    token: other.to_string(),
                    expected: "a value literal",
                })
            }
        };
        Ok(Node::operand(field, comparator, value))
    }
}

/// Numeric if the literal parses as a decimal number, otherwise a string
/// with one enclosing pair of single quotes stripped.
fn literal_value(text: &str) -> Value {
    if let Ok(number) = text.parse::<f64>() {
        return Value::Number(number);
    }
    let stripped = text
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(text);
    Value::String(stripped.to_string())
}
