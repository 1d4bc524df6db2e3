//! Rule string tokenizer
//!
//! Single left-to-right scan. A single quote toggles literal mode: inside a
//! literal every character, spaces and parentheses included, accumulates
//! verbatim and the quotes stay attached (they are stripped later when the
//! operand is built). An unterminated quote swallows the rest of the input
//! into one token; structural validation is the parser's job, not ours.

use std::fmt;
use std::str::FromStr;

use rulekit_core::{Comparator, LogicalOp};

/// One lexical unit of a rule string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier or literal text; quoted literals keep their quotes
    Text(String),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `AND` / `OR`
    Logical(LogicalOp),
    /// `>` `<` `=` `>=` `<=` `!=`
    Comparator(Comparator),
}

impl Token {
    /// Classify a flushed pending token by its exact text. `AND`/`OR` are
    /// case-sensitive; a quoted `'AND'` stays text because the quotes are
    /// still attached. A bare `!` is not a recognized comparator and stays
    /// text as well.
    fn classify(text: String) -> Token {
        if let Ok(op) = LogicalOp::from_str(&text) {
            return Token::Logical(op);
        }
        if let Ok(cmp) = Comparator::from_str(&text) {
            return Token::Comparator(cmp);
        }
        Token::Text(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => f.write_str(text),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
            Token::Logical(op) => f.write_str(op.as_str()),
            Token::Comparator(cmp) => f.write_str(cmp.as_str()),
        }
    }
}

/// Split a rule string into tokens
pub fn tokenize(rule: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = rule.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\'' {
            in_quotes = !in_quotes;
            current.push(ch);
            continue;
        }
        if in_quotes {
            current.push(ch);
            continue;
        }
        match ch {
            ' ' => flush(&mut tokens, &mut current),
            '(' => {
                flush(&mut tokens, &mut current);
                tokens.push(Token::OpenParen);
            }
            ')' => {
                flush(&mut tokens, &mut current);
                tokens.push(Token::CloseParen);
            }
            // `>` `<` `!` start a comparator; a following `=` belongs to it
            '>' | '<' | '!' => {
                flush(&mut tokens, &mut current);
                let mut op = String::from(ch);
                if chars.peek() == Some(&'=') {
                    chars.next();
                    op.push('=');
                }
                tokens.push(Token::classify(op));
            }
            _ => current.push(ch),
        }
    }
    flush(&mut tokens, &mut current);
    tokens
}

/// Terminate the pending token, dropping whitespace-only text
fn flush(tokens: &mut Vec<Token>, current: &mut String) {
    if current.trim().is_empty() {
        current.clear();
    } else {
        tokens.push(Token::classify(std::mem::take(current)));
    }
}
