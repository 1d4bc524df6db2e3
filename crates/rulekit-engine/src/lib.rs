//! rulekit engine - rule evaluation
//!
//! Walks an AST against one flat data record and produces a boolean
//! verdict. Evaluation is pure and total: trees are immutable, the closed
//! AST type rules out malformed nodes, and every comparison over `Value`
//! is defined. Because a tree is read-only here, many callers can evaluate
//! the same tree concurrently, as long as its construction happened-before
//! the reads.

pub mod evaluator;
mod operators;

pub use evaluator::{evaluate, evaluate_predicate};
