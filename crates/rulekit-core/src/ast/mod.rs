//! Abstract Syntax Tree (AST) definitions for rules
//!
//! This module contains the AST node definitions:
//! - `Node` and `Condition`, the binary rule tree
//! - `LogicalOp` and `Comparator` operator tags
//! - `Predicate`, the output of rule combination

pub mod node;
pub mod operator;
pub mod predicate;

pub use node::{Condition, Node};
pub use operator::{Comparator, LogicalOp};
pub use predicate::Predicate;
