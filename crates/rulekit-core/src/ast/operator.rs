//! Operator tags for rule expressions
//!
//! Both tags serialize as their textual form (`"AND"`, `">="`, ...), so a
//! stored document carrying a tag outside the closed set fails to
//! deserialize with [`CoreError::UnknownOperator`] or
//! [`CoreError::UnknownComparator`] instead of producing a malformed tree.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Logical combination of two sub-trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogicalOp {
    /// Logical AND
    And,
    /// Logical OR
    Or,
}

impl LogicalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

impl FromStr for LogicalOp {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "AND" => Ok(LogicalOp::And),
            "OR" => Ok(LogicalOp::Or),
            other => Err(CoreError::UnknownOperator(other.to_string())),
        }
    }
}

impl TryFrom<String> for LogicalOp {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, CoreError> {
        s.parse()
    }
}

impl From<LogicalOp> for String {
    fn from(op: LogicalOp) -> String {
        op.as_str().to_string()
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator of a leaf condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Comparator {
    /// Greater than (>)
    Gt,
    /// Less than (<)
    Lt,
    /// Equal (=)
    Eq,
    /// Greater than or equal (>=)
    Ge,
    /// Less than or equal (<=)
    Le,
    /// Not equal (!=)
    Ne,
}

impl Comparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Gt => ">",
            Comparator::Lt => "<",
            Comparator::Eq => "=",
            Comparator::Ge => ">=",
            Comparator::Le => "<=",
            Comparator::Ne => "!=",
        }
    }

    /// Returns true for the ordering comparators (`>` `<` `>=` `<=`)
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Comparator::Gt | Comparator::Lt | Comparator::Ge | Comparator::Le
        )
    }

    /// Returns true for `=` and `!=`
    pub fn is_equality(&self) -> bool {
        matches!(self, Comparator::Eq | Comparator::Ne)
    }

    /// Whether an ordering between two operands satisfies this comparator
    pub fn matches(&self, ord: Ordering) -> bool {
        match self {
            Comparator::Gt => ord == Ordering::Greater,
            Comparator::Lt => ord == Ordering::Less,
            Comparator::Ge => ord != Ordering::Less,
            Comparator::Le => ord != Ordering::Greater,
            Comparator::Eq => ord == Ordering::Equal,
            Comparator::Ne => ord != Ordering::Equal,
        }
    }
}

impl FromStr for Comparator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            ">" => Ok(Comparator::Gt),
            "<" => Ok(Comparator::Lt),
            "=" => Ok(Comparator::Eq),
            ">=" => Ok(Comparator::Ge),
            "<=" => Ok(Comparator::Le),
            "!=" => Ok(Comparator::Ne),
            other => Err(CoreError::UnknownComparator(other.to_string())),
        }
    }
}

impl TryFrom<String> for Comparator {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, CoreError> {
        s.parse()
    }
}

impl From<Comparator> for String {
    fn from(cmp: Comparator) -> String {
        cmp.as_str().to_string()
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
