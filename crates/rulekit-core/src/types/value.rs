//! Runtime value types for rule evaluation
//!
//! `Value` represents every scalar a data record can hold. Records are
//! flat mappings from field name to scalar; nested JSON objects and arrays
//! are rejected at the boundary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::CoreError;

/// Runtime scalar value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent / missing field
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 handles both int and float)
    Number(f64),
    /// String value
    String(String),
}

/// One subject record: a flat mapping from field name to scalar
pub type Record = HashMap<String, Value>;

impl Value {
    /// Human-readable type name, used in messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = CoreError;

    fn try_from(v: &serde_json::Value) -> Result<Self, CoreError> {
        match v {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Value::Number)
                .ok_or_else(|| CoreError::InvalidValue(format!("number out of range: {}", n))),
            serde_json::Value::String(s) => Ok(Value::String(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(
                CoreError::InvalidValue("records hold scalars only".to_string()),
            ),
        }
    }
}

/// Convert a JSON object into a flat [`Record`]
pub fn record_from_json(json: &serde_json::Value) -> Result<Record, CoreError> {
    let map = json
        .as_object()
        .ok_or_else(|| CoreError::InvalidValue("expected a JSON object record".to_string()))?;
    map.iter()
        .map(|(k, v)| Ok((k.clone(), Value::try_from(v)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_equality_is_type_strict() {
        assert_ne!(Value::Number(5.0), Value::String("5".to_string()));
        assert_ne!(Value::Bool(true), Value::Number(1.0));
        assert_eq!(Value::Number(5.0), Value::Number(5.0));
    }

    #[test]
    fn test_value_serde_untagged() {
        let val: Value = serde_json::from_str("42").unwrap();
        assert_eq!(val, Value::Number(42.0));

        let val: Value = serde_json::from_str("\"Sales\"").unwrap();
        assert_eq!(val, Value::String("Sales".to_string()));

        let val: Value = serde_json::from_str("true").unwrap();
        assert_eq!(val, Value::Bool(true));

        assert_eq!(serde_json::to_string(&Value::Number(60000.0)).unwrap(), "60000.0");
    }

    #[test]
    fn test_record_from_json_object() {
        let record = record_from_json(&json!({
            "age": 35,
            "department": "Sales",
            "active": true
        }))
        .unwrap();

        assert_eq!(record.get("age"), Some(&Value::Number(35.0)));
        assert_eq!(record.get("department"), Some(&Value::String("Sales".to_string())));
        assert_eq!(record.get("active"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_record_from_json_rejects_nesting() {
        assert!(record_from_json(&json!({"tags": ["a", "b"]})).is_err());
        assert!(record_from_json(&json!({"user": {"age": 1}})).is_err());
        assert!(record_from_json(&json!([1, 2, 3])).is_err());
    }
}
