//! Runtime value types

pub mod value;

pub use value::{record_from_json, Record, Value};
