//! rulekit SDK - high-level API for authoring, storing, and evaluating rules
//!
//! ```no_run
//! use rulekit_sdk::RuleEngine;
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let engine = RuleEngine::builder().build();
//!
//! engine
//!     .create_rule("eligibility", "age > 30 AND department = 'Sales'")
//!     .await?;
//!
//! let verdict = engine
//!     .evaluate_rule("eligibility", &json!({"age": 35, "department": "Sales"}))
//!     .await?;
//! assert!(verdict);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;

// Re-export main types
pub use builder::RuleEngineBuilder;
pub use config::StorageConfig;
pub use engine::RuleEngine;
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use rulekit_core::{Node, Predicate, Record, Value};
