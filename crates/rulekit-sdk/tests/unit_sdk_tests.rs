//! Unit tests for the high-level rule engine API

use rulekit_sdk::{RuleEngine, SdkError, StorageConfig};
use serde_json::json;
use tempfile::TempDir;

const ELIGIBILITY_RULE: &str = "((age > 30 AND department = 'Sales') OR (age < 25 AND department = 'Marketing')) AND (salary > 50000 OR experience > 5)";

#[tokio::test]
async fn test_create_and_evaluate_stored_rule() {
    let engine = RuleEngine::builder().build();
    engine
        .create_rule("eligibility", ELIGIBILITY_RULE)
        .await
        .unwrap();

    let verdict = engine
        .evaluate_rule(
            "eligibility",
            &json!({"age": 35, "department": "Sales", "salary": 60000, "experience": 3}),
        )
        .await
        .unwrap();
    assert!(verdict);

    let verdict = engine
        .evaluate_rule(
            "eligibility",
            &json!({"age": 35, "department": "Sales", "salary": 40000, "experience": 3}),
        )
        .await
        .unwrap();
    assert!(!verdict);
}

#[tokio::test]
async fn test_create_rejects_malformed_rule_without_storing() {
    let engine = RuleEngine::builder().build();
    let err = engine.create_rule("broken", "age >").await.unwrap_err();
    assert!(matches!(err, SdkError::Parse(_)));

    assert!(engine.list_rules().await.unwrap().is_empty());
    assert!(matches!(
        engine.get_rule("broken").await,
        Err(SdkError::Repository(_))
    ));
}

#[tokio::test]
async fn test_combine_stored_rules_is_their_conjunction() {
    let engine = RuleEngine::builder().build();
    engine.create_rule("age", "age > 30").await.unwrap();
    engine
        .create_rule("dept", "department = 'Sales'")
        .await
        .unwrap();

    let predicate = engine.combine_stored(&["age", "dept"]).await.unwrap();
    assert!(!predicate.is_empty());

    assert!(engine
        .evaluate(&predicate, &json!({"age": 35, "department": "Sales"}))
        .unwrap());
    assert!(!engine
        .evaluate(&predicate, &json!({"age": 35, "department": "Marketing"}))
        .unwrap());
    assert!(!engine
        .evaluate(&predicate, &json!({"age": 20, "department": "Sales"}))
        .unwrap());
}

#[tokio::test]
async fn test_combine_stored_with_no_ids_is_empty_and_permissive() {
    let engine = RuleEngine::builder().build();
    let predicate = engine.combine_stored(&[]).await.unwrap();

    // Explicitly observable, so a caller can reject it instead
    assert!(predicate.is_empty());
    assert!(engine.evaluate(&predicate, &json!({})).unwrap());
}

#[tokio::test]
async fn test_combine_stored_unknown_id_fails() {
    let engine = RuleEngine::builder().build();
    engine.create_rule("age", "age > 30").await.unwrap();
    assert!(matches!(
        engine.combine_stored(&["age", "ghost"]).await,
        Err(SdkError::Repository(_))
    ));
}

#[tokio::test]
async fn test_combine_raw_rule_strings() {
    let engine = RuleEngine::builder().build();
    let predicate = engine
        .combine_rules(&["age > 30", "experience <= 10"])
        .unwrap();

    assert!(engine
        .evaluate(&predicate, &json!({"age": 40, "experience": 5}))
        .unwrap());
    assert!(!engine
        .evaluate(&predicate, &json!({"age": 40, "experience": 11}))
        .unwrap());
}

#[tokio::test]
async fn test_non_object_record_is_rejected() {
    let engine = RuleEngine::builder().build();
    engine.create_rule("age", "age > 30").await.unwrap();

    let err = engine
        .evaluate_rule("age", &json!([1, 2, 3]))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Record(_)));
}

#[tokio::test]
async fn test_file_backed_engine_persists_across_instances() {
    let dir = TempDir::new().unwrap();

    {
        let engine = RuleEngine::builder()
            .with_storage(StorageConfig::file_system(dir.path()))
            .build();
        engine
            .create_rule("eligibility", ELIGIBILITY_RULE)
            .await
            .unwrap();
    }

    let engine = RuleEngine::builder()
        .with_storage(StorageConfig::file_system(dir.path()))
        .build();
    assert_eq!(engine.list_rules().await.unwrap(), vec!["eligibility"]);

    let verdict = engine
        .evaluate_rule(
            "eligibility",
            &json!({"age": 23, "department": "Marketing", "salary": 30000, "experience": 7}),
        )
        .await
        .unwrap();
    assert!(verdict);
}

#[tokio::test]
async fn test_builder_depth_limit_applies() {
    let engine = RuleEngine::builder().with_max_depth(2).build();
    assert!(engine.create_rule("ok", "(age > 30)").await.is_ok());
    assert!(engine.create_rule("deep", "(((age > 30)))").await.is_err());
}

#[tokio::test]
async fn test_delete_then_evaluate_fails() {
    let engine = RuleEngine::builder().build();
    engine.create_rule("r", "age > 30").await.unwrap();
    engine.delete_rule("r").await.unwrap();

    assert!(matches!(
        engine.evaluate_rule("r", &json!({"age": 40})).await,
        Err(SdkError::Repository(_))
    ));
}
