mod common;

use credit_scoring::core::builder;
use credit_scoring::domain::ports::Classifier;
use credit_scoring::domain::schema;
use credit_scoring::{GbdtModel, ModelLoader, ScoreError, ScoringEngine};
use tempfile::TempDir;

#[test]
fn predict_rejects_any_other_categorical_set() {
    let model = GbdtModel::from_artifact(common::sample_artifact()).unwrap();
    let record = builder::build_record(&common::sample_request()).unwrap();

    let mut missing_one = schema::categorical_field_set();
    missing_one.remove("Type_of_Loan");
    assert!(matches!(
        model.predict(&record, &missing_one),
        Err(ScoreError::InferenceError { .. })
    ));

    let mut extra_one = schema::categorical_field_set();
    extra_one.insert("Age".to_string());
    assert!(matches!(
        model.predict(&record, &extra_one),
        Err(ScoreError::InferenceError { .. })
    ));

    assert!(model
        .predict(&record, &schema::categorical_field_set())
        .is_ok());
}

#[test]
fn artifact_contract_skew_is_rejected_at_scoring_time() {
    // An artifact trained with a different categorical contract must not be
    // served against this schema.
    let mut artifact = common::sample_artifact();
    artifact.categorical_features.pop();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("credit_model.json");
    std::fs::write(&path, serde_json::to_string(&artifact).unwrap()).unwrap();

    let loader = ModelLoader::new(path.to_str().unwrap());
    let engine = ScoringEngine::from_handle(loader.load());
    let err = engine.score(&common::sample_request()).unwrap_err();
    assert!(matches!(err, ScoreError::InferenceError { .. }));
}

#[test]
fn contract_is_exposed_from_the_artifact() {
    let model = GbdtModel::from_artifact(common::sample_artifact()).unwrap();
    assert_eq!(
        *model.categorical_contract(),
        schema::categorical_field_set()
    );
    assert_eq!(model.classes(), ["Good", "Standard", "Poor"]);
}
