mod common;

use credit_scoring::core::presenter;
use credit_scoring::domain::schema;
use credit_scoring::{ModelLoader, ScoreError, ScoreLabel, ScoringEngine};
use tempfile::TempDir;

#[test]
fn end_to_end_scoring_from_artifact_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = common::write_artifact(&dir);

    let loader = ModelLoader::new(path.to_str().unwrap());
    let handle = loader.load();
    assert!(handle.available());

    let engine = ScoringEngine::from_handle(handle);
    let report = engine.score(&common::sample_request()).unwrap();

    // The fixture ensemble routes Good credit mix + punctual payments to Good.
    assert_eq!(report.label, ScoreLabel::Good);
    assert_eq!(report.prediction.label, "Good");
    assert_eq!(report.guidance.category, ScoreLabel::Good);
    assert_eq!(report.prediction.scores.len(), 3);
    assert_eq!(report.name, "Ada");
}

#[test]
fn label_is_always_one_of_the_three_categories() {
    let dir = TempDir::new().unwrap();
    let path = common::write_artifact(&dir);
    let loader = ModelLoader::new(path.to_str().unwrap());
    let engine = ScoringEngine::from_handle(loader.load());

    let variations = [
        ("Good", 5),
        ("Standard", 5),
        ("Poor", 45),
    ];
    for (mix, delay) in variations {
        let mut request = common::sample_request();
        request
            .fields
            .insert("Credit_Mix".to_string(), serde_json::json!(mix));
        request
            .fields
            .insert("Delay_from_due_date".to_string(), serde_json::json!(delay));

        let report = engine.score(&request).unwrap();
        assert!(matches!(
            report.label,
            ScoreLabel::Good | ScoreLabel::Standard | ScoreLabel::Poor
        ));
        assert_eq!(presenter::guidance_for(report.label).category, report.label);
    }
}

#[test]
fn late_payments_with_poor_mix_score_poor() {
    let dir = TempDir::new().unwrap();
    let path = common::write_artifact(&dir);
    let loader = ModelLoader::new(path.to_str().unwrap());
    let engine = ScoringEngine::from_handle(loader.load());

    let mut request = common::sample_request();
    request
        .fields
        .insert("Credit_Mix".to_string(), serde_json::json!("Poor"));
    request
        .fields
        .insert("Delay_from_due_date".to_string(), serde_json::json!(50));
    request
        .fields
        .insert("Payment_of_Min_Amount".to_string(), serde_json::json!("No"));

    let report = engine.score(&request).unwrap();
    assert_eq!(report.label, ScoreLabel::Poor);
}

#[test]
fn missing_artifact_disables_the_predict_path() {
    let loader = ModelLoader::new("/nonexistent/credit_model.json");
    let handle = loader.load();
    assert!(!handle.available());

    let engine = ScoringEngine::from_handle(handle);
    assert!(!engine.is_ready());
    let err = engine.score(&common::sample_request()).unwrap_err();
    assert!(matches!(err, ScoreError::ModelUnavailable));
}

#[test]
fn built_record_has_all_schema_fields_and_the_joined_loan_value() {
    let request = common::sample_request();
    let record = credit_scoring::core::builder::build_record(&request).unwrap();

    assert_eq!(record.len(), schema::FIELDS.len());
    assert_eq!(
        record.get("Type_of_Loan").unwrap().as_text(),
        Some("Auto Loan")
    );
}
