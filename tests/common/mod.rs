use chrono::Utc;
use credit_scoring::domain::schema;
use credit_scoring::model::{ModelArtifact, ModelMetadata, Node, Tree};
use credit_scoring::ScoreRequest;
use std::path::PathBuf;

/// A small deterministic ensemble over the real schema: credit mix and
/// payment punctuality dominate, late payments push toward Poor.
pub fn sample_artifact() -> ModelArtifact {
    ModelArtifact {
        metadata: ModelMetadata {
            name: "credit-score".to_string(),
            version: "1.0.0".to_string(),
            trained_at: Utc::now(),
        },
        classes: vec![
            "Good".to_string(),
            "Standard".to_string(),
            "Poor".to_string(),
        ],
        categorical_features: schema::CATEGORICAL_FIELDS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        base_score: vec![0.0, 0.0, 0.0],
        trees: vec![
            Tree {
                nodes: vec![
                    Node::CategorySplit {
                        feature: "Credit_Mix".to_string(),
                        categories: vec!["Good".to_string()],
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf {
                        value: vec![2.0, 0.0, 0.0],
                    },
                    Node::NumericSplit {
                        feature: "Delay_from_due_date".to_string(),
                        threshold: 30.0,
                        left: 3,
                        right: 4,
                    },
                    Node::Leaf {
                        value: vec![0.0, 1.0, 0.0],
                    },
                    Node::Leaf {
                        value: vec![0.0, 0.0, 2.0],
                    },
                ],
            },
            Tree {
                nodes: vec![
                    Node::CategorySplit {
                        feature: "Payment_of_Min_Amount".to_string(),
                        categories: vec!["Yes".to_string()],
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf {
                        value: vec![0.5, 0.0, 0.0],
                    },
                    Node::Leaf {
                        value: vec![0.0, 0.0, 0.5],
                    },
                ],
            },
        ],
    }
}

pub fn write_artifact(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("credit_model.json");
    let json = serde_json::to_string_pretty(&sample_artifact()).unwrap();
    std::fs::write(&path, json).unwrap();
    path
}

/// The reference form defaults: Age 30, Engineer, one auto loan.
pub fn sample_request() -> ScoreRequest {
    serde_json::from_value(serde_json::json!({
        "name": "Ada",
        "loan_types": ["Auto Loan"],
        "Month": 1,
        "Age": 30,
        "Occupation": "Engineer",
        "Annual_Income": 50000.0,
        "Monthly_Inhand_Salary": 4000.0,
        "Num_Bank_Accounts": 3,
        "Num_Credit_Card": 2,
        "Interest_Rate": 12.0,
        "Num_of_Loan": 2,
        "Delay_from_due_date": 5,
        "Num_of_Delayed_Payment": 3,
        "Changed_Credit_Limit": 500.0,
        "Num_Credit_Inquiries": 2,
        "Credit_Mix": "Good",
        "Outstanding_Debt": 1500.0,
        "Credit_Utilization_Ratio": 25.0,
        "Credit_History_Age": 200,
        "Payment_of_Min_Amount": "Yes",
        "Total_EMI_per_month": 200.0,
        "Amount_invested_monthly": 100.0,
        "Payment_Behaviour": "Low_spent_Small_value_payments",
        "Monthly_Balance": 800.0
    }))
    .unwrap()
}
