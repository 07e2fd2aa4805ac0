use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single value inside a feature record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

/// The fixed-schema row of values submitted for one inference call.
/// Fields are kept in schema order; every schema field is present by
/// construction (the builder fails otherwise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    fields: Vec<(String, FieldValue)>,
}

impl FeatureRecord {
    pub fn new(fields: Vec<(String, FieldValue)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Names of the fields currently holding text values, in schema order.
    pub fn text_field_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, value)| matches!(value, FieldValue::Text(_)))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Raw client input for one scoring call: the borrower's name, the loan-type
/// selections, and the flat field map exactly as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub name: String,
    #[serde(default)]
    pub loan_types: Vec<String>,
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

/// Output of one forward pass of the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    /// The predicted class label, as emitted by the model.
    pub label: String,
    /// Accumulated per-class scores, in the artifact's class order.
    pub scores: Vec<f64>,
}

/// The three credit-score categories the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreLabel {
    Good,
    Standard,
    Poor,
}

impl ScoreLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Good => "Good",
            ScoreLabel::Standard => "Standard",
            ScoreLabel::Poor => "Poor",
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final result handed back to the caller: the category, the raw model
/// output, and the guidance bundle picked for the category. The caller owns
/// this value and passes it to whichever view needs it.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub name: String,
    pub label: ScoreLabel,
    pub prediction: PredictionResult,
    pub guidance: &'static crate::core::presenter::GuidanceBundle,
}
