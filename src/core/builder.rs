//! Assembles validated raw input into the canonical feature record.

use crate::domain::model::{FeatureRecord, FieldValue, ScoreRequest};
use crate::domain::schema::{self, FieldKind};
use crate::utils::error::{Result, ScoreError};
use serde_json::Value;

/// Builds the 23-field record in schema order. Every field maps 1:1 by name
/// except `Type_of_Loan`, which is derived from the loan selections. Missing
/// fields are schema errors; nothing is defaulted.
pub fn build_record(request: &ScoreRequest) -> Result<FeatureRecord> {
    let loan_value = join_loan_types(&request.loan_types);

    let mut fields = Vec::with_capacity(schema::FIELDS.len());
    for spec in &schema::FIELDS {
        let value = match spec.kind {
            FieldKind::JoinedLoanTypes => FieldValue::Text(loan_value.clone()),
            _ => {
                let raw = request
                    .fields
                    .get(spec.name)
                    .ok_or_else(|| ScoreError::SchemaError {
                        field: spec.name.to_string(),
                    })?;
                convert(spec.name, &spec.kind, raw)?
            }
        };
        fields.push((spec.name.to_string(), value));
    }

    Ok(FeatureRecord::new(fields))
}

/// The joined string is part of the model's categorical vocabulary: empty
/// selections become the literal "No Loan", otherwise the selections are
/// joined with ", " in the order given, never sorted.
pub fn join_loan_types(selections: &[String]) -> String {
    if selections.is_empty() {
        schema::NO_LOAN.to_string()
    } else {
        selections.join(schema::LOAN_JOIN_SEPARATOR)
    }
}

fn convert(name: &str, kind: &FieldKind, raw: &Value) -> Result<FieldValue> {
    let mismatch = |expected: &str| ScoreError::ValidationError {
        field: name.to_string(),
        reason: format!("Expected {}, got {}", expected, raw),
    };

    match kind {
        FieldKind::IntRange { .. } => raw
            .as_i64()
            .map(FieldValue::Int)
            .ok_or_else(|| mismatch("an integer")),
        FieldKind::FloatRange { .. } | FieldKind::MinFloat { .. } | FieldKind::AnyFloat => raw
            .as_f64()
            .map(FieldValue::Float)
            .ok_or_else(|| mismatch("a number")),
        FieldKind::OneOf(_) => raw
            .as_str()
            .map(|s| FieldValue::Text(s.to_string()))
            .ok_or_else(|| mismatch("a string")),
        FieldKind::JoinedLoanTypes => unreachable!("derived field is built from loan selections"),
    }
}
