//! Per-field domain validation of raw client input.
//!
//! The reference UI clamps these ranges in its widgets; a non-UI caller can
//! send anything, so the bounds are enforced here explicitly and treated as
//! contract.

use crate::domain::model::ScoreRequest;
use crate::domain::schema::{self, FieldKind};
use crate::utils::error::{Result, ScoreError};
use crate::utils::validation::{
    validate_min, validate_non_empty_string, validate_one_of, validate_range,
};
use serde_json::Value;

/// Checks every provided field against its documented domain and the
/// required free-text fields for presence. Missing schema fields are left to
/// the record builder, which reports them as schema errors.
pub fn validate_request(request: &ScoreRequest) -> Result<()> {
    validate_non_empty_string("name", &request.name)?;

    for selection in &request.loan_types {
        validate_one_of("loan_types", selection, schema::LOAN_TYPES)?;
    }

    for spec in &schema::FIELDS {
        if matches!(spec.kind, FieldKind::JoinedLoanTypes) {
            continue;
        }
        if let Some(value) = request.fields.get(spec.name) {
            validate_field(spec.name, &spec.kind, value)?;
        }
    }

    Ok(())
}

fn validate_field(name: &str, kind: &FieldKind, value: &Value) -> Result<()> {
    match kind {
        FieldKind::IntRange { min, max } => {
            let v = as_int(name, value)?;
            validate_range(name, v, *min, *max)
        }
        FieldKind::FloatRange { min, max } => {
            let v = as_float(name, value)?;
            validate_range(name, v, *min, *max)
        }
        FieldKind::MinFloat { min } => {
            let v = as_float(name, value)?;
            validate_min(name, v, *min)
        }
        FieldKind::AnyFloat => {
            as_float(name, value)?;
            Ok(())
        }
        FieldKind::OneOf(allowed) => {
            let v = as_str(name, value)?;
            validate_one_of(name, v, allowed)
        }
        FieldKind::JoinedLoanTypes => Ok(()),
    }
}

fn as_int(field: &str, value: &Value) -> Result<i64> {
    value.as_i64().ok_or_else(|| ScoreError::ValidationError {
        field: field.to_string(),
        reason: format!("Expected an integer, got {}", value),
    })
}

fn as_float(field: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| ScoreError::ValidationError {
        field: field.to_string(),
        reason: format!("Expected a number, got {}", value),
    })
}

fn as_str<'a>(field: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| ScoreError::ValidationError {
        field: field.to_string(),
        reason: format!("Expected a string, got {}", value),
    })
}
