use crate::utils::error::{Result, ScoreError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScoreError::ValidationError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ScoreError::ValidationError {
            field: field_name.to_string(),
            reason: format!("Value {} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}

pub fn validate_min<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
) -> Result<()> {
    if value < min {
        return Err(ScoreError::ValidationError {
            field: field_name.to_string(),
            reason: format!("Value {} must be at least {}", value, min),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ScoreError::ValidationError {
            field: field_name.to_string(),
            reason: format!(
                "Unsupported value '{}'. Allowed values: {}",
                value,
                allowed.join(", ")
            ),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ScoreError::SchemaError {
        field: field_name.to_string(),
    })
}

pub fn validate_artifact_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScoreError::ConfigError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(()),
        Some(other) => Err(ScoreError::ConfigError {
            field: field_name.to_string(),
            reason: format!("Unsupported artifact extension: {}. Expected: json", other),
        }),
        None => Err(ScoreError::ConfigError {
            field: field_name.to_string(),
            reason: "Artifact path has no extension".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("Age", 30, 18, 100).is_ok());
        assert!(validate_range("Age", 17, 18, 100).is_err());
        assert!(validate_range("Age", 101, 18, 100).is_err());
        assert!(validate_range("Interest_Rate", 12.0, 0.0, 50.0).is_ok());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("Credit_Mix", "Good", &["Good", "Standard", "Poor"]).is_ok());
        assert!(validate_one_of("Credit_Mix", "Great", &["Good", "Standard", "Poor"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Ada").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_artifact_path() {
        assert!(validate_artifact_path("model.path", "model/credit_model.json").is_ok());
        assert!(validate_artifact_path("model.path", "model/credit_model.pkl").is_err());
        assert!(validate_artifact_path("model.path", "").is_err());
    }
}
