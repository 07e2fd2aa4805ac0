use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Validation failed for '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Feature record is missing required field '{field}'")]
    SchemaError { field: String },

    #[error("Classifier model is not available")]
    ModelUnavailable,

    #[error("Inference failed: {message}")]
    InferenceError { message: String },

    #[error("Classifier returned unrecognized label '{label}'")]
    PresenterError { label: String },

    #[error("Configuration error for '{field}': {reason}")]
    ConfigError { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Model,
    Config,
    Io,
}

impl ScoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScoreError::ValidationError { .. } | ScoreError::SchemaError { .. } => {
                ErrorCategory::Input
            }
            ScoreError::ModelUnavailable
            | ScoreError::InferenceError { .. }
            | ScoreError::PresenterError { .. } => ErrorCategory::Model,
            ScoreError::ConfigError { .. } => ErrorCategory::Config,
            ScoreError::IoError(_) | ScoreError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ScoreError::ValidationError { .. } | ScoreError::SchemaError { .. } => {
                ErrorSeverity::Medium
            }
            ScoreError::InferenceError { .. } => ErrorSeverity::High,
            ScoreError::ModelUnavailable | ScoreError::PresenterError { .. } => {
                ErrorSeverity::Critical
            }
            ScoreError::ConfigError { .. } => ErrorSeverity::High,
            ScoreError::IoError(_) | ScoreError::SerializationError(_) => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScoreError::ValidationError { field, reason } => {
                format!("The value for '{}' is not acceptable: {}", field, reason)
            }
            ScoreError::SchemaError { field } => {
                format!("Required field '{}' was not provided", field)
            }
            ScoreError::ModelUnavailable => {
                "The credit score model could not be loaded; predictions are disabled".to_string()
            }
            ScoreError::InferenceError { message } => {
                format!("The prediction could not be computed: {}", message)
            }
            ScoreError::PresenterError { label } => {
                format!("The model produced an unexpected category '{}'", label)
            }
            ScoreError::ConfigError { field, reason } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Input => {
                "Correct the reported field and submit the request again".to_string()
            }
            ErrorCategory::Model => match self {
                ScoreError::ModelUnavailable => {
                    "Check that the model artifact path points to a readable JSON artifact"
                        .to_string()
                }
                _ => "Verify that the model artifact and serving code share the same schema"
                    .to_string(),
            },
            ErrorCategory::Config => {
                "Review the configuration file or CLI flags for the reported field".to_string()
            }
            ErrorCategory::Io => "Check file paths and permissions, then retry".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_caller_correctable() {
        let err = ScoreError::ValidationError {
            field: "Age".to_string(),
            reason: "out of range".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("Age"));
    }

    #[test]
    fn model_unavailable_is_critical() {
        assert_eq!(
            ScoreError::ModelUnavailable.severity(),
            ErrorSeverity::Critical
        );
    }

    #[test]
    fn schema_error_names_the_field() {
        let err = ScoreError::SchemaError {
            field: "Monthly_Balance".to_string(),
        };
        assert!(err.to_string().contains("Monthly_Balance"));
    }
}
