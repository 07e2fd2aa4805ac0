use crate::utils::error::{Result, ScoreError};
use crate::utils::validation::validate_artifact_path;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceConfig,
    pub model: ModelConfig,
    pub logging: Option<LoggingConfig>,
    pub environment: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub path: String,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScoreError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScoreError::ConfigError {
            field: "toml_parsing".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitutes `${VAR_NAME}` references with environment values, leaving
    /// unresolved references intact.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("valid env-var pattern");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_artifact_path("model.path", &self.model.path)?;

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.log_level {
                let valid_levels = ["error", "warn", "info", "debug", "trace"];
                if !valid_levels.contains(&level.as_str()) {
                    return Err(ScoreError::ConfigError {
                        field: "logging.log_level".to_string(),
                        reason: format!(
                            "Unsupported level '{}'. Valid levels: {}",
                            level,
                            valid_levels.join(", ")
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn model_path(&self) -> &str {
        &self.model.path
    }

    pub fn output_path(&self) -> &str {
        self.model.output_path.as_deref().unwrap_or("./output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[service]
name = "credit-scoring"
version = "0.1.0"

[model]
path = "model/credit_model.json"

[logging]
verbose = true
log_level = "debug"
"#;

    #[test]
    fn parses_and_validates_a_full_config() {
        let config = TomlConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.service.name, "credit-scoring");
        assert_eq!(config.model_path(), "model/credit_model.json");
        assert!(config.validate_config().is_ok());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let content = SAMPLE.replace("debug", "chatty");
        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn rejects_non_json_artifact_path() {
        let content = SAMPLE.replace("credit_model.json", "credit_model.pkl");
        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("CREDIT_MODEL_DIR", "/srv/models");
        let content = SAMPLE.replace("model/credit_model.json", "${CREDIT_MODEL_DIR}/m.json");
        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.model_path(), "/srv/models/m.json");
    }

    #[test]
    fn leaves_unresolved_variables_intact() {
        let content = SAMPLE.replace(
            "model/credit_model.json",
            "${DEFINITELY_NOT_SET_12345}/m.json",
        );
        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert!(config.model_path().starts_with("${DEFINITELY_NOT_SET_12345}"));
    }
}
