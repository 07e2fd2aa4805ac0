use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_artifact_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "credit-scoring")]
#[command(about = "Predicts a borrower's credit score category from a JSON request")]
pub struct CliConfig {
    /// Path to the serialized classifier artifact
    #[arg(long, default_value = "model/credit_model.json")]
    pub model_path: String,

    /// JSON file holding one score request
    #[arg(long)]
    pub input: Option<String>,

    /// Print the factors affecting credit score and exit
    #[arg(long)]
    pub factors: bool,

    /// Optional TOML service config; its model path overrides --model-path
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_artifact_path("model_path", &self.model_path)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn model_path(&self) -> &str {
        &self.model_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
