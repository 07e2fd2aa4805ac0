pub mod config;
pub mod core;
pub mod domain;
pub mod model;
pub mod utils;

pub use config::{CliConfig, TomlConfig};
pub use core::engine::ScoringEngine;
pub use domain::model::{
    FeatureRecord, FieldValue, PredictionResult, ScoreLabel, ScoreReport, ScoreRequest,
};
pub use model::{GbdtModel, ModelHandle, ModelLoader};
pub use utils::error::{Result, ScoreError};
