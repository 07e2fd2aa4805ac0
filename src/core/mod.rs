pub mod builder;
pub mod engine;
pub mod presenter;
pub mod validator;

pub use crate::domain::model::{FeatureRecord, PredictionResult, ScoreReport, ScoreRequest};
pub use crate::domain::ports::{Classifier, ConfigProvider};
pub use crate::utils::error::Result;
