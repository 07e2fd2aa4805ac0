use crate::domain::model::{FeatureRecord, PredictionResult};
use crate::utils::error::Result;
use std::collections::BTreeSet;

/// A loaded classifier able to score one feature record at a time.
///
/// `predict` takes the caller's categorical field set explicitly: the
/// underlying boosted-tree model needs categorical columns tagged, and a
/// silent mismatch produces wrong predictions rather than errors, so the set
/// is a checked contract instead of being inferred at call time.
pub trait Classifier: Send + Sync {
    /// Class labels, in score order.
    fn classes(&self) -> &[String];

    /// The categorical-feature contract embedded in the model artifact.
    fn categorical_contract(&self) -> &BTreeSet<String>;

    /// One forward pass. Single attempt, no retries.
    fn predict(
        &self,
        record: &FeatureRecord,
        categorical_fields: &BTreeSet<String>,
    ) -> Result<PredictionResult>;
}

pub trait ConfigProvider: Send + Sync {
    fn model_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn verbose(&self) -> bool;
}
