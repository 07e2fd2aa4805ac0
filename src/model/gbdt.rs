//! Gradient-boosted tree ensemble inference.

use crate::domain::model::{FeatureRecord, FieldValue, PredictionResult};
use crate::domain::ports::Classifier;
use crate::model::artifact::{ModelArtifact, Node, Tree};
use crate::utils::error::{Result, ScoreError};
use std::collections::BTreeSet;

/// A loaded, immutable classifier. Construction validates the artifact;
/// after that every call is a pure function of the record.
#[derive(Debug)]
pub struct GbdtModel {
    artifact: ModelArtifact,
    categorical: BTreeSet<String>,
}

impl GbdtModel {
    pub fn from_artifact(artifact: ModelArtifact) -> std::result::Result<Self, String> {
        artifact.check()?;
        let categorical = artifact
            .categorical_features
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>();
        Ok(Self {
            artifact,
            categorical,
        })
    }

    pub fn metadata(&self) -> &crate::model::artifact::ModelMetadata {
        &self.artifact.metadata
    }

    /// The categorical set must match the artifact contract and the record's
    /// actual text-valued fields. Rejecting here keeps a skewed caller from
    /// silently mis-encoding columns.
    fn check_categorical_contract(
        &self,
        record: &FeatureRecord,
        categorical_fields: &BTreeSet<String>,
    ) -> Result<()> {
        if *categorical_fields != self.categorical {
            return Err(ScoreError::InferenceError {
                message: format!(
                    "categorical field set {:?} does not match the model contract {:?}",
                    categorical_fields, self.categorical
                ),
            });
        }

        let text_fields: BTreeSet<String> = record
            .text_field_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        if text_fields != self.categorical {
            return Err(ScoreError::InferenceError {
                message: format!(
                    "record holds text values in {:?} but the model expects them in {:?}",
                    text_fields, self.categorical
                ),
            });
        }
        Ok(())
    }

    fn walk_tree<'a>(&self, tree: &'a Tree, record: &FeatureRecord) -> Result<&'a [f64]> {
        let mut index = 0usize;
        // A well-formed tree reaches a leaf in fewer steps than it has nodes.
        for _ in 0..tree.nodes.len() {
            match &tree.nodes[index] {
                Node::Leaf { value } => return Ok(value),
                Node::NumericSplit {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = self.numeric_feature(record, feature)?;
                    index = if value < *threshold { *left } else { *right };
                }
                Node::CategorySplit {
                    feature,
                    categories,
                    left,
                    right,
                } => {
                    let value = self.text_feature(record, feature)?;
                    index = if categories.iter().any(|c| c == value) {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
        Err(ScoreError::InferenceError {
            message: "tree traversal did not reach a leaf".to_string(),
        })
    }

    fn numeric_feature(&self, record: &FeatureRecord, feature: &str) -> Result<f64> {
        let value = record
            .get(feature)
            .ok_or_else(|| ScoreError::InferenceError {
                message: format!("record has no feature '{}'", feature),
            })?;
        value.as_f64().ok_or_else(|| ScoreError::InferenceError {
            message: format!("feature '{}' is not numeric", feature),
        })
    }

    fn text_feature<'a>(&self, record: &'a FeatureRecord, feature: &str) -> Result<&'a str> {
        let value = record
            .get(feature)
            .ok_or_else(|| ScoreError::InferenceError {
                message: format!("record has no feature '{}'", feature),
            })?;
        match value {
            FieldValue::Text(text) => Ok(text),
            _ => Err(ScoreError::InferenceError {
                message: format!("feature '{}' is not categorical", feature),
            }),
        }
    }
}

impl Classifier for GbdtModel {
    fn classes(&self) -> &[String] {
        &self.artifact.classes
    }

    fn categorical_contract(&self) -> &BTreeSet<String> {
        &self.categorical
    }

    fn predict(
        &self,
        record: &FeatureRecord,
        categorical_fields: &BTreeSet<String>,
    ) -> Result<PredictionResult> {
        self.check_categorical_contract(record, categorical_fields)?;

        let mut scores = self.artifact.base_score.clone();
        for tree in &self.artifact.trees {
            let leaf = self.walk_tree(tree, record)?;
            for (total, contribution) in scores.iter_mut().zip(leaf.iter()) {
                *total += contribution;
            }
        }

        let best = scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(index, _)| index)
            .ok_or_else(|| ScoreError::InferenceError {
                message: "model produced no class scores".to_string(),
            })?;

        tracing::debug!(
            "Inference complete: label={} scores={:?}",
            self.artifact.classes[best],
            scores
        );

        Ok(PredictionResult {
            label: self.artifact.classes[best].clone(),
            scores,
        })
    }
}
