//! Orchestrates one scoring call: validate, build, predict, present.

use crate::core::{builder, presenter, validator};
use crate::domain::model::{ScoreReport, ScoreRequest};
use crate::domain::ports::Classifier;
use crate::domain::schema;
use crate::model::{GbdtModel, ModelHandle};
use crate::utils::error::{Result, ScoreError};
use std::sync::Arc;

/// Synchronous scoring engine. Holds the classifier when one loaded; an
/// engine built from an unavailable handle fails every call with
/// `ModelUnavailable` and never attempts inference.
pub struct ScoringEngine<C: Classifier> {
    classifier: Option<Arc<C>>,
}

impl ScoringEngine<GbdtModel> {
    pub fn from_handle(handle: &ModelHandle) -> Self {
        Self {
            classifier: handle.model().cloned(),
        }
    }
}

impl<C: Classifier> ScoringEngine<C> {
    pub fn new(classifier: Arc<C>) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }

    pub fn unavailable() -> Self {
        Self { classifier: None }
    }

    pub fn is_ready(&self) -> bool {
        self.classifier.is_some()
    }

    /// One full request/response pass. The returned report is owned by the
    /// caller; nothing is kept in shared state between calls.
    pub fn score(&self, request: &ScoreRequest) -> Result<ScoreReport> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(ScoreError::ModelUnavailable)?;

        tracing::debug!("Validating request for '{}'", request.name);
        validator::validate_request(request)?;

        tracing::debug!("Building feature record");
        let record = builder::build_record(request)?;

        tracing::debug!("Running inference on {} fields", record.len());
        let prediction = classifier.predict(&record, &schema::categorical_field_set())?;

        let label = presenter::categorize(&prediction.label)?;
        let guidance = presenter::guidance_for(label);

        tracing::info!("Scored '{}': {}", request.name, label);

        Ok(ScoreReport {
            name: request.name.clone(),
            label,
            prediction,
            guidance,
        })
    }
}
