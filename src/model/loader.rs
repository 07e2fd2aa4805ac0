//! Lazy, memoized loading of the classifier artifact.

use crate::domain::ports::ConfigProvider;
use crate::model::artifact::ModelArtifact;
use crate::model::gbdt::GbdtModel;
use std::sync::{Arc, OnceLock};

/// Outcome of the one-time artifact load. `Unavailable` is an explicit
/// state, not an error: callers check it and disable the predict path
/// instead of retrying per call.
#[derive(Debug, Clone)]
pub enum ModelHandle {
    Available(Arc<GbdtModel>),
    Unavailable,
}

impl ModelHandle {
    pub fn available(&self) -> bool {
        matches!(self, ModelHandle::Available(_))
    }

    pub fn model(&self) -> Option<&Arc<GbdtModel>> {
        match self {
            ModelHandle::Available(model) => Some(model),
            ModelHandle::Unavailable => None,
        }
    }
}

/// Explicit loader service, bound to one artifact path. Construct it once at
/// process start and pass it by reference to anything needing inference.
///
/// The first `load` performs the deserialization; concurrent first callers
/// either do the load or wait for the winner, and every later call returns
/// the same memoized handle. The artifact is never reloaded.
pub struct ModelLoader {
    path: String,
    state: OnceLock<ModelHandle>,
}

impl ModelLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: OnceLock::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.model_path().to_string())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn load(&self) -> &ModelHandle {
        self.state.get_or_init(|| match self.read_artifact() {
            Ok(model) => {
                tracing::info!(
                    "Loaded model '{}' v{} from {}",
                    model.metadata().name,
                    model.metadata().version,
                    self.path
                );
                ModelHandle::Available(Arc::new(model))
            }
            Err(reason) => {
                tracing::warn!(
                    "Model artifact at {} is unavailable: {}",
                    self.path,
                    reason
                );
                ModelHandle::Unavailable
            }
        })
    }

    fn read_artifact(&self) -> Result<GbdtModel, String> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("cannot read artifact: {}", e))?;
        let artifact =
            ModelArtifact::from_json(&content).map_err(|e| format!("corrupt artifact: {}", e))?;
        GbdtModel::from_artifact(artifact)
    }
}
