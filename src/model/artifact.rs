//! Serialized form of the classifier artifact.
//!
//! The artifact is a JSON document carrying the tree ensemble together with
//! the metadata the serving side must agree with: the class list and the
//! categorical-feature contract. Keeping the contract inside the artifact
//! prevents skew between training-time schema and serving code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub name: String,
    pub version: String,
    pub trained_at: DateTime<Utc>,
}

/// One node of a decision tree. Trees are stored as flat node arrays with
/// the root at index 0; split nodes reference children by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Numeric split: `value < threshold` goes left, otherwise right.
    NumericSplit {
        feature: String,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Categorical split: membership in `categories` goes left, otherwise
    /// right. Unseen categories fall through to the right branch.
    CategorySplit {
        feature: String,
        categories: Vec<String>,
        left: usize,
        right: usize,
    },
    /// Terminal node with one additive score per class.
    Leaf { value: Vec<f64> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub metadata: ModelMetadata,
    pub classes: Vec<String>,
    /// Categorical-feature contract fixed at training time.
    pub categorical_features: Vec<String>,
    /// Per-class bias added before the tree scores.
    pub base_score: Vec<f64>,
    pub trees: Vec<Tree>,
}

impl ModelArtifact {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Structural sanity checks run once at load time. A failing artifact is
    /// treated as corrupt and the model stays unavailable.
    pub fn check(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("artifact declares no classes".to_string());
        }
        if self.base_score.len() != self.classes.len() {
            return Err(format!(
                "base_score has {} entries for {} classes",
                self.base_score.len(),
                self.classes.len()
            ));
        }
        for (tree_index, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(format!("tree {} has no nodes", tree_index));
            }
            for node in &tree.nodes {
                match node {
                    Node::NumericSplit { left, right, .. }
                    | Node::CategorySplit { left, right, .. } => {
                        if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                            return Err(format!(
                                "tree {} references a child outside the node array",
                                tree_index
                            ));
                        }
                    }
                    Node::Leaf { value } => {
                        if value.len() != self.classes.len() {
                            return Err(format!(
                                "tree {} leaf has {} scores for {} classes",
                                tree_index,
                                value.len(),
                                self.classes.len()
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
