pub mod artifact;
pub mod gbdt;
pub mod loader;

pub use artifact::{ModelArtifact, ModelMetadata, Node, Tree};
pub use gbdt::GbdtModel;
pub use loader::{ModelHandle, ModelLoader};
