//! Storage trait abstraction.

use async_trait::async_trait;
use skilltrack_core::Skill;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Persistence collaborator for the skill collection.
///
/// Snapshots are whole-collection: `save_skills` replaces whatever was
/// stored before.
#[async_trait]
pub trait SkillStore: Send + Sync {
    /// Load the stored collection. An empty store yields an empty vector.
    async fn load_skills(&self) -> Result<Vec<Skill>>;

    /// Durably replace the stored collection.
    async fn save_skills(&mut self, skills: &[Skill]) -> Result<()>;
}
