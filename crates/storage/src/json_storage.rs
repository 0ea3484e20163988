//! JSON file storage implementation.
//!
//! Stores the skill collection as one `skills.json` file in a data directory
//! and keeps a small meta marker (version + updated_at) next to it.

use std::path::{Path, PathBuf};
use skilltrack_core::Skill;
use super::{SkillStore, Result};
use tokio::fs;
use tracing::{debug, warn};

const SKILLS_FILE: &str = "skills.json";
const META_FILE: &str = "meta.json";

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn skills_path(&self) -> PathBuf {
        self.root.join(SKILLS_FILE)
    }

    fn meta_path(&self) -> PathBuf {
        self.root.join(META_FILE)
    }

    /// Number of snapshots written so far (0 if never saved).
    pub async fn version(&self) -> Result<u64> {
        let meta: Option<serde_json::Value> = read_json(&self.meta_path()).await?;
        Ok(meta
            .and_then(|m| m.get("version").and_then(|v| v.as_u64()))
            .unwrap_or(0))
    }

    /// Record `version` in the meta marker.
    async fn write_version(&self, version: u64) -> Result<()> {
        let meta = serde_json::json!({"version": version, "updated_at": chrono::Utc::now()});
        fs::write(self.meta_path(), serde_json::to_string_pretty(&meta)?.as_bytes()).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl SkillStore for JsonStorage {
    async fn load_skills(&self) -> Result<Vec<Skill>> {
        let skills: Vec<Skill> = read_json(&self.skills_path()).await?.unwrap_or_default();
        debug!(count = skills.len(), path = %self.skills_path().display(), "loaded skills");
        Ok(skills)
    }

    async fn save_skills(&mut self, skills: &[Skill]) -> Result<()> {
        let path = self.skills_path();
        let json = serde_json::to_string_pretty(skills)?;

        // Anything that can fail runs before the rename; once the snapshot
        // is in place the save has happened.
        let version = self.version().await? + 1;

        // Write aside then rename so readers never see a partial file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes()).await?;
        fs::rename(&tmp, &path).await?;

        // The meta marker is advisory.
        if let Err(e) = self.write_version(version).await {
            warn!(error = %e, version, "snapshot saved but meta marker not updated");
        }
        debug!(count = skills.len(), version, "saved skills");
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
