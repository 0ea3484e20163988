//! In-process storage, for tests and ephemeral sessions.

use skilltrack_core::Skill;
use super::{SkillStore, Result};

/// Keeps the last saved snapshot in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    skills: Vec<Skill>,
    saves: usize,
}

impl MemoryStorage {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `skills`, as if saved by an earlier session.
    pub fn with_skills(skills: Vec<Skill>) -> Self {
        Self { skills, saves: 0 }
    }

    /// The last saved snapshot.
    pub fn snapshot(&self) -> &[Skill] {
        &self.skills
    }

    /// How many times `save_skills` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

#[async_trait::async_trait]
impl SkillStore for MemoryStorage {
    async fn load_skills(&self) -> Result<Vec<Skill>> {
        Ok(self.skills.clone())
    }

    async fn save_skills(&mut self, skills: &[Skill]) -> Result<()> {
        self.skills = skills.to_vec();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skilltrack_core::SkillId;

    #[tokio::test]
    async fn test_round_trip() {
        let mut storage = MemoryStorage::new();
        let skills = vec![Skill::new(SkillId::from_raw(9), "Chess").unwrap()];

        storage.save_skills(&skills).await.unwrap();

        assert_eq!(storage.load_skills().await.unwrap(), skills);
        assert_eq!(storage.save_count(), 1);
    }
}
