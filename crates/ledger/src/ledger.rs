//! The time ledger repository.

use chrono::Utc;
use skilltrack_core::{InvalidInput, LogEntry, Skill, SkillId, TimeAmount};
use skilltrack_storage::{SkillStore, StorageError};
use tracing::{debug, info, warn};

/// Error type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur during ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Caller input was rejected; nothing changed
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// Persisting the change failed; the change was rolled back
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl LedgerError {
    /// Whether this is a validation failure to show inline.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, LedgerError::InvalidInput(_))
    }
}

/// Owns the skill collection and its persistence collaborator.
///
/// Mutations take `&mut self`, so writers through one ledger are serialized.
/// Each mutation is applied in memory, then saved; a failed save undoes the
/// in-memory change.
pub struct TimeLedger<S: SkillStore> {
    store: S,
    skills: Vec<Skill>,
    last_id: Option<SkillId>,
}

impl<S: SkillStore> TimeLedger<S> {
    /// Hydrate a ledger from `store`.
    pub async fn open(store: S) -> Result<Self> {
        let skills = store.load_skills().await?;

        for skill in skills.iter().filter(|s| !s.verify_ledger()) {
            warn!(
                id = %skill.id(),
                name = skill.name(),
                hours = skill.hours(),
                "stored hours disagree with history"
            );
        }

        let last_id = skills.iter().map(Skill::id).max();
        info!(count = skills.len(), "hydrated skills");

        Ok(Self {
            store,
            skills,
            last_id,
        })
    }

    /// All skills, in creation order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Look up a skill by id.
    pub fn get(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id() == id)
    }

    /// Look up a skill by name, ignoring case and surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&Skill> {
        let name = name.trim().to_lowercase();
        self.skills.iter().find(|s| s.name().to_lowercase() == name)
    }

    /// The storage collaborator.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the storage collaborator.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Add an empty skill named `name` (trimmed, non-empty).
    pub async fn create_skill(&mut self, name: &str) -> Result<&Skill> {
        let id = SkillId::allocate(Utc::now().timestamp_millis(), self.last_id);
        let skill = Skill::new(id, name)?;

        self.skills.push(skill);
        if let Err(e) = self.store.save_skills(&self.skills).await {
            self.skills.pop();
            warn!(error = %e, "save failed, skill creation rolled back");
            return Err(e.into());
        }
        self.last_id = Some(id);

        let skill = &self.skills[self.skills.len() - 1];
        info!(id = %skill.id(), name = skill.name(), "created skill");
        Ok(skill)
    }

    /// Append `amount` to skill `id`.
    pub async fn log_time(&mut self, id: SkillId, amount: TimeAmount) -> Result<&Skill> {
        let index = self
            .skills
            .iter()
            .position(|s| s.id() == id)
            .ok_or(InvalidInput::UnknownSkill(id))?;

        let before = self.skills[index].clone();
        let entry = self.skills[index].record(amount, Utc::now()).clone();

        if let Err(e) = self.store.save_skills(&self.skills).await {
            self.skills[index] = before;
            warn!(error = %e, %id, "save failed, logged time rolled back");
            return Err(e.into());
        }

        info!(
            %id,
            hours_added = entry.hours_added,
            total_hours = entry.total_hours,
            "logged time"
        );
        Ok(&self.skills[index])
    }

    /// Log entries for skill `id`, most recent first.
    pub fn history(&self, id: SkillId) -> Result<impl ExactSizeIterator<Item = &LogEntry> + '_> {
        let skill = self.get(id).ok_or(InvalidInput::UnknownSkill(id))?;
        debug!(%id, entries = skill.history().len(), "reading history");
        Ok(skill.recent_history())
    }
}
