//! Per-skill progress views.

use chrono::{DateTime, Utc};
use serde::Serialize;
use skilltrack_core::{Skill, SkillId};
use crate::calculator::progress_percent_with;
use crate::format::format_hours;
use crate::resolver::{MasteryResolver, NextLevel};

/// Everything a skill card shows, derived from the skill's hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillProgress {
    /// Skill id
    pub id: SkillId,

    /// Skill name
    pub name: String,

    /// Total hours logged
    pub hours: f64,

    /// `hours`, formatted
    pub logged: String,

    /// Current mastery title
    pub title: &'static str,

    /// Next level, unless already at the top
    pub next: Option<NextLevel>,

    /// Time to the next level, formatted
    pub remaining: Option<String>,

    /// Progress toward the next level (0-100)
    pub percent: f64,
}

impl SkillProgress {
    /// Card for `skill` on the built-in table.
    pub fn of(skill: &Skill) -> Self {
        Self::with_resolver(skill, &MasteryResolver::standard())
    }

    /// Card for `skill` on `resolver`'s table.
    pub fn with_resolver(skill: &Skill, resolver: &MasteryResolver) -> Self {
        let hours = skill.hours();
        let next = resolver.next_level(hours);

        Self {
            id: skill.id(),
            name: skill.name().to_string(),
            hours,
            logged: format_hours(hours),
            title: resolver.current_level(hours),
            remaining: next.map(|n| format_hours(n.hours_remaining)),
            next,
            percent: progress_percent_with(resolver, hours),
        }
    }

    /// Whether the top level has been reached.
    pub fn is_max_level(&self) -> bool {
        self.next.is_none()
    }
}

/// Progress of every skill at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    /// When snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// One card per skill, in collection order
    pub skills: Vec<SkillProgress>,
}

impl ProgressSnapshot {
    /// Snapshot `skills` on the built-in table.
    pub fn take(skills: &[Skill]) -> Self {
        let resolver = MasteryResolver::standard();
        Self {
            timestamp: Utc::now(),
            skills: skills
                .iter()
                .map(|s| SkillProgress::with_resolver(s, &resolver))
                .collect(),
        }
    }

    /// Hours across all skills.
    pub fn total_hours(&self) -> f64 {
        self.skills.iter().map(|s| s.hours).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skilltrack_core::{TimeAmount, TimeUnit};

    fn skill_with(name: &str, hours: f64) -> Skill {
        let mut skill = Skill::new(SkillId::from_raw(1), name).unwrap();
        if hours > 0.0 {
            skill.record(TimeAmount::new(hours, TimeUnit::Hours).unwrap(), Utc::now());
        }
        skill
    }

    #[test]
    fn test_card_for_guitar() {
        let card = SkillProgress::of(&skill_with("Guitar", 1.5));

        assert_eq!(card.name, "Guitar");
        assert_eq!(card.logged, "1 hr 30 min");
        assert_eq!(card.title, "Complete Noob");
        assert_eq!(card.next.unwrap().title, "Noob");
        assert_eq!(card.remaining.as_deref(), Some("8 hr 30 min"));
        assert!(!card.is_max_level());
    }

    #[test]
    fn test_card_at_top_level() {
        let card = SkillProgress::of(&skill_with("Piano", 12000.0));

        assert_eq!(card.title, "Dedicated Expert");
        assert!(card.is_max_level());
        assert!(card.remaining.is_none());
        assert_eq!(card.percent, 100.0);
    }

    #[test]
    fn test_snapshot_totals() {
        let skills = vec![skill_with("Guitar", 1.5), skill_with("Chess", 0.0)];
        let snapshot = ProgressSnapshot::take(&skills);

        assert_eq!(snapshot.skills.len(), 2);
        assert_eq!(snapshot.total_hours(), 1.5);
        assert_eq!(snapshot.skills[1].title, "Complete Beginner");
    }

    #[test]
    fn test_card_serializes() {
        let value = serde_json::to_value(SkillProgress::of(&skill_with("Guitar", 1.5))).unwrap();
        assert_eq!(value["next"]["hoursRemaining"], 8.5);
        assert_eq!(value["title"], "Complete Noob");
    }
}
