//! Skill model - a named practice target with its time ledger.

use serde::{Deserialize, Serialize};
use crate::error::InvalidInput;
use crate::id::SkillId;
use crate::time::TimeAmount;
use crate::Time;

/// Slack allowed when checking hydrated totals against their history.
const LEDGER_TOLERANCE: f64 = 1e-6;

/// A skill the user practices.
///
/// `hours` always equals the sum of `hours_added` across `history`. The only
/// way to add time is [`Skill::record`], which appends the entry and bumps the
/// total in one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    id: SkillId,
    name: String,
    hours: f64,
    history: Vec<LogEntry>,
}

/// One practice-time submission and the running total right after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// When the entry was recorded
    pub timestamp: Time,

    /// Hours added by this entry
    pub hours_added: f64,

    /// Skill total immediately after this entry
    pub total_hours: f64,
}

impl Skill {
    /// Create an empty skill. The name is trimmed and must not be empty.
    pub fn new(id: SkillId, name: &str) -> Result<Self, InvalidInput> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidInput::EmptySkillName);
        }

        Ok(Self {
            id,
            name: name.to_string(),
            hours: 0.0,
            history: Vec::new(),
        })
    }

    /// Skill id.
    pub fn id(&self) -> SkillId {
        self.id
    }

    /// Skill name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total accumulated hours.
    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// Log entries in the order they were recorded.
    pub fn history(&self) -> &[LogEntry] {
        &self.history
    }

    /// Log entries, most recent first.
    pub fn recent_history(&self) -> impl ExactSizeIterator<Item = &LogEntry> + DoubleEndedIterator {
        self.history.iter().rev()
    }

    /// Append `amount` to the ledger, stamped with `at`.
    pub fn record(&mut self, amount: TimeAmount, at: Time) -> &LogEntry {
        let hours_added = amount.to_hours();
        let total_hours = self.hours + hours_added;

        self.history.push(LogEntry {
            timestamp: at,
            hours_added,
            total_hours,
        });
        self.hours = total_hours;

        &self.history[self.history.len() - 1]
    }

    /// Check that `hours` and every `total_hours` snapshot agree with the
    /// running sum of `hours_added`.
    ///
    /// Always true for skills built through [`Skill::record`]; useful for
    /// records loaded from disk.
    pub fn verify_ledger(&self) -> bool {
        let mut running = 0.0;
        for entry in &self.history {
            if !entry.hours_added.is_finite() || entry.hours_added <= 0.0 {
                return false;
            }
            running += entry.hours_added;
            if (entry.total_hours - running).abs() > LEDGER_TOLERANCE {
                return false;
            }
        }
        (self.hours - running).abs() <= LEDGER_TOLERANCE
    }
}
