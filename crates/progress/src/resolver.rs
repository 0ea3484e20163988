//! Mastery level resolution.

use serde::Serialize;
use skilltrack_core::{MasteryLevel, MasteryTable};

/// The next level a skill can reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextLevel {
    /// Title of the next level
    pub title: &'static str,

    /// Cumulative hours the next level requires
    pub threshold_hours: f64,

    /// Hours still to go
    pub hours_remaining: f64,
}

/// Resolves hour totals against a mastery table.
#[derive(Debug, Clone, Default)]
pub struct MasteryResolver {
    table: MasteryTable,
}

impl MasteryResolver {
    /// Resolver over a custom table.
    pub fn new(table: MasteryTable) -> Self {
        Self { table }
    }

    /// Resolver over the built-in table.
    pub fn standard() -> Self {
        Self::new(MasteryTable::standard())
    }

    /// The table being resolved against.
    pub fn table(&self) -> &MasteryTable {
        &self.table
    }

    /// Index of the level `hours` falls in.
    ///
    /// Scans from the top threshold down; the bottom threshold is 0, so any
    /// in-domain total lands somewhere.
    pub fn level_index(&self, hours: f64) -> usize {
        let hours = in_domain(hours);
        self.table
            .levels()
            .iter()
            .rposition(|level| hours >= level.hours)
            .unwrap_or(0)
    }

    /// The level `hours` has reached.
    pub fn current(&self, hours: f64) -> &MasteryLevel {
        &self.table.levels()[self.level_index(hours)]
    }

    /// Title of the level `hours` has reached.
    pub fn current_level(&self, hours: f64) -> &'static str {
        self.current(hours).title
    }

    /// The first level above `hours`, or `None` once the top level is reached.
    pub fn next_level(&self, hours: f64) -> Option<NextLevel> {
        let hours = in_domain(hours);
        self.table
            .levels()
            .iter()
            .find(|level| level.hours > hours)
            .map(|level| NextLevel {
                title: level.title,
                threshold_hours: level.hours,
                hours_remaining: level.hours - hours,
            })
    }
}

/// Title for `hours` on the built-in table.
pub fn current_level(hours: f64) -> &'static str {
    MasteryResolver::standard().current_level(hours)
}

/// Next level for `hours` on the built-in table.
pub fn next_level(hours: f64) -> Option<NextLevel> {
    MasteryResolver::standard().next_level(hours)
}

/// Negative and NaN totals are outside the ledger's reach; treat them as none.
pub(crate) fn in_domain(hours: f64) -> f64 {
    if hours.is_nan() || hours < 0.0 {
        0.0
    } else {
        hours
    }
}
