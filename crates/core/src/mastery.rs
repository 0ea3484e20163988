//! Mastery threshold table.

use std::borrow::Cow;
use crate::error::InvalidInput;

/// A named tier unlocked once cumulative practice reaches `hours`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasteryLevel {
    /// Minimum cumulative hours for this level
    pub hours: f64,

    /// Display title
    pub title: &'static str,
}

/// The built-in levels, ascending.
pub static MASTERY_LEVELS: [MasteryLevel; 12] = [
    MasteryLevel { hours: 0.0, title: "Complete Beginner" },
    MasteryLevel { hours: 1.0, title: "Complete Noob" },
    MasteryLevel { hours: 10.0, title: "Noob" },
    MasteryLevel { hours: 25.0, title: "Novice" },
    MasteryLevel { hours: 50.0, title: "Amateur" },
    MasteryLevel { hours: 100.0, title: "Apprentice" },
    MasteryLevel { hours: 250.0, title: "Intermediate" },
    MasteryLevel { hours: 500.0, title: "Advanced" },
    MasteryLevel { hours: 1000.0, title: "Master" },
    MasteryLevel { hours: 2500.0, title: "Grand Master" },
    MasteryLevel { hours: 5000.0, title: "Expert" },
    MasteryLevel { hours: 10000.0, title: "Dedicated Expert" },
];

/// An ordered, immutable set of mastery levels.
///
/// Thresholds are finite and strictly increasing, and the first one is 0, so
/// every non-negative hour total falls into exactly one level.
#[derive(Debug, Clone, PartialEq)]
pub struct MasteryTable {
    levels: Cow<'static, [MasteryLevel]>,
}

impl MasteryTable {
    /// The built-in twelve-level table.
    pub fn standard() -> Self {
        Self {
            levels: Cow::Borrowed(&MASTERY_LEVELS[..]),
        }
    }

    /// Build a custom table, checking its ordering rules.
    pub fn new(levels: Vec<MasteryLevel>) -> Result<Self, InvalidInput> {
        let Some(first) = levels.first() else {
            return Err(InvalidInput::MasteryTable("table is empty".to_string()));
        };
        if first.hours != 0.0 {
            return Err(InvalidInput::MasteryTable(format!(
                "first threshold must be 0, got {}",
                first.hours
            )));
        }
        if let Some(level) = levels.iter().find(|l| !l.hours.is_finite()) {
            return Err(InvalidInput::MasteryTable(format!(
                "threshold for {:?} is not finite",
                level.title
            )));
        }
        if let Some(pair) = levels.windows(2).find(|w| w[1].hours <= w[0].hours) {
            return Err(InvalidInput::MasteryTable(format!(
                "{:?} ({}) does not exceed {:?} ({})",
                pair[1].title, pair[1].hours, pair[0].title, pair[0].hours
            )));
        }

        Ok(Self {
            levels: Cow::Owned(levels),
        })
    }

    /// All levels, ascending.
    pub fn levels(&self) -> &[MasteryLevel] {
        &self.levels
    }

    /// The highest level.
    pub fn max_level(&self) -> &MasteryLevel {
        // Construction guarantees at least one level.
        &self.levels[self.levels.len() - 1]
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the table has no levels. Never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for MasteryTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_shape() {
        let table = MasteryTable::standard();
        assert_eq!(table.len(), 12);
        assert_eq!(table.levels()[0].hours, 0.0);
        assert_eq!(table.levels()[0].title, "Complete Beginner");
        assert_eq!(table.max_level().title, "Dedicated Expert");
        assert_eq!(table.max_level().hours, 10000.0);
    }

    #[test]
    fn test_standard_table_is_valid() {
        assert!(MasteryTable::new(MASTERY_LEVELS.to_vec()).is_ok());
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert!(MasteryTable::new(vec![]).is_err());
        assert!(MasteryTable::new(vec![MasteryLevel { hours: 1.0, title: "A" }]).is_err());
        assert!(MasteryTable::new(vec![
            MasteryLevel { hours: 0.0, title: "A" },
            MasteryLevel { hours: 5.0, title: "B" },
            MasteryLevel { hours: 5.0, title: "C" },
        ])
        .is_err());
        assert!(MasteryTable::new(vec![
            MasteryLevel { hours: 0.0, title: "A" },
            MasteryLevel { hours: f64::INFINITY, title: "B" },
        ])
        .is_err());
    }
}
