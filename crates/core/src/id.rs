//! Unique identifiers for SkillTrack entities.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Skill.
///
/// Persisted as a bare integer. Fresh ids come from the wall clock in
/// milliseconds, bumped past any id already in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(u64);

impl SkillId {
    /// Wrap a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Allocate an id for `now_millis` that is strictly greater than `last`.
    pub fn allocate(now_millis: i64, last: Option<SkillId>) -> Self {
        let candidate = u64::try_from(now_millis).unwrap_or(0);
        match last {
            Some(SkillId(prev)) if candidate <= prev => Self(prev.saturating_add(1)),
            _ => Self(candidate),
        }
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for SkillId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_uses_clock_when_ahead() {
        let id = SkillId::allocate(1_700_000_000_000, Some(SkillId::from_raw(5)));
        assert_eq!(id.as_u64(), 1_700_000_000_000);
    }

    #[test]
    fn test_allocate_bumps_past_last() {
        let last = SkillId::from_raw(1_700_000_000_000);
        let id = SkillId::allocate(1_700_000_000_000, Some(last));
        assert!(id > last);
    }

    #[test]
    fn test_negative_clock_clamps() {
        assert_eq!(SkillId::allocate(-3, None).as_u64(), 0);
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&SkillId::from_raw(42)).unwrap();
        assert_eq!(json, "42");
        let back: SkillId = "42".parse().unwrap();
        assert_eq!(back, SkillId::from_raw(42));
    }
}
