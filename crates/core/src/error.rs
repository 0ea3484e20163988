//! Input validation errors.

use crate::id::SkillId;

/// Rejected caller input.
///
/// Every variant is recoverable: the operation that produced it leaves all
/// prior state untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    /// Skill name was empty or whitespace only
    #[error("skill name must not be empty")]
    EmptySkillName,

    /// Time amount text did not parse as a number
    #[error("time amount {0:?} is not a number")]
    NotANumber(String),

    /// Time amount was zero or negative
    #[error("time amount must be positive, got {0}")]
    NonPositiveAmount(f64),

    /// Time amount was NaN or infinite
    #[error("time amount must be finite, got {0}")]
    NonFiniteAmount(f64),

    /// Unrecognized time unit
    #[error("unknown time unit {0:?} (expected hours or minutes)")]
    UnknownUnit(String),

    /// No skill with this id
    #[error("no skill with id {0}")]
    UnknownSkill(SkillId),

    /// No skill with this name
    #[error("no skill named {0:?}")]
    UnknownSkillName(String),

    /// Mastery table violates its ordering rules
    #[error("invalid mastery table: {0}")]
    MasteryTable(String),
}
