//! SkillTrack core data models.
//!
//! This crate defines the records the practice tracker is built from:
//! skills, their append-only log entries, validated time input, and the
//! mastery threshold table.

#![warn(missing_docs)]

// Core identities
mod id;

// Errors
mod error;

// Skills and their ledger entries
mod skill;
mod time;

// Mastery thresholds
mod mastery;

// Re-exports
pub use id::SkillId;
pub use error::InvalidInput;
pub use skill::{Skill, LogEntry};
pub use time::{TimeAmount, TimeUnit};
pub use mastery::{MasteryLevel, MasteryTable, MASTERY_LEVELS};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
