//! Storage abstraction and implementations for SkillTrack.
//!
//! The tracker hands the full skill collection to a [`SkillStore`] after
//! every mutation and reads it back once on start. [`JsonStorage`] keeps it
//! in a single JSON file; [`MemoryStorage`] keeps it in process.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod memory_storage;

pub use trait_::{SkillStore, StorageError, Result};
pub use json_storage::JsonStorage;
pub use memory_storage::MemoryStorage;
