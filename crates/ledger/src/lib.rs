//! Time Ledger
//!
//! The in-memory skill repository. It hydrates from a storage collaborator,
//! is the only place practice time gets added, and hands the full collection
//! back to storage after every change.

#![warn(missing_docs)]

pub mod ledger;

pub use ledger::{TimeLedger, LedgerError, Result};
