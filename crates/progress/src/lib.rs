//! Progress Tracking
//!
//! Mastery levels, progress toward the next level, duration formatting, and
//! the per-skill views built from them. Everything here is a pure function
//! of a skill's hour total, recomputed on demand.

#![warn(missing_docs)]

pub mod resolver;
pub mod calculator;
pub mod format;
pub mod tracker;
pub mod chart;

pub use resolver::{MasteryResolver, NextLevel, current_level, next_level};
pub use calculator::{progress_percent, progress_percent_with};
pub use format::{format_hours, format_timestamp};
pub use tracker::{SkillProgress, ProgressSnapshot};
pub use chart::{ChartConfig, ChartBar, chart_data, render_bars, level_legend};
