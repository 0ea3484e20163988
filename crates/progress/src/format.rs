//! Human-readable durations and timestamps.

use chrono::Local;
use skilltrack_core::Time;

/// Render fractional hours as `"H hr M min"`.
///
/// Minutes are rounded; a round-up to 60 carries into the hour so the
/// output never reads "1 hr 60 min". A carried total renders as whole
/// hours ("2 hr"), like any other zero-minute value.
pub fn format_hours(hours: f64) -> String {
    let hours = if hours.is_finite() && hours > 0.0 { hours } else { 0.0 };

    let mut whole = hours.floor();
    let mut minutes = ((hours - whole) * 60.0).round();
    if minutes >= 60.0 {
        whole += 1.0;
        minutes = 0.0;
    }

    let whole = whole as u64;
    let minutes = minutes as u64;
    if whole == 0 {
        format!("{} min", minutes)
    } else if minutes == 0 {
        format!("{} hr", whole)
    } else {
        format!("{} hr {} min", whole, minutes)
    }
}

/// Render a log timestamp in local time.
pub fn format_timestamp(timestamp: &Time) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
