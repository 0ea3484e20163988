//! Progress toward the next mastery level.

use crate::resolver::{in_domain, MasteryResolver};

/// Percentage (0-100) of the way from the current level to the next, on the
/// built-in table.
pub fn progress_percent(hours: f64) -> f64 {
    progress_percent_with(&MasteryResolver::standard(), hours)
}

/// Percentage (0-100) of the way from the current level to the next.
///
/// Exactly 100 at the top level. Thresholds strictly increase, so the span
/// divided by is always positive.
pub fn progress_percent_with(resolver: &MasteryResolver, hours: f64) -> f64 {
    let hours = in_domain(hours);
    let levels = resolver.table().levels();
    let index = resolver.level_index(hours);

    if index + 1 >= levels.len() {
        return 100.0;
    }

    let floor = levels[index].hours;
    let ceiling = levels[index + 1].hours;
    let progress = (hours - floor) / (ceiling - floor) * 100.0;

    // Float overshoot right at a boundary.
    progress.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(progress_percent(0.0), 0.0);
        assert_eq!(progress_percent(10000.0), 100.0);
        assert_eq!(progress_percent(50000.0), 100.0);
    }

    #[test]
    fn test_midpoints() {
        assert_eq!(progress_percent(0.5), 50.0);
        assert_eq!(progress_percent(5.5), 50.0);
        // 1.5 is 0.5 of the 1..10 span
        let p = progress_percent(1.5);
        assert!((p - 5.555_555).abs() < 1e-4);
        assert_eq!(progress_percent(7500.0), 50.0);
    }

    #[test]
    fn test_resets_at_each_threshold() {
        assert_eq!(progress_percent(1.0), 0.0);
        assert_eq!(progress_percent(25.0), 0.0);
        assert_eq!(progress_percent(5000.0), 0.0);
    }

    #[test]
    fn test_always_within_bounds() {
        let mut hours = 0.0;
        while hours < 11000.0 {
            let p = progress_percent(hours);
            assert!((0.0..=100.0).contains(&p), "{hours} -> {p}");
            hours += 0.37;
        }
        assert_eq!(progress_percent(-4.0), 0.0);
        assert_eq!(progress_percent(f64::NAN), 0.0);
    }
}
