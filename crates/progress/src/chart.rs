//! Chart data and text rendering.

use serde::Serialize;
use skilltrack_core::{MasteryTable, Skill};
use crate::format::format_hours;

/// Chart settings.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Labels longer than this are cut and suffixed with "..."
    pub label_max_chars: usize,
    /// Cells used by the longest bar
    pub bar_width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            label_max_chars: 10,
            bar_width: 40,
        }
    }
}

impl ChartConfig {
    /// Set the label cut-off.
    pub fn with_label_max_chars(mut self, chars: usize) -> Self {
        self.label_max_chars = chars;
        self
    }

    /// Set the bar width.
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }
}

/// One bar: a skill label and its hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    /// Display label
    pub label: String,
    /// Bar value
    pub hours: f64,
}

/// One bar per skill, in collection order.
pub fn chart_data(skills: &[Skill], config: &ChartConfig) -> Vec<ChartBar> {
    skills
        .iter()
        .map(|skill| ChartBar {
            label: truncate_label(skill.name(), config.label_max_chars),
            hours: skill.hours(),
        })
        .collect()
}

fn truncate_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let mut label: String = name.chars().take(max_chars).collect();
        label.push_str("...");
        label
    } else {
        name.to_string()
    }
}

/// Horizontal bars scaled to the largest value.
pub fn render_bars(bars: &[ChartBar], config: &ChartConfig) -> Vec<String> {
    let label_width = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    let peak = bars.iter().map(|b| b.hours).fold(0.0_f64, f64::max);

    bars.iter()
        .map(|bar| {
            let mut cells = if peak > 0.0 {
                (bar.hours / peak * config.bar_width as f64).round() as usize
            } else {
                0
            };
            if cells == 0 && bar.hours > 0.0 && config.bar_width > 0 {
                cells = 1;
            }
            format!(
                "{:<width$} | {} {}",
                bar.label,
                "#".repeat(cells),
                format_hours(bar.hours),
                width = label_width
            )
        })
        .collect()
}

/// `"<title>: <threshold>+"` for each level.
pub fn level_legend(table: &MasteryTable) -> Vec<String> {
    table
        .levels()
        .iter()
        .map(|level| format!("{}: {}+", level.title, format_hours(level.hours)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use skilltrack_core::{SkillId, TimeAmount, TimeUnit};

    fn skill(name: &str, hours: f64) -> Skill {
        let mut skill = Skill::new(SkillId::from_raw(1), name).unwrap();
        skill.record(TimeAmount::new(hours, TimeUnit::Hours).unwrap(), Utc::now());
        skill
    }

    #[test]
    fn test_labels_truncate_after_ten_chars() {
        let skills = vec![skill("Guitar", 2.0), skill("Competitive Programming", 4.0)];
        let bars = chart_data(&skills, &ChartConfig::default());

        assert_eq!(bars[0].label, "Guitar");
        assert_eq!(bars[1].label, "Competitiv...");
        assert_eq!(bars[1].hours, 4.0);
    }

    #[test]
    fn test_exactly_ten_chars_kept() {
        assert_eq!(truncate_label("Basketball", 10), "Basketball");
        assert_eq!(truncate_label("Cañón guitarra", 5), "Cañón...");
    }

    #[test]
    fn test_bars_scale_to_peak() {
        let bars = vec![
            ChartBar { label: "a".into(), hours: 10.0 },
            ChartBar { label: "bb".into(), hours: 5.0 },
            ChartBar { label: "c".into(), hours: 0.01 },
        ];
        let rows = render_bars(&bars, &ChartConfig::default().with_bar_width(20));

        assert_eq!(rows[0], format!("a  | {} 10 hr", "#".repeat(20)));
        assert_eq!(rows[1], format!("bb | {} 5 hr", "#".repeat(10)));
        assert!(rows[2].starts_with("c  | # "));
    }

    #[test]
    fn test_empty_chart() {
        assert!(render_bars(&[], &ChartConfig::default()).is_empty());
        assert!(chart_data(&[], &ChartConfig::default()).is_empty());
    }

    #[test]
    fn test_legend() {
        let legend = level_legend(&MasteryTable::standard());
        assert_eq!(legend.len(), 12);
        assert_eq!(legend[0], "Complete Beginner: 0 min+");
        assert_eq!(legend[11], "Dedicated Expert: 10000 hr+");
    }
}
