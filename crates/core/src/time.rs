//! Validated practice-time input.

use serde::{Deserialize, Serialize};
use crate::error::InvalidInput;

/// Unit a practice duration is entered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Whole or fractional hours
    #[default]
    Hours,
    /// Minutes, converted to hours on entry
    Minutes,
}

impl TimeUnit {
    /// Convert `value` in this unit to hours.
    pub fn to_hours(self, value: f64) -> f64 {
        match self {
            TimeUnit::Hours => value,
            TimeUnit::Minutes => value / 60.0,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Hours => f.write_str("hours"),
            TimeUnit::Minutes => f.write_str("minutes"),
        }
    }
}

impl std::str::FromStr for TimeUnit {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hours" | "hour" | "hrs" | "hr" | "h" => Ok(TimeUnit::Hours),
            "minutes" | "minute" | "mins" | "min" | "m" => Ok(TimeUnit::Minutes),
            _ => Err(InvalidInput::UnknownUnit(s.to_string())),
        }
    }
}

/// A positive, finite practice duration.
///
/// Can only be built through [`TimeAmount::new`] or [`TimeAmount::parse`],
/// both of which reject rather than coerce bad input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAmount {
    value: f64,
    unit: TimeUnit,
}

impl TimeAmount {
    /// Validate a numeric amount.
    pub fn new(value: f64, unit: TimeUnit) -> Result<Self, InvalidInput> {
        if !value.is_finite() {
            return Err(InvalidInput::NonFiniteAmount(value));
        }
        if value <= 0.0 {
            return Err(InvalidInput::NonPositiveAmount(value));
        }
        // Tiny minute values can underflow to zero hours.
        if unit.to_hours(value) <= 0.0 {
            return Err(InvalidInput::NonPositiveAmount(value));
        }

        Ok(Self { value, unit })
    }

    /// Parse free-form text such as `"90"` or `" 1.25 "`.
    pub fn parse(text: &str, unit: TimeUnit) -> Result<Self, InvalidInput> {
        let trimmed = text.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| InvalidInput::NotANumber(text.to_string()))?;
        Self::new(value, unit)
    }

    /// Amount as entered.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit as entered.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Amount converted to hours.
    pub fn to_hours(&self) -> f64 {
        self.unit.to_hours(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_convert_to_hours() {
        let amount = TimeAmount::new(90.0, TimeUnit::Minutes).unwrap();
        assert_eq!(amount.to_hours(), 1.5);
        assert_eq!(TimeAmount::new(2.0, TimeUnit::Hours).unwrap().to_hours(), 2.0);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            TimeAmount::new(-5.0, TimeUnit::Hours).unwrap_err(),
            InvalidInput::NonPositiveAmount(-5.0)
        );
        assert!(TimeAmount::new(0.0, TimeUnit::Minutes).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            TimeAmount::new(f64::NAN, TimeUnit::Hours),
            Err(InvalidInput::NonFiniteAmount(_))
        ));
        assert!(TimeAmount::new(f64::INFINITY, TimeUnit::Hours).is_err());
        assert!(TimeAmount::parse("inf", TimeUnit::Hours).is_err());
        assert!(TimeAmount::parse("NaN", TimeUnit::Hours).is_err());
    }

    #[test]
    fn test_parse_text() {
        let amount = TimeAmount::parse(" 1.25 ", TimeUnit::Hours).unwrap();
        assert_eq!(amount.value(), 1.25);
        assert_eq!(amount.unit(), TimeUnit::Hours);

        assert_eq!(
            TimeAmount::parse("abc", TimeUnit::Hours).unwrap_err(),
            InvalidInput::NotANumber("abc".to_string())
        );
        assert!(TimeAmount::parse("", TimeUnit::Minutes).is_err());
        assert!(TimeAmount::parse("12abc", TimeUnit::Minutes).is_err());
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("Minutes".parse::<TimeUnit>().unwrap(), TimeUnit::Minutes);
        assert_eq!("min".parse::<TimeUnit>().unwrap(), TimeUnit::Minutes);
        assert_eq!("HOURS".parse::<TimeUnit>().unwrap(), TimeUnit::Hours);
        assert_eq!("h".parse::<TimeUnit>().unwrap(), TimeUnit::Hours);
        assert!(matches!(
            "days".parse::<TimeUnit>(),
            Err(InvalidInput::UnknownUnit(_))
        ));
        assert_eq!(TimeUnit::default(), TimeUnit::Hours);
    }
}
