//! Break definition and duration band types.
//!
//! This module defines the [`BreakDefinition`] and [`DurationBand`] values that
//! make up a break entitlement schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a break is paid or unpaid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakType {
    /// The break counts as worked time.
    Paid,
    /// The break is deducted from worked time.
    Unpaid,
}

/// A single mandatory break owed during a shift.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{BreakDefinition, BreakType};
///
/// let rest = BreakDefinition::new(1, 10, BreakType::Paid);
/// assert!(rest.is_paid());
/// assert_eq!(rest.duration, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreakDefinition {
    /// Identifier of the break, unique within its band.
    pub id: u32,
    /// Length of the break in minutes.
    pub duration: u32,
    /// Paid or unpaid classification.
    #[serde(rename = "type")]
    pub break_type: BreakType,
}

impl BreakDefinition {
    /// Creates a new break definition.
    pub const fn new(id: u32, duration: u32, break_type: BreakType) -> Self {
        Self {
            id,
            duration,
            break_type,
        }
    }

    /// Returns true if the break is paid.
    pub fn is_paid(&self) -> bool {
        self.break_type == BreakType::Paid
    }
}

/// A half-open range of shift lengths and the breaks owed within it.
///
/// A shift of `h` hours falls in the band when `min_hours <= h < max_hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBand {
    /// Inclusive lower bound, in hours.
    pub min_hours: Decimal,
    /// Exclusive upper bound, in hours.
    pub max_hours: Decimal,
    /// Breaks in the order they are expected to be taken.
    #[serde(default)]
    pub breaks: Vec<BreakDefinition>,
}

impl DurationBand {
    /// Returns true if `shift_hours` falls within this band.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeclock_engine::models::DurationBand;
    /// use rust_decimal::Decimal;
    ///
    /// let band = DurationBand {
    ///     min_hours: Decimal::from(4),
    ///     max_hours: Decimal::from(6),
    ///     breaks: vec![],
    /// };
    /// assert!(band.contains(Decimal::from(4)));
    /// assert!(!band.contains(Decimal::from(6)));
    /// ```
    pub fn contains(&self, shift_hours: Decimal) -> bool {
        self.min_hours <= shift_hours && shift_hours < self.max_hours
    }

    /// Total minutes of breaks of the given type in this band.
    pub fn minutes_of(&self, break_type: BreakType) -> u32 {
        total_break_minutes(&self.breaks, break_type)
    }
}

/// Sums the durations of all breaks of `break_type`.
pub fn total_break_minutes(breaks: &[BreakDefinition], break_type: BreakType) -> u32 {
    breaks
        .iter()
        .filter(|b| b.break_type == break_type)
        .map(|b| b.duration)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(min: i64, max: i64, breaks: Vec<BreakDefinition>) -> DurationBand {
        DurationBand {
            min_hours: Decimal::from(min),
            max_hours: Decimal::from(max),
            breaks,
        }
    }

    #[test]
    fn test_band_is_half_open() {
        let b = band(6, 10, vec![]);
        assert!(!b.contains(Decimal::new(599, 2)));
        assert!(b.contains(Decimal::from(6)));
        assert!(b.contains(Decimal::new(999, 2)));
        assert!(!b.contains(Decimal::from(10)));
    }

    #[test]
    fn test_minutes_by_type() {
        let b = band(
            4,
            6,
            vec![
                BreakDefinition::new(1, 10, BreakType::Paid),
                BreakDefinition::new(2, 30, BreakType::Unpaid),
            ],
        );
        assert_eq!(b.minutes_of(BreakType::Paid), 10);
        assert_eq!(b.minutes_of(BreakType::Unpaid), 30);
    }

    #[test]
    fn test_break_serializes_type_field() {
        let rest = BreakDefinition::new(2, 30, BreakType::Unpaid);
        let json = serde_json::to_string(&rest).unwrap();
        assert_eq!(json, r#"{"id":2,"duration":30,"type":"unpaid"}"#);
    }

    #[test]
    fn test_band_deserializes_from_yaml_numbers() {
        let yaml = r#"
min_hours: 2
max_hours: 4
breaks:
  - { id: 1, duration: 10, type: paid }
"#;
        let b: DurationBand = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(b.min_hours, Decimal::from(2));
        assert_eq!(b.max_hours, Decimal::from(4));
        assert_eq!(b.breaks, vec![BreakDefinition::new(1, 10, BreakType::Paid)]);
    }
}
