//! Shift record model.
//!
//! A [`ShiftRecord`] is one clocked-in interval as stored in an employee's
//! time entries. Timestamps are kept as text and parsed by the engine so that
//! a malformed entry surfaces as an error instead of disappearing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One continuous work interval.
///
/// A record without an `end_time` is open: the employee has clocked in and
/// not yet clocked out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// The calendar day the shift belongs to.
    pub date: NaiveDate,
    /// When the shift started (RFC 3339, or naive ISO-8601 in organisation time).
    pub start_time: String,
    /// When the shift ended, if it has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Formatted `HH:mm` duration stamped at clock-out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Manually adjusted hours, if a supervisor corrected the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_hours: Option<Decimal>,
}

impl ShiftRecord {
    /// Creates an open record starting at `start_time`.
    pub fn open(date: NaiveDate, start_time: impl Into<String>) -> Self {
        Self {
            date,
            start_time: start_time.into(),
            end_time: None,
            duration: None,
            adjusted_hours: None,
        }
    }

    /// Creates a closed record.
    pub fn closed(
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            end_time: Some(end_time.into()),
            ..Self::open(date, start_time)
        }
    }

    /// Returns true if the record has no end time.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeclock_engine::models::ShiftRecord;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let record = ShiftRecord::open(date, "2024-03-01T09:00:00+13:00");
    /// assert!(record.is_open());
    /// ```
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}
