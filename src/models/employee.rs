//! Employee model and clock state.
//!
//! This module defines the [`Employee`] roster entry together with the break
//! bookkeeping types stored alongside it, and the clock-in/clock-out
//! transitions that keep the open-record invariant intact.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_timestamp;
use crate::error::{EngineError, EngineResult};

use super::{ElapsedDuration, ShiftRecord};

/// A break the employee is currently on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentBreak {
    /// The entitlement break being taken.
    pub break_id: u32,
    /// When the break started.
    pub start_time: String,
}

/// A break the employee has taken or started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakTaken {
    /// The entitlement break that was taken.
    pub break_id: u32,
    /// When the break started.
    pub start_time: String,
    /// When the break ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// An employee on the timeclock roster.
///
/// `clocked_in` is true exactly when one of `time_entries` is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Badge or PIN key used at the timeclock.
    pub key: String,
    /// Whether the employee is currently on shift.
    #[serde(default)]
    pub clocked_in: bool,
    /// Shift records, oldest first.
    #[serde(default)]
    pub time_entries: Vec<ShiftRecord>,
    /// Breaks recorded against the employee's shifts.
    #[serde(default)]
    pub breaks_taken: Vec<BreakTaken>,
    /// The break in progress, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_break: Option<CurrentBreak>,
}

impl Employee {
    /// Starts a new shift at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidClockTransition`] if the employee is
    /// already clocked in.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::TimeZone;
    /// use chrono_tz::Pacific::Auckland;
    /// use timeclock_engine::models::Employee;
    ///
    /// let mut employee = Employee {
    ///     id: 1,
    ///     name: "Aroha".to_string(),
    ///     key: "1234".to_string(),
    ///     clocked_in: false,
    ///     time_entries: vec![],
    ///     breaks_taken: vec![],
    ///     current_break: None,
    /// };
    /// let now = Auckland.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    /// employee.clock_in(now).unwrap();
    /// assert!(employee.clocked_in);
    /// assert!(employee.time_entries[0].is_open());
    /// ```
    pub fn clock_in(&mut self, now: DateTime<Tz>) -> EngineResult<&ShiftRecord> {
        if self.clocked_in {
            return Err(self.transition_error("already clocked in"));
        }

        self.time_entries
            .push(ShiftRecord::open(now.date_naive(), now.to_rfc3339()));
        self.clocked_in = true;

        let index = self.time_entries.len() - 1;
        Ok(&self.time_entries[index])
    }

    /// Ends the open shift at `now`, stamping its end time and duration.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidClockTransition`] if the employee is not clocked
    ///   in or has no open record.
    /// - [`EngineError::UnparseableTimestamp`] if the open record's start time
    ///   cannot be read.
    /// - [`EngineError::NegativeInterval`] if `now` precedes the start time.
    pub fn clock_out(&mut self, now: DateTime<Tz>) -> EngineResult<ElapsedDuration> {
        if !self.clocked_in {
            return Err(self.transition_error("not clocked in"));
        }

        let index = self
            .time_entries
            .iter()
            .rposition(ShiftRecord::is_open)
            .ok_or_else(|| self.transition_error("clocked in without an open time entry"))?;

        let start = parse_timestamp(&self.time_entries[index].start_time, &now.timezone())?;
        let end = now.with_timezone(&Utc);
        let elapsed = ElapsedDuration::from_duration(end - start)
            .ok_or(EngineError::NegativeInterval { start, end })?;

        let entry = &mut self.time_entries[index];
        entry.end_time = Some(now.to_rfc3339());
        entry.duration = Some(elapsed.to_string());
        self.clocked_in = false;

        Ok(elapsed)
    }

    fn transition_error(&self, message: &str) -> EngineError {
        EngineError::InvalidClockTransition {
            employee_id: self.id,
            message: message.to_string(),
        }
    }
}
