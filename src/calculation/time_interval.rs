//! Elapsed time calculations.
//!
//! This module provides the [`TimeIntervalEngine`], which measures worked
//! time between two instants and totals it across an employee's shift
//! records. All civil-time interpretation happens in one configured zone;
//! the current instant comes from an injected [`Clock`].

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ElapsedDuration, ElapsedSummary, RecordContribution, RecordStatus, ShiftRecord,
};

use super::clock::{Clock, SystemClock};
use super::timestamp::parse_timestamp;

/// Measures and aggregates worked time in a fixed timezone.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_tz::Pacific::Auckland;
/// use timeclock_engine::calculation::{FixedClock, TimeIntervalEngine};
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 1, 4, 30, 0).unwrap();
/// let engine = TimeIntervalEngine::with_clock(Auckland, FixedClock::new(now));
///
/// let elapsed = engine
///     .elapsed_between_str("2024-03-01T09:00:00", "2024-03-01T17:30:00")
///     .unwrap();
/// assert_eq!(elapsed.to_string(), "08:30");
/// ```
#[derive(Debug, Clone)]
pub struct TimeIntervalEngine<C = SystemClock> {
    timezone: Tz,
    clock: C,
}

impl TimeIntervalEngine<SystemClock> {
    /// Creates an engine that reads the system clock.
    pub fn new(timezone: Tz) -> Self {
        Self::with_clock(timezone, SystemClock)
    }
}

impl<C: Clock> TimeIntervalEngine<C> {
    /// Creates an engine with an explicit clock.
    pub fn with_clock(timezone: Tz, clock: C) -> Self {
        Self { timezone, clock }
    }

    /// The zone used for civil-time interpretation.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The current instant, as civil time in the engine's zone.
    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.timezone)
    }

    /// Parses a stored timestamp, reading naive values in the engine's zone.
    pub fn parse(&self, value: &str) -> EngineResult<DateTime<Tz>> {
        parse_timestamp(value, &self.timezone).map(|instant| instant.with_timezone(&self.timezone))
    }

    /// Elapsed time from `start` to `end`, rounded to the nearest minute.
    ///
    /// Both instants are converted into the engine's zone first; the
    /// difference is still taken on the absolute timeline, so a shift that
    /// crosses a daylight-saving change reports the time actually worked.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NegativeInterval`] if `end` precedes `start`.
    pub fn elapsed_between<A, B>(
        &self,
        start: &DateTime<A>,
        end: &DateTime<B>,
    ) -> EngineResult<ElapsedDuration>
    where
        A: TimeZone,
        B: TimeZone,
    {
        let start = start.with_timezone(&self.timezone);
        let end = end.with_timezone(&self.timezone);

        ElapsedDuration::from_duration(end.clone() - start.clone()).ok_or_else(|| {
            EngineError::NegativeInterval {
                start: start.with_timezone(&Utc),
                end: end.with_timezone(&Utc),
            }
        })
    }

    /// Parses both timestamps and returns the elapsed time between them.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnparseableTimestamp`] if either value cannot be parsed
    /// - [`EngineError::NegativeInterval`] if `end` precedes `start`
    pub fn elapsed_between_str(&self, start: &str, end: &str) -> EngineResult<ElapsedDuration> {
        let start = self.parse(start)?;
        let end = self.parse(end)?;
        self.elapsed_between(&start, &end)
    }

    /// Length of the interval in fractional hours, for break lookups.
    ///
    /// ```
    /// use chrono_tz::Pacific::Auckland;
    /// use rust_decimal::Decimal;
    /// use timeclock_engine::calculation::TimeIntervalEngine;
    ///
    /// let engine = TimeIntervalEngine::new(Auckland);
    /// let start = engine.parse("2024-03-01T09:00:00").unwrap();
    /// let end = engine.parse("2024-03-01T14:30:00").unwrap();
    /// assert_eq!(engine.shift_hours_between(&start, &end).unwrap(), Decimal::new(55, 1));
    /// ```
    pub fn shift_hours_between<A, B>(
        &self,
        start: &DateTime<A>,
        end: &DateTime<B>,
    ) -> EngineResult<Decimal>
    where
        A: TimeZone,
        B: TimeZone,
    {
        self.elapsed_between(start, end)
            .map(|elapsed| elapsed.as_hours())
    }

    /// Totals the elapsed time of `records`.
    ///
    /// A closed record counts to its end time. An open record counts to
    /// "now" when `clocked_in` is true and is skipped otherwise.
    ///
    /// # Errors
    ///
    /// Fails on the first record whose timestamps cannot be parsed or whose
    /// end precedes its start; no partial total is returned.
    pub fn total_elapsed_for(
        &self,
        records: &[ShiftRecord],
        clocked_in: bool,
    ) -> EngineResult<ElapsedDuration> {
        self.summarize(records, clocked_in).map(|summary| summary.total)
    }

    /// Elapsed time of the live session, if the employee is clocked in.
    ///
    /// Returns `Ok(None)` when not clocked in or when no record is open.
    pub fn current_session(
        &self,
        records: &[ShiftRecord],
        clocked_in: bool,
    ) -> EngineResult<Option<ElapsedDuration>> {
        if !clocked_in {
            return Ok(None);
        }

        match records.iter().rev().find(|r| r.is_open()) {
            Some(record) => {
                let start = self.parse(&record.start_time)?;
                self.elapsed_between(&start, &self.now()).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Totals `records` and reports how each one contributed.
    ///
    /// Hours and minutes are summed separately and the minute overflow is
    /// carried once at the end, so the result does not depend on record
    /// order.
    pub fn summarize(
        &self,
        records: &[ShiftRecord],
        clocked_in: bool,
    ) -> EngineResult<ElapsedSummary> {
        let now = self.now();
        let mut contributions = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let start = self.parse(&record.start_time)?;

            let (status, elapsed) = match (&record.end_time, clocked_in) {
                (Some(end_time), _) => {
                    let end = self.parse(end_time)?;
                    (RecordStatus::Closed, self.elapsed_between(&start, &end)?)
                }
                (None, true) => (RecordStatus::Live, self.elapsed_between(&start, &now)?),
                (None, false) => {
                    debug!(
                        index,
                        date = %record.date,
                        start_time = %record.start_time,
                        "Skipping open record while clocked out"
                    );
                    (RecordStatus::Skipped, ElapsedDuration::ZERO)
                }
            };

            contributions.push(RecordContribution {
                index,
                date: record.date,
                status,
                elapsed,
            });
        }

        let total: ElapsedDuration = contributions
            .iter()
            .filter(|c| c.status != RecordStatus::Skipped)
            .map(|c| c.elapsed)
            .sum();

        Ok(ElapsedSummary {
            total,
            records: contributions,
            computed_at: now.with_timezone(&Utc),
        })
    }
}
