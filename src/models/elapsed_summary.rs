//! Aggregation result models.
//!
//! An [`ElapsedSummary`] records how each shift record contributed to an
//! employee's running total, so a caller can show why an entry was left out.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ElapsedDuration;

/// How a record was treated during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// The record has an end time.
    Closed,
    /// The record is open and the employee is clocked in; it runs to "now".
    Live,
    /// The record is open but the employee is not clocked in.
    Skipped,
}

/// The contribution of a single record to a total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordContribution {
    /// Position of the record in the input sequence.
    pub index: usize,
    /// The calendar day of the record.
    pub date: NaiveDate,
    /// How the record was treated.
    pub status: RecordStatus,
    /// Elapsed time counted for the record (zero when skipped).
    pub elapsed: ElapsedDuration,
}

/// The total elapsed time for a set of records, with a per-record breakdown.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{ElapsedDuration, ElapsedSummary};
/// use chrono::Utc;
///
/// let summary = ElapsedSummary {
///     total: ElapsedDuration::from_minutes(90),
///     records: vec![],
///     computed_at: Utc::now(),
/// };
/// assert_eq!(summary.total.to_string(), "01:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedSummary {
    /// Sum of all included records.
    pub total: ElapsedDuration,
    /// One entry per input record, in input order.
    pub records: Vec<RecordContribution>,
    /// The instant used as the end of a live record.
    pub computed_at: DateTime<Utc>,
}

impl ElapsedSummary {
    /// The elapsed time of the live record, if one was counted.
    pub fn live(&self) -> Option<ElapsedDuration> {
        self.records
            .iter()
            .find(|r| r.status == RecordStatus::Live)
            .map(|r| r.elapsed)
    }

    /// Number of open records left out of the total.
    pub fn skipped_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == RecordStatus::Skipped)
            .count()
    }
}
