//! Request types for the Timeclock Engine API.
//!
//! This module defines the JSON request structures for the `/entitlement`,
//! `/elapsed` and `/totals` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftRecord;

/// Request body for the `/entitlement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// Planned shift length in hours (may be fractional).
    pub shift_hours: Decimal,
}

/// Request body for the `/elapsed` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElapsedRequest {
    /// When the interval started.
    pub start_time: String,
    /// When the interval ended.
    pub end_time: String,
}

/// Request body for the `/totals` endpoint.
///
/// Also accepts the camelCase names of a stored [`Employee`](crate::models::Employee),
/// so an employee record can be posted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalsRequest {
    /// The employee's shift records.
    #[serde(alias = "timeEntries")]
    pub time_entries: Vec<ShiftRecordRequest>,
    /// Whether the employee is currently clocked in.
    #[serde(alias = "clockedIn")]
    pub clocked_in: bool,
}

/// A shift record in a totals request.
///
/// Stored fields the calculation does not read (`duration`, `adjustedHours`)
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRecordRequest {
    /// The calendar day the shift belongs to.
    pub date: NaiveDate,
    /// When the shift started.
    #[serde(alias = "startTime")]
    pub start_time: String,
    /// When the shift ended, if it has.
    #[serde(default, alias = "endTime")]
    pub end_time: Option<String>,
}

impl From<ShiftRecordRequest> for ShiftRecord {
    fn from(req: ShiftRecordRequest) -> Self {
        ShiftRecord {
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            duration: None,
            adjusted_hours: None,
        }
    }
}
