//! Error types for the Timeclock Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during break lookups and
//! elapsed-time calculations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Timeclock Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timeclock_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A shift length fell outside every configured duration band.
    #[error("Shift length {shift_hours} hours is outside the break schedule")]
    OutOfRange {
        /// The shift length that was looked up, in hours.
        shift_hours: Decimal,
    },

    /// An interval ended before it started.
    #[error("Interval ends at {end} before it starts at {start}")]
    NegativeInterval {
        /// The start of the interval.
        start: DateTime<Utc>,
        /// The end of the interval.
        end: DateTime<Utc>,
    },

    /// A timestamp could not be converted to an instant.
    #[error("Unparseable timestamp '{value}': {message}")]
    UnparseableTimestamp {
        /// The raw timestamp text.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// The break schedule violated one of its structural invariants.
    #[error("Invalid break schedule: {message}")]
    InvalidBreakSchedule {
        /// A description of the violated invariant.
        message: String,
    },

    /// The configured timezone is not a known IANA zone.
    #[error("Unknown timezone: {name}")]
    UnknownTimezone {
        /// The timezone name that failed to resolve.
        name: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A clock-in or clock-out was attempted from the wrong state.
    #[error("Invalid clock transition for employee {employee_id}: {message}")]
    InvalidClockTransition {
        /// The employee whose state was being changed.
        employee_id: u32,
        /// A description of why the transition was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
