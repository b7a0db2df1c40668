//! Response types for the Timeclock Engine API.
//!
//! This module defines the success bodies for each endpoint together with
//! the error response structures and error handling for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    total_break_minutes, BreakDefinition, BreakType, ElapsedDuration, ElapsedSummary, Employee,
    RecordContribution,
};

/// Response body for the `/entitlement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementResponse {
    /// The shift length that was looked up.
    pub shift_hours: Decimal,
    /// Breaks owed, in the order they should be taken.
    pub breaks: Vec<BreakDefinition>,
    /// Total paid break minutes.
    pub paid_minutes: u32,
    /// Total unpaid break minutes.
    pub unpaid_minutes: u32,
}

impl EntitlementResponse {
    /// Builds the response for `breaks` owed on a shift of `shift_hours`.
    pub fn new(shift_hours: Decimal, breaks: &[BreakDefinition]) -> Self {
        Self {
            shift_hours,
            breaks: breaks.to_vec(),
            paid_minutes: total_break_minutes(breaks, BreakType::Paid),
            unpaid_minutes: total_break_minutes(breaks, BreakType::Unpaid),
        }
    }
}

/// Response body for the `/elapsed` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElapsedResponse {
    /// Whole hours.
    pub hours: u64,
    /// Remaining minutes.
    pub minutes: u32,
    /// `HH:mm` rendering.
    pub formatted: String,
}

impl From<ElapsedDuration> for ElapsedResponse {
    fn from(elapsed: ElapsedDuration) -> Self {
        Self {
            hours: elapsed.hours,
            minutes: elapsed.minutes,
            formatted: elapsed.to_string(),
        }
    }
}

/// Response body for the `/totals` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalsResponse {
    /// The total elapsed time.
    pub total: ElapsedResponse,
    /// Elapsed time of the live session, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_session: Option<ElapsedResponse>,
    /// How each record contributed.
    pub records: Vec<RecordContribution>,
}

impl From<ElapsedSummary> for TotalsResponse {
    fn from(summary: ElapsedSummary) -> Self {
        Self {
            total: summary.total.into(),
            current_session: summary.live().map(Into::into),
            records: summary.records,
        }
    }
}

/// Response body for the `/clock-in` and `/clock-out` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockResponse {
    /// The employee after the transition, ready to be stored.
    pub employee: Employee,
    /// Length of the shift that was just closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<ElapsedResponse>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::OutOfRange { .. } => Self::bad_request(ApiError::with_details(
                "OUT_OF_RANGE",
                message,
                "The shift length is not covered by the break schedule",
            )),
            EngineError::NegativeInterval { .. } => Self::bad_request(ApiError::with_details(
                "NEGATIVE_INTERVAL",
                message,
                "The end time must not be earlier than the start time",
            )),
            EngineError::UnparseableTimestamp { .. } => Self::bad_request(ApiError::with_details(
                "UNPARSEABLE_TIMESTAMP",
                message,
                "Timestamps must be RFC 3339 or YYYY-MM-DDTHH:MM[:SS]",
            )),
            EngineError::InvalidClockTransition { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("INVALID_CLOCK_TRANSITION", message),
            },
            EngineError::InvalidBreakSchedule { .. }
            | EngineError::UnknownTimezone { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. } => Self::internal(ApiError::with_details(
                "CONFIG_ERROR",
                "Configuration error",
                message,
            )),
        }
    }
}
