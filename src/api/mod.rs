//! HTTP API module for the Timeclock Engine.
//!
//! This module provides the REST API endpoints that expose break
//! entitlements, elapsed-time totals and clock transitions to the timeclock UI.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ElapsedRequest, EntitlementRequest, ShiftRecordRequest, TotalsRequest};
pub use response::{
    ApiError, ClockResponse, ElapsedResponse, EntitlementResponse, TotalsResponse,
};
pub use state::AppState;
