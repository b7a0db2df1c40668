//! HTTP request handlers for the Timeclock Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{Employee, ShiftRecord};

use super::request::{ElapsedRequest, EntitlementRequest, TotalsRequest};
use super::response::{
    ApiError, ApiErrorResponse, ClockResponse, ElapsedResponse, EntitlementResponse,
    TotalsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entitlement", post(entitlement_handler))
        .route("/elapsed", post(elapsed_handler))
        .route("/totals", post(totals_handler))
        .route("/clock-in", post(clock_in_handler))
        .route("/clock-out", post(clock_out_handler))
        .with_state(state)
}

/// Handler for POST /entitlement.
///
/// Returns the breaks owed for a planned shift length.
async fn entitlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let result = state
        .config()
        .entitlement_for(request.shift_hours)
        .map(|breaks| EntitlementResponse::new(request.shift_hours, breaks));

    if let Ok(response) = &result {
        info!(
            correlation_id = %correlation_id,
            shift_hours = %request.shift_hours,
            breaks = response.breaks.len(),
            duration_us = started.elapsed().as_micros(),
            "Entitlement lookup completed"
        );
    }

    respond(correlation_id, result)
}

/// Handler for POST /elapsed.
///
/// Returns the elapsed time between two timestamps.
async fn elapsed_handler(
    State(state): State<AppState>,
    payload: Result<Json<ElapsedRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing elapsed request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let result = state
        .engine()
        .elapsed_between_str(&request.start_time, &request.end_time)
        .map(ElapsedResponse::from);

    if let Ok(response) = &result {
        info!(
            correlation_id = %correlation_id,
            elapsed = %response.formatted,
            duration_us = started.elapsed().as_micros(),
            "Elapsed calculation completed"
        );
    }

    respond(correlation_id, result)
}

/// Handler for POST /totals.
///
/// Returns an employee's total elapsed time with a per-record breakdown.
async fn totals_handler(
    State(state): State<AppState>,
    payload: Result<Json<TotalsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing totals request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let records: Vec<ShiftRecord> = request.time_entries.into_iter().map(Into::into).collect();

    let started = Instant::now();
    let result = state
        .engine()
        .summarize(&records, request.clocked_in)
        .map(TotalsResponse::from);

    if let Ok(response) = &result {
        info!(
            correlation_id = %correlation_id,
            records_count = records.len(),
            clocked_in = request.clocked_in,
            total = %response.total.formatted,
            duration_us = started.elapsed().as_micros(),
            "Totals calculation completed"
        );
    }

    respond(correlation_id, result)
}

/// Handler for POST /clock-in.
///
/// Opens a new shift record on the posted employee at the current time and
/// returns the updated employee for the caller to store.
async fn clock_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<Employee>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing clock-in request");

    let mut employee = match payload {
        Ok(Json(employee)) => employee,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let opened = employee.clock_in(state.engine().now()).map(|_| ());
    if opened.is_ok() {
        info!(
            correlation_id = %correlation_id,
            employee_id = employee.id,
            "Employee clocked in"
        );
    }

    respond(
        correlation_id,
        opened.map(|()| ClockResponse {
            employee,
            elapsed: None,
        }),
    )
}

/// Handler for POST /clock-out.
///
/// Closes the posted employee's open shift record at the current time.
async fn clock_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<Employee>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing clock-out request");

    let mut employee = match payload {
        Ok(Json(employee)) => employee,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = employee.clock_out(state.engine().now());
    if let Ok(elapsed) = &result {
        info!(
            correlation_id = %correlation_id,
            employee_id = employee.id,
            elapsed = %elapsed,
            "Employee clocked out"
        );
    }

    respond(
        correlation_id,
        result.map(|elapsed| ClockResponse {
            employee,
            elapsed: Some(elapsed.into()),
        }),
    )
}

/// Renders a calculation result as a JSON response.
fn respond<T: Serialize>(correlation_id: Uuid, result: Result<T, EngineError>) -> Response {
    match result {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(body),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
