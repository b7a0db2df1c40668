//! Integration tests for the Timeclock Engine.
//!
//! This test suite drives the HTTP API end to end:
//! - Break entitlement lookups, including band boundaries
//! - Elapsed time between two timestamps
//! - Totals across closed, live and stale shift records
//! - Clock-in and clock-out transitions
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use timeclock_engine::api::{create_router, AppState};
use timeclock_engine::calculation::{parse_timestamp, FixedClock};
use timeclock_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

/// The fixed "now" for every test: 2024-03-02 10:30 in Auckland.
fn test_now() -> DateTime<Utc> {
    parse_timestamp("2024-03-02T10:30:00+13:00", &chrono_tz::Pacific::Auckland).unwrap()
}

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/timeclock").expect("Failed to load config");
    create_router(AppState::with_clock(config, FixedClock::new(test_now())))
}

async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), uri, body.to_string()).await
}

fn closed_entry(date: &str, start: &str, end: &str) -> Value {
    json!({
        "date": date,
        "start_time": format!("{}T{}", date, start),
        "end_time": format!("{}T{}", date, end)
    })
}

fn open_entry(date: &str, start: &str) -> Value {
    json!({
        "date": date,
        "start_time": format!("{}T{}", date, start)
    })
}

fn break_ids(result: &Value) -> Vec<u64> {
    result["breaks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_u64().unwrap())
        .collect()
}

// =============================================================================
// Entitlement
// =============================================================================

#[tokio::test]
async fn test_entitlement_short_shift_has_no_breaks() {
    let (status, result) = post("/entitlement", json!({ "shift_hours": 1.5 })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["breaks"].as_array().unwrap().is_empty());
    assert_eq!(result["paid_minutes"], 0);
    assert_eq!(result["unpaid_minutes"], 0);
}

#[tokio::test]
async fn test_entitlement_three_hours() {
    let (status, result) = post("/entitlement", json!({ "shift_hours": 3 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        result["breaks"],
        json!([{ "id": 1, "duration": 10, "type": "paid" }])
    );
}

#[tokio::test]
async fn test_entitlement_five_hours() {
    let (status, result) = post("/entitlement", json!({ "shift_hours": 5 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        result["breaks"],
        json!([
            { "id": 1, "duration": 10, "type": "paid" },
            { "id": 2, "duration": 30, "type": "unpaid" }
        ])
    );
    assert_eq!(result["paid_minutes"], 10);
    assert_eq!(result["unpaid_minutes"], 30);
}

#[tokio::test]
async fn test_entitlement_eleven_hours() {
    let (status, result) = post("/entitlement", json!({ "shift_hours": 11 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(break_ids(&result), vec![1, 2, 3, 4]);
    assert_eq!(result["breaks"][3]["type"], "paid");
}

#[tokio::test]
async fn test_entitlement_boundaries_use_next_band() {
    let expected = [(4, 2), (6, 3), (10, 4), (12, 5), (14, 6)];

    for (hours, count) in expected {
        let (status, result) = post("/entitlement", json!({ "shift_hours": hours })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            result["breaks"].as_array().unwrap().len(),
            count,
            "{} hours",
            hours
        );
    }
}

#[tokio::test]
async fn test_entitlement_fractional_string_hours() {
    let (status, result) = post("/entitlement", json!({ "shift_hours": "9.75" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(break_ids(&result), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_entitlement_negative_out_of_range() {
    let (status, result) = post("/entitlement", json!({ "shift_hours": -1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "OUT_OF_RANGE");
}

#[tokio::test]
async fn test_entitlement_too_long_out_of_range() {
    let (status, result) = post("/entitlement", json!({ "shift_hours": 25 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "OUT_OF_RANGE");
}

// =============================================================================
// Elapsed
// =============================================================================

#[tokio::test]
async fn test_elapsed_same_day() {
    let (status, result) = post(
        "/elapsed",
        json!({
            "start_time": "2024-03-01T09:00:00",
            "end_time": "2024-03-01T17:30:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["hours"], 8);
    assert_eq!(result["minutes"], 30);
    assert_eq!(result["formatted"], "08:30");
}

#[tokio::test]
async fn test_elapsed_zero_length() {
    let (status, result) = post(
        "/elapsed",
        json!({
            "start_time": "2024-03-01T09:00:00Z",
            "end_time": "2024-03-01T09:00:00Z"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["formatted"], "00:00");
}

#[tokio::test]
async fn test_elapsed_reversed_is_negative_interval() {
    let (status, result) = post(
        "/elapsed",
        json!({
            "start_time": "2024-03-01T17:30:00",
            "end_time": "2024-03-01T09:00:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "NEGATIVE_INTERVAL");
}

#[tokio::test]
async fn test_elapsed_unparseable_timestamp() {
    let (status, result) = post(
        "/elapsed",
        json!({
            "start_time": "nine o'clock",
            "end_time": "2024-03-01T09:00:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "UNPARSEABLE_TIMESTAMP");
    assert!(result["message"].as_str().unwrap().contains("nine o'clock"));
}

// =============================================================================
// Totals
// =============================================================================

#[tokio::test]
async fn test_totals_two_closed_shifts_normalize() {
    let (status, result) = post(
        "/totals",
        json!({
            "time_entries": [
                closed_entry("2024-02-28", "09:00:00", "11:15:00"),
                closed_entry("2024-02-29", "13:00:00", "16:50:00")
            ],
            "clocked_in": false
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total"]["hours"], 6);
    assert_eq!(result["total"]["minutes"], 5);
    assert_eq!(result["total"]["formatted"], "06:05");
    assert!(result.get("current_session").is_none());
}

#[tokio::test]
async fn test_totals_include_live_session() {
    let (status, result) = post(
        "/totals",
        json!({
            "time_entries": [
                closed_entry("2024-03-01", "09:00:00", "10:00:00"),
                open_entry("2024-03-02", "10:00:00")
            ],
            "clocked_in": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total"]["formatted"], "01:30");
    assert_eq!(result["current_session"]["formatted"], "00:30");
    assert_eq!(result["records"][1]["status"], "live");
}

#[tokio::test]
async fn test_totals_skip_stale_open_record() {
    let (status, result) = post(
        "/totals",
        json!({
            "time_entries": [
                closed_entry("2024-03-01", "09:00:00", "10:00:00"),
                open_entry("2024-03-02", "10:00:00")
            ],
            "clocked_in": false
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total"]["formatted"], "01:00");
    assert_eq!(result["records"][0]["status"], "closed");
    assert_eq!(result["records"][1]["status"], "skipped");
    assert_eq!(result["records"][1]["elapsed"]["hours"], 0);
    assert_eq!(result["records"][1]["elapsed"]["minutes"], 0);
}

#[tokio::test]
async fn test_totals_order_independent() {
    let entries = vec![
        closed_entry("2024-02-26", "08:00:00", "12:20:00"),
        closed_entry("2024-02-27", "09:10:00", "17:55:00"),
        closed_entry("2024-02-28", "22:00:00", "23:45:00"),
        open_entry("2024-03-02", "07:05:00"),
    ];
    let mut reversed = entries.clone();
    reversed.reverse();

    let (_, forward) = post("/totals", json!({ "time_entries": entries, "clocked_in": true })).await;
    let (_, backward) =
        post("/totals", json!({ "time_entries": reversed, "clocked_in": true })).await;

    assert_eq!(forward["total"], backward["total"]);
    // 4:20 + 8:45 + 1:45 + 3:25 live
    assert_eq!(forward["total"]["formatted"], "18:15");
}

#[tokio::test]
async fn test_totals_unparseable_record_fails_whole_request() {
    let (status, result) = post(
        "/totals",
        json!({
            "time_entries": [
                closed_entry("2024-03-01", "09:00:00", "10:00:00"),
                { "date": "2024-03-01", "start_time": "2024-03-01T11:00:00", "end_time": "later" }
            ],
            "clocked_in": false
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "UNPARSEABLE_TIMESTAMP");
}

#[tokio::test]
async fn test_totals_empty_entries() {
    let (status, result) = post("/totals", json!({ "time_entries": [], "clocked_in": false })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total"]["formatted"], "00:00");
    assert!(result["records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_totals_accept_stored_employee_record() {
    let (status, result) = post(
        "/totals",
        json!({
            "id": 1,
            "name": "Tama",
            "key": "0001",
            "clockedIn": true,
            "timeEntries": [
                {
                    "date": "2024-02-28",
                    "startTime": "2024-02-28T09:00:00+13:00",
                    "endTime": "2024-02-28T11:15:00+13:00",
                    "duration": "02:15"
                },
                { "date": "2024-03-02", "startTime": "2024-03-02T10:00:00+13:00" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total"]["formatted"], "02:45");
    assert_eq!(result["current_session"]["formatted"], "00:30");
}

// =============================================================================
// Clock transitions
// =============================================================================

fn employee(clocked_in: bool, time_entries: Value) -> Value {
    json!({
        "id": 7,
        "name": "Mere",
        "key": "4321",
        "clockedIn": clocked_in,
        "timeEntries": time_entries
    })
}

#[tokio::test]
async fn test_clock_in_opens_record_at_now() {
    let (status, result) = post("/clock-in", employee(false, json!([]))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["employee"]["clockedIn"], true);
    assert_eq!(result["employee"]["timeEntries"][0]["date"], "2024-03-02");
    assert_eq!(
        result["employee"]["timeEntries"][0]["startTime"],
        "2024-03-02T10:30:00+13:00"
    );
    assert!(result.get("elapsed").is_none());
}

#[tokio::test]
async fn test_clock_in_twice_is_conflict() {
    let open = json!([{ "date": "2024-03-02", "startTime": "2024-03-02T08:00:00+13:00" }]);
    let (status, result) = post("/clock-in", employee(true, open)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(result["code"], "INVALID_CLOCK_TRANSITION");
}

#[tokio::test]
async fn test_clock_out_closes_open_record() {
    let open = json!([{ "date": "2024-03-02", "startTime": "2024-03-02T08:00:00+13:00" }]);
    let (status, result) = post("/clock-out", employee(true, open)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["elapsed"]["formatted"], "02:30");
    assert_eq!(result["employee"]["clockedIn"], false);
    assert_eq!(
        result["employee"]["timeEntries"][0]["endTime"],
        "2024-03-02T10:30:00+13:00"
    );
    assert_eq!(result["employee"]["timeEntries"][0]["duration"], "02:30");
}

#[tokio::test]
async fn test_clock_out_when_not_clocked_in_is_conflict() {
    let (status, result) = post("/clock-out", employee(false, json!([]))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(result["code"], "INVALID_CLOCK_TRANSITION");
}

// =============================================================================
// Request errors
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/entitlement",
        "{ not json".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_field() {
    let (status, result) = post("/elapsed", json!({ "start_time": "2024-03-01T09:00:00" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("end_time"));
}

#[tokio::test]
async fn test_error_wrong_field_type() {
    let (status, result) = post(
        "/totals",
        json!({ "time_entries": [], "clocked_in": "yes" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}
