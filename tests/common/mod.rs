// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_tracker::config::Config;
use activity_tracker::db::Database;
use activity_tracker::models::{RunningActivityInput, UserProfileInput};
use activity_tracker::routes::create_router;
use activity_tracker::AppState;
use axum::body::Body;
use axum::http::{header, Request, Response};
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;

/// Create a private in-memory database.
#[allow(dead_code)]
pub async fn test_db() -> Database {
    Database::new_in_memory()
        .await
        .expect("Failed to open in-memory database")
}

/// Create a test app over a fresh in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db().await;
    let state = Arc::new(AppState::new(config, db));
    (create_router(state.clone()), state)
}

#[allow(dead_code)]
pub fn utc(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("valid RFC3339 timestamp")
        .with_timezone(&Utc)
}

/// The profile used throughout the scenarios.
#[allow(dead_code)]
pub fn test_user_input() -> UserProfileInput {
    UserProfileInput {
        id: None,
        name: Some("Test User".to_string()),
        weight: 70.0,
        height: 175.0,
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
    }
}

/// A 30 minute, 2.5 km run owned by `user_profile_id`.
#[allow(dead_code)]
pub fn cebu_run_input(user_profile_id: i64) -> RunningActivityInput {
    RunningActivityInput {
        id: None,
        user_profile_id,
        location: Some("Cebu City".to_string()),
        start_time: utc("2024-07-10T03:10:00Z"),
        end_time: utc("2024-07-10T03:40:00Z"),
        distance: 2.5,
    }
}

/// Build a JSON request.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a request without a body.
#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
