// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Running activity routes.

use super::ensure_id_matches;
use crate::error::{AppError, Result};
use crate::models::running_activity::total_minutes;
use crate::models::{RunningActivity, RunningActivityInput};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/runningactivities",
            get(list_running_activities).post(create_running_activity),
        )
        .route(
            "/runningactivities/{id}",
            get(get_running_activity)
                .put(update_running_activity)
                .delete(delete_running_activity),
        )
}

/// Running activity with derived fields.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct RunningActivityResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_profile_id: i64,
    pub location: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub distance: f64,
    /// Negative when the end precedes the start
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration_seconds: i64,
    pub duration_minutes: f64,
    /// Minutes per kilometer; `null` when distance is not positive
    pub average_pace: Option<f64>,
}

impl From<RunningActivity> for RunningActivityResponse {
    fn from(activity: RunningActivity) -> Self {
        let duration = activity.duration();
        Self {
            id: activity.id,
            user_profile_id: activity.user_profile_id,
            average_pace: activity.average_pace(),
            start_time: format_utc_rfc3339(activity.start_time),
            end_time: format_utc_rfc3339(activity.end_time),
            duration_seconds: duration.num_seconds(),
            duration_minutes: total_minutes(duration),
            location: activity.location,
            distance: activity.distance,
        }
    }
}

async fn list_running_activities(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RunningActivityResponse>>> {
    let activities = state.running_activity_service.list().await?;
    tracing::debug!(count = activities.len(), "Listed running activities");
    Ok(Json(activities.into_iter().map(Into::into).collect()))
}

async fn get_running_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<RunningActivityResponse>> {
    let activity = state
        .running_activity_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Running activity {} not found", id)))?;
    Ok(Json(activity.into()))
}

async fn create_running_activity(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RunningActivityInput>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(input) = payload?;
    let activity = state.running_activity_service.create(input).await?;
    let location = format!("/runningactivities/{}", activity.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(RunningActivityResponse::from(activity)),
    ))
}

async fn update_running_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<RunningActivityInput>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(input) = payload?;
    ensure_id_matches(id, input.id)?;
    state.running_activity_service.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_running_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.running_activity_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
