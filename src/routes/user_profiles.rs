// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile routes.

use super::ensure_id_matches;
use super::running_activities::RunningActivityResponse;
use crate::error::{AppError, Result};
use crate::models::{UserProfile, UserProfileInput};
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
            "/userprofiles",
            get(list_user_profiles).post(create_user_profile),
        )
        .route(
            "/userprofiles/{id}",
            get(get_user_profile)
                .put(update_user_profile)
                .delete(delete_user_profile),
        )
        .route(
            "/userprofiles/{id}/runningactivities",
            get(list_user_profile_activities),
        )
}

/// User profile with derived fields.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    pub name: Option<String>,
    pub weight: f64,
    pub height: f64,
    /// YYYY-MM-DD
    pub birth_date: String,
    pub age: i32,
    /// `null` when height is not positive
    pub bmi: Option<f64>,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            age: profile.age(),
            bmi: profile.bmi(),
            birth_date: profile.birth_date.format("%Y-%m-%d").to_string(),
            name: profile.name,
            weight: profile.weight,
            height: profile.height,
        }
    }
}

async fn list_user_profiles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserProfileResponse>>> {
    let profiles = state.user_profile_service.list().await?;
    tracing::debug!(count = profiles.len(), "Listed user profiles");
    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

async fn get_user_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<UserProfileResponse>> {
    let profile = state
        .user_profile_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User profile {} not found", id)))?;
    Ok(Json(profile.into()))
}

async fn create_user_profile(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<UserProfileInput>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(input) = payload?;
    let profile = state.user_profile_service.create(input).await?;
    let location = format!("/userprofiles/{}", profile.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserProfileResponse::from(profile)),
    ))
}

async fn update_user_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<UserProfileInput>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(input) = payload?;
    ensure_id_matches(id, input.id)?;
    state.user_profile_service.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_user_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.user_profile_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_user_profile_activities(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<RunningActivityResponse>>> {
    let activities = state
        .running_activity_service
        .list_for_user_profile(id)
        .await?;
    Ok(Json(activities.into_iter().map(Into::into).collect()))
}
