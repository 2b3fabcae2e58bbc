// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Running activity service.
//!
//! Same contract as the profile service. Create and update additionally
//! check that the owning profile exists; SQLite enforces the foreign key
//! as well.

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{RunningActivity, RunningActivityInput};
use validator::Validate;

/// CRUD operations over running activities.
#[derive(Clone)]
pub struct RunningActivityService {
    db: Database,
}

impl RunningActivityService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All activities, as a read-only snapshot.
    pub async fn list(&self) -> Result<Vec<RunningActivity>> {
        self.db.list_running_activities().await
    }

    /// Activities owned by one profile, oldest first.
    pub async fn list_for_user_profile(
        &self,
        user_profile_id: i64,
    ) -> Result<Vec<RunningActivity>> {
        if !self.db.user_profile_exists(user_profile_id).await? {
            return Err(AppError::NotFound(format!(
                "User profile {} not found",
                user_profile_id
            )));
        }
        self.db
            .list_running_activities_for_user_profile(user_profile_id)
            .await
    }

    /// Look up an activity; absence is `Ok(None)`.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<RunningActivity>> {
        self.db.get_running_activity(id).await
    }

    /// Validate and insert a new activity. Any `id` on the input is ignored.
    pub async fn create(&self, input: RunningActivityInput) -> Result<RunningActivity> {
        input.validate()?;
        self.check_user_profile(input.user_profile_id).await?;

        let activity = self.db.insert_running_activity(&input).await?;
        tracing::info!(
            running_activity_id = activity.id,
            user_profile_id = activity.user_profile_id,
            "Created running activity"
        );
        Ok(activity)
    }

    /// Replace every scalar field of activity `id`.
    ///
    /// Fails with `NotFound` if the activity doesn't exist, even when the
    /// input also names a missing profile.
    pub async fn update(&self, id: i64, input: RunningActivityInput) -> Result<RunningActivity> {
        input.validate()?;

        let not_found = || AppError::NotFound(format!("Running activity {} not found", id));
        if !self.db.running_activity_exists(id).await? {
            return Err(not_found());
        }
        self.check_user_profile(input.user_profile_id).await?;

        let activity = self
            .db
            .update_running_activity(id, &input)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!(running_activity_id = id, "Updated running activity");
        Ok(activity)
    }

    /// Delete activity `id`. Deleting a missing activity succeeds.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let deleted = self.db.delete_running_activity(id).await?;
        if deleted {
            tracing::info!(running_activity_id = id, "Deleted running activity");
        } else {
            tracing::debug!(
                running_activity_id = id,
                "Delete of absent running activity ignored"
            );
        }
        Ok(())
    }

    async fn check_user_profile(&self, user_profile_id: i64) -> Result<()> {
        if !self.db.user_profile_exists(user_profile_id).await? {
            return Err(AppError::Validation(format!(
                "userProfileId: user profile {} does not exist",
                user_profile_id
            )));
        }
        Ok(())
    }
}
