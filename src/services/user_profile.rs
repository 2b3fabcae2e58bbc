// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile service.

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{UserProfile, UserProfileInput};
use validator::Validate;

/// CRUD operations over user profiles.
#[derive(Clone)]
pub struct UserProfileService {
    db: Database,
}

impl UserProfileService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All profiles, as a read-only snapshot.
    pub async fn list(&self) -> Result<Vec<UserProfile>> {
        self.db.list_user_profiles().await
    }

    /// Look up a profile; absence is `Ok(None)`.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<UserProfile>> {
        self.db.get_user_profile(id).await
    }

    /// Validate and insert a new profile. Any `id` on the input is ignored.
    pub async fn create(&self, input: UserProfileInput) -> Result<UserProfile> {
        input.validate()?;

        let profile = self.db.insert_user_profile(&input).await?;
        tracing::info!(user_profile_id = profile.id, "Created user profile");
        Ok(profile)
    }

    /// Replace every scalar field of profile `id`.
    ///
    /// Fails with `NotFound` if the profile doesn't exist.
    pub async fn update(&self, id: i64, input: UserProfileInput) -> Result<UserProfile> {
        input.validate()?;

        let profile = self
            .db
            .update_user_profile(id, &input)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User profile {} not found", id)))?;

        tracing::info!(user_profile_id = id, "Updated user profile");
        Ok(profile)
    }

    /// Delete profile `id`. Deleting a missing profile succeeds.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let deleted = self.db.delete_user_profile(id).await?;
        if deleted {
            tracing::info!(user_profile_id = id, "Deleted user profile");
        } else {
            tracing::debug!(
                user_profile_id = id,
                "Delete of absent user profile ignored"
            );
        }
        Ok(())
    }
}
