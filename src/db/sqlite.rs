// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQLite pool wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - User profiles (`user_profiles`)
//! - Running activities (`running_activities`, owned by a user profile)

use crate::config::Config;
use crate::error::AppError;
use crate::models::{RunningActivity, RunningActivityInput, UserProfile, UserProfileInput};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const USER_PROFILE_COLUMNS: &str = "id, name, weight, height, birth_date";
const RUNNING_ACTIVITY_COLUMNS: &str =
    "id, user_profile_id, location, start_time, end_time, distance";

/// Pooled SQLite database.
///
/// Cloning is cheap; every clone shares the same pool. Each statement
/// acquires a connection for its own duration and returns it afterwards.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the pool described by `config` and bootstrap the schema.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| AppError::Database(format!("Invalid DATABASE_URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(config.database_acquire_timeout);

        // An in-memory database lives only as long as its connection.
        if config.database_url.contains(":memory:") {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {}", e)))?;

        let db = Self { pool };
        db.setup_schema().await?;

        tracing::info!(
            max_connections = config.database_max_connections,
            "Connected to SQLite"
        );

        Ok(db)
    }

    /// Create a private in-memory database for tests.
    pub async fn new_in_memory() -> Result<Self, AppError> {
        Self::connect(&Config::test_default()).await
    }

    /// Round-trip a trivial statement through the pool.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Create tables and indexes if they don't exist yet.
    async fn setup_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_profiles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                weight REAL NOT NULL,
                height REAL NOT NULL,
                birth_date TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS running_activities (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_profile_id INTEGER NOT NULL
                    REFERENCES user_profiles(id) ON DELETE CASCADE,
                location TEXT,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                distance REAL NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_running_activities_user_profile_id
            ON running_activities(user_profile_id);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ─── User Profile Operations ─────────────────────────────────

    /// List all user profiles.
    pub async fn list_user_profiles(&self) -> Result<Vec<UserProfile>, AppError> {
        let sql = format!("SELECT {USER_PROFILE_COLUMNS} FROM user_profiles ORDER BY id");
        Ok(sqlx::query_as::<_, UserProfile>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Get a user profile by ID.
    pub async fn get_user_profile(&self, id: i64) -> Result<Option<UserProfile>, AppError> {
        let sql = format!("SELECT {USER_PROFILE_COLUMNS} FROM user_profiles WHERE id = ?");
        Ok(sqlx::query_as::<_, UserProfile>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Check whether a user profile exists.
    pub async fn user_profile_exists(&self, id: i64) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM user_profiles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    /// Insert a user profile; storage assigns the ID.
    pub async fn insert_user_profile(
        &self,
        input: &UserProfileInput,
    ) -> Result<UserProfile, AppError> {
        let sql = format!(
            "INSERT INTO user_profiles (name, weight, height, birth_date) \
             VALUES (?, ?, ?, ?) RETURNING {USER_PROFILE_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, UserProfile>(&sql)
            .bind(&input.name)
            .bind(input.weight)
            .bind(input.height)
            .bind(input.birth_date)
            .fetch_one(&self.pool)
            .await?)
    }

    /// Overwrite every scalar column of an existing profile.
    ///
    /// Returns `None` if no row has this ID; the existence check and the
    /// write are a single statement.
    pub async fn update_user_profile(
        &self,
        id: i64,
        input: &UserProfileInput,
    ) -> Result<Option<UserProfile>, AppError> {
        let sql = format!(
            "UPDATE user_profiles SET name = ?, weight = ?, height = ?, birth_date = ? \
             WHERE id = ? RETURNING {USER_PROFILE_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, UserProfile>(&sql)
            .bind(&input.name)
            .bind(input.weight)
            .bind(input.height)
            .bind(input.birth_date)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Delete a user profile (and, via cascade, its activities).
    ///
    /// Returns whether a row was removed.
    pub async fn delete_user_profile(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM user_profiles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ─── Running Activity Operations ─────────────────────────────

    /// List all running activities.
    pub async fn list_running_activities(&self) -> Result<Vec<RunningActivity>, AppError> {
        let sql = format!("SELECT {RUNNING_ACTIVITY_COLUMNS} FROM running_activities ORDER BY id");
        Ok(sqlx::query_as::<_, RunningActivity>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    /// List the running activities owned by one user profile.
    pub async fn list_running_activities_for_user_profile(
        &self,
        user_profile_id: i64,
    ) -> Result<Vec<RunningActivity>, AppError> {
        let sql = format!(
            "SELECT {RUNNING_ACTIVITY_COLUMNS} FROM running_activities \
             WHERE user_profile_id = ? ORDER BY start_time, id"
        );
        Ok(sqlx::query_as::<_, RunningActivity>(&sql)
            .bind(user_profile_id)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Get a running activity by ID.
    pub async fn get_running_activity(
        &self,
        id: i64,
    ) -> Result<Option<RunningActivity>, AppError> {
        let sql = format!("SELECT {RUNNING_ACTIVITY_COLUMNS} FROM running_activities WHERE id = ?");
        Ok(sqlx::query_as::<_, RunningActivity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Check whether a running activity exists.
    pub async fn running_activity_exists(&self, id: i64) -> Result<bool, AppError> {
        let found: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM running_activities WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(found.is_some())
    }

    /// Insert a running activity; storage assigns the ID.
    pub async fn insert_running_activity(
        &self,
        input: &RunningActivityInput,
    ) -> Result<RunningActivity, AppError> {
        let sql = format!(
            "INSERT INTO running_activities \
             (user_profile_id, location, start_time, end_time, distance) \
             VALUES (?, ?, ?, ?, ?) RETURNING {RUNNING_ACTIVITY_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, RunningActivity>(&sql)
            .bind(input.user_profile_id)
            .bind(&input.location)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.distance)
            .fetch_one(&self.pool)
            .await?)
    }

    /// Overwrite every scalar column of an existing activity.
    ///
    /// Returns `None` if no row has this ID.
    pub async fn update_running_activity(
        &self,
        id: i64,
        input: &RunningActivityInput,
    ) -> Result<Option<RunningActivity>, AppError> {
        let sql = format!(
            "UPDATE running_activities SET user_profile_id = ?, location = ?, \
             start_time = ?, end_time = ?, distance = ? \
             WHERE id = ? RETURNING {RUNNING_ACTIVITY_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, RunningActivity>(&sql)
            .bind(input.user_profile_id)
            .bind(&input.location)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.distance)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Delete a running activity. Returns whether a row was removed.
    pub async fn delete_running_activity(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM running_activities WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn profile_input() -> UserProfileInput {
        UserProfileInput {
            id: None,
            name: Some("Test User".to_string()),
            weight: 70.0,
            height: 175.0,
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_autoincrement_never_reuses_ids() {
        let db = Database::new_in_memory().await.unwrap();

        let first = db.insert_user_profile(&profile_input()).await.unwrap();
        assert!(db.delete_user_profile(first.id).await.unwrap());

        let second = db.insert_user_profile(&profile_input()).await.unwrap();
        assert!(first.id > 0);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_timestamps_round_trip() {
        let db = Database::new_in_memory().await.unwrap();
        let profile = db.insert_user_profile(&profile_input()).await.unwrap();

        let start = Utc.with_ymd_and_hms(2024, 7, 10, 3, 10, 0).unwrap();
        let input = RunningActivityInput {
            id: None,
            user_profile_id: profile.id,
            location: None,
            start_time: start,
            end_time: start + chrono::TimeDelta::minutes(42),
            distance: 7.0,
        };
        let created = db.insert_running_activity(&input).await.unwrap();
        let fetched = db.get_running_activity(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.start_time, start);
        assert_eq!(fetched.duration(), chrono::TimeDelta::minutes(42));
    }

    #[tokio::test]
    async fn test_foreign_key_enforced_by_storage() {
        let db = Database::new_in_memory().await.unwrap();
        let start = Utc.with_ymd_and_hms(2024, 7, 10, 3, 10, 0).unwrap();
        let input = RunningActivityInput {
            id: None,
            user_profile_id: 9999,
            location: None,
            start_time: start,
            end_time: start,
            distance: 1.0,
        };

        let err = db.insert_running_activity(&input).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
