// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity-Tracker: user profiles and running activities over REST
//!
//! This crate provides the backend API for storing user profiles and their
//! running activities, with derived metrics (age, BMI, duration, pace)
//! computed on read.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::Database;
use services::{RunningActivityService, UserProfileService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub user_profile_service: UserProfileService,
    pub running_activity_service: RunningActivityService,
}

impl AppState {
    /// Wire the services around one shared database pool.
    pub fn new(config: Config, db: Database) -> Self {
        Self {
            user_profile_service: UserProfileService::new(db.clone()),
            running_activity_service: RunningActivityService::new(db.clone()),
            config,
            db,
        }
    }
}
