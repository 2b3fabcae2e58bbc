// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod running_activity;
pub mod user_profile;

pub use running_activity::{RunningActivity, RunningActivityInput};
pub use user_profile::{UserProfile, UserProfileInput};
