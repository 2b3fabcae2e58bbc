// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod running_activity;
pub mod user_profile;

pub use running_activity::RunningActivityService;
pub use user_profile::UserProfileService;
