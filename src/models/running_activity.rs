// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Running activity model for storage and API.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Running activity row in the `running_activities` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RunningActivity {
    /// Assigned by storage on insert
    pub id: i64,
    /// Owning user profile
    pub user_profile_id: i64,
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Kilometers
    pub distance: f64,
}

impl RunningActivity {
    /// Elapsed time between start and end.
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    /// Minutes per kilometer, or `None` when distance is not positive.
    pub fn average_pace(&self) -> Option<f64> {
        average_pace(self.duration(), self.distance)
    }
}

/// Duration in fractional minutes.
pub fn total_minutes(duration: TimeDelta) -> f64 {
    duration.num_milliseconds() as f64 / 60_000.0
}

/// Pace in minutes per kilometer.
pub fn average_pace(duration: TimeDelta, distance_km: f64) -> Option<f64> {
    if distance_km <= 0.0 {
        return None;
    }
    let pace = total_minutes(duration) / distance_km;
    pace.is_finite().then_some(pace)
}

/// Client-supplied activity fields for create and full-replace update.
///
/// Any `id` in a create request is ignored; on update it must match the path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_time_range", skip_on_field_errors = false))]
pub struct RunningActivityInput {
    #[serde(default)]
    pub id: Option<i64>,
    pub user_profile_id: i64,
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than zero"))]
    pub distance: f64,
}

fn validate_time_range(input: &RunningActivityInput) -> Result<(), ValidationError> {
    if input.end_time < input.start_time {
        let mut err = ValidationError::new("time_range");
        err.message = Some("endTime must not precede startTime".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    fn activity(distance: f64, start: &str, end: &str) -> RunningActivity {
        RunningActivity {
            id: 1,
            user_profile_id: 1,
            location: Some("Cebu City".to_string()),
            start_time: ts(start),
            end_time: ts(end),
            distance,
        }
    }

    #[test]
    fn test_average_pace() {
        let a = activity(5.0, "2024-07-10T03:10:00Z", "2024-07-10T03:40:00Z");
        assert_eq!(a.duration(), TimeDelta::minutes(30));
        assert_eq!(a.average_pace(), Some(6.0));
    }

    #[test]
    fn test_average_pace_undefined_for_zero_distance() {
        let a = activity(0.0, "2024-07-10T03:10:00Z", "2024-07-10T03:40:00Z");
        assert_eq!(a.average_pace(), None);
    }

    #[test]
    fn test_negative_duration_is_reported_as_is() {
        let a = activity(5.0, "2024-07-10T03:40:00Z", "2024-07-10T03:10:00Z");
        assert_eq!(a.duration(), TimeDelta::minutes(-30));
    }

    #[test]
    fn test_input_rejects_end_before_start() {
        let input: RunningActivityInput = serde_json::from_value(serde_json::json!({
            "userProfileId": 1,
            "location": "Cebu City",
            "startTime": "2024-07-10T03:40:00Z",
            "endTime": "2024-07-10T03:10:00Z",
            "distance": 2.5
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("__all__"));
    }

    #[test]
    fn test_input_rejects_zero_distance() {
        let input: RunningActivityInput = serde_json::from_value(serde_json::json!({
            "userProfileId": 1,
            "startTime": "2024-07-10T03:10:00Z",
            "endTime": "2024-07-10T03:40:00Z",
            "distance": 0.0
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("distance"));
    }
}
