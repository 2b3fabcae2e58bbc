// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model for storage and API.

use crate::time_utils::{lenient_date, years_between};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User profile row in the `user_profiles` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Assigned by storage on insert
    pub id: i64,
    pub name: Option<String>,
    /// Kilograms
    pub weight: f64,
    /// Centimeters
    pub height: f64,
    #[serde(with = "lenient_date")]
    pub birth_date: NaiveDate,
}

impl UserProfile {
    /// Age in whole years as of `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        years_between(self.birth_date, today)
    }

    /// Age in whole years as of the current UTC date.
    pub fn age(&self) -> i32 {
        self.age_on(Utc::now().date_naive())
    }

    /// Body mass index, or `None` when height is not positive.
    pub fn bmi(&self) -> Option<f64> {
        body_mass_index(self.weight, self.height)
    }
}

/// BMI from kilograms and centimeters, rounded to two decimals.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let meters = height_cm / 100.0;
    let bmi = weight_kg / (meters * meters);
    bmi.is_finite().then(|| (bmi * 100.0).round_ties_even() / 100.0)
}

/// Client-supplied profile fields for create and full-replace update.
///
/// Any `id` in a create request is ignored; on update it must match the path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub name: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than zero"))]
    pub weight: f64,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than zero"))]
    pub height: f64,
    #[serde(with = "lenient_date")]
    pub birth_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(weight: f64, height: f64, birth_date: NaiveDate) -> UserProfile {
        UserProfile {
            id: 1,
            name: Some("Test User".to_string()),
            weight,
            height,
            birth_date,
        }
    }

    #[test]
    fn test_bmi_rounds_to_two_decimals() {
        let p = profile(70.0, 175.0, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert_eq!(p.bmi(), Some(22.86));
    }

    #[test]
    fn test_bmi_undefined_for_zero_height() {
        assert_eq!(body_mass_index(70.0, 0.0), None);
        assert_eq!(body_mass_index(70.0, -10.0), None);
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let p = profile(70.0, 175.0, NaiveDate::from_ymd_opt(1990, 7, 1).unwrap());
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()), 33);
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()), 34);
    }

    #[test]
    fn test_input_validation_rejects_degenerate_values() {
        let input: UserProfileInput = serde_json::from_value(serde_json::json!({
            "name": "Test User",
            "weight": 70.0,
            "height": 0.0,
            "birthDate": "1990-01-01"
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("height"));
        assert!(!errors.field_errors().contains_key("weight"));
    }

    #[test]
    fn test_input_accepts_datetime_birth_date() {
        let input: UserProfileInput = serde_json::from_value(serde_json::json!({
            "id": 7,
            "weight": 70.0,
            "height": 175.0,
            "birthDate": "1990-01-01T00:00:00"
        }))
        .unwrap();

        assert_eq!(input.id, Some(7));
        assert_eq!(input.name, None);
        assert_eq!(
            input.birth_date,
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
        assert!(input.validate().is_ok());
    }
}
