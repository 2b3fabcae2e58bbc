// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and parsing.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
///
/// Sub-second precision is kept (as milli-, micro- or nanoseconds) so a
/// stored timestamp comes back exactly as it was written.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse a calendar date, discarding any time-of-day component.
///
/// Accepts `YYYY-MM-DD`, RFC3339 timestamps (`1990-01-01T00:00:00Z`) and
/// naive ISO timestamps without an offset (`1990-01-01T00:00:00`).
pub fn parse_date_lenient(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Whole years between `birth` and `today`.
///
/// One year is subtracted when the anniversary has not been reached yet this
/// year. Dates in the future yield 0.
pub fn years_between(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0)
}

/// Serde adapter for `NaiveDate` fields that tolerates date-time input.
pub mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date_lenient(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_lenient_formats() {
        assert_eq!(parse_date_lenient("1990-01-01"), Some(date(1990, 1, 1)));
        assert_eq!(
            parse_date_lenient("1990-01-01T23:30:00Z"),
            Some(date(1990, 1, 1))
        );
        assert_eq!(
            parse_date_lenient("1990-01-01T08:00:00.000"),
            Some(date(1990, 1, 1))
        );
        assert_eq!(parse_date_lenient("01/01/1990"), None);
    }

    #[test]
    fn test_years_between_respects_birthday() {
        let birth = date(1990, 6, 15);
        assert_eq!(years_between(birth, date(2024, 6, 14)), 33);
        assert_eq!(years_between(birth, date(2024, 6, 15)), 34);
        assert_eq!(years_between(birth, date(2024, 12, 31)), 34);
    }

    #[test]
    fn test_years_between_future_birth_date() {
        assert_eq!(years_between(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_format_utc_rfc3339() {
        let ts = DateTime::parse_from_rfc3339("2024-07-10T03:10:00+00:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_utc_rfc3339(ts), "2024-07-10T03:10:00Z");
    }

    #[test]
    fn test_format_utc_rfc3339_keeps_fraction() {
        let ts = DateTime::parse_from_rfc3339("2024-07-10T03:10:00.750+00:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_utc_rfc3339(ts), "2024-07-10T03:10:00.750Z");
    }
}
