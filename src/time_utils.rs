// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling and sobriety arithmetic.
//!
//! Every function takes the reference instant as a parameter. Nothing in
//! here reads the wall clock, so results are reproducible in tests.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Average days per year including leap years.
///
/// Sobriety year counts are displayed as `days / 365.25` rather than using
/// calendar-accurate year arithmetic. The approximation is deliberate and
/// must be preserved for display compatibility.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a stored date string into a calendar date.
///
/// Accepts full RFC 3339 timestamps ("2024-01-15T10:30:00Z") and bare ISO
/// dates ("2024-01-15"). Returns `None` for anything else.
pub fn parse_stored_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parse a stored date string into a UTC instant.
///
/// Bare dates are taken as midnight UTC.
pub fn parse_stored_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

/// Whole days sober as of `reference`.
///
/// Both dates are normalized to midnight before subtraction so that
/// time-of-day never causes an off-by-one. Returns 0 when the sobriety date
/// is absent, unparseable, or in the future.
pub fn sobriety_days(sobriety_date: Option<&str>, reference: DateTime<Utc>) -> i64 {
    let Some(raw) = sobriety_date else {
        return 0;
    };
    let Some(start) = parse_stored_date(raw) else {
        tracing::debug!(raw, "Unparseable sobriety date, counting as 0 days");
        return 0;
    };
    (reference.date_naive() - start).num_days().max(0)
}

/// Years sober as `days / 365.25`, rounded to `decimal_places`.
pub fn sobriety_years(
    sobriety_date: Option<&str>,
    decimal_places: u32,
    reference: DateTime<Utc>,
) -> f64 {
    let days = sobriety_days(sobriety_date, reference) as f64;
    round_to(days / DAYS_PER_YEAR, decimal_places)
}

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(raw: &str) -> DateTime<Utc> {
        raw.parse().expect("valid test timestamp")
    }

    #[test]
    fn test_parse_stored_date_accepts_both_forms() {
        assert_eq!(
            parse_stored_date("2024-01-15T10:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            parse_stored_date("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(parse_stored_date("yesterday"), None);
        assert_eq!(parse_stored_date(""), None);
    }

    #[test]
    fn test_parse_stored_datetime_bare_date_is_midnight() {
        let dt = parse_stored_datetime("2024-01-15").expect("should parse");
        assert_eq!(format_utc_rfc3339(dt), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn test_sobriety_days_same_day_is_zero() {
        let reference = utc("2024-01-15T23:59:00Z");
        assert_eq!(sobriety_days(Some("2024-01-15"), reference), 0);
    }

    #[test]
    fn test_sobriety_days_midnight_normalization() {
        // Half an hour past midnight the next day is still exactly 1 day.
        let reference = utc("2021-01-16T00:30:00Z");
        assert_eq!(sobriety_days(Some("2021-01-15"), reference), 1);
    }

    #[test]
    fn test_sobriety_days_absent_or_bad_input() {
        let reference = utc("2024-01-15T12:00:00Z");
        assert_eq!(sobriety_days(None, reference), 0);
        assert_eq!(sobriety_days(Some("not-a-date"), reference), 0);
        // Future sobriety date counts as 0, not negative.
        assert_eq!(sobriety_days(Some("2030-01-01"), reference), 0);
    }

    #[test]
    fn test_sobriety_years_rounds_to_requested_places() {
        let reference = utc("2023-04-15T12:00:00Z");
        // 2021-01-15 -> 2023-04-15 is 820 days by calendar arithmetic.
        assert_eq!(sobriety_days(Some("2021-01-15"), reference), 820);
        assert_eq!(sobriety_years(Some("2021-01-15"), 2, reference), 2.25);
    }
}
