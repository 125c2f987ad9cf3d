// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sobriety day/year counter behavior.

use recovery_tracker::time_utils::{sobriety_days, sobriety_years, DAYS_PER_YEAR};

mod common;
use common::reference_date;

#[test]
fn test_calendar_fixture_820_days() {
    // 2021-01-15 -> 2023-04-15: 350 days remaining in 2021, 365 in 2022,
    // 105 into 2023.
    let reference = reference_date();
    assert_eq!(sobriety_days(Some("2021-01-15"), reference), 820);
    assert_eq!(sobriety_years(Some("2021-01-15"), 2, reference), 2.25);
}

#[test]
fn test_years_round_trip_with_days() {
    let reference = reference_date();
    let days = sobriety_days(Some("2021-01-15"), reference) as f64;
    let years = sobriety_years(Some("2021-01-15"), 10, reference);
    assert!((years - days / DAYS_PER_YEAR).abs() < 1e-9);
}

#[test]
fn test_sobriety_date_equal_to_reference() {
    let reference = reference_date();
    assert_eq!(sobriety_days(Some("2023-04-15"), reference), 0);
    assert_eq!(sobriety_years(Some("2023-04-15"), 2, reference), 0.0);
}

#[test]
fn test_time_of_day_does_not_shift_day_count() {
    // A full RFC 3339 sobriety timestamp late in the day still counts whole
    // calendar days.
    let reference = "2023-04-15T00:05:00Z".parse().unwrap();
    assert_eq!(sobriety_days(Some("2023-04-14T23:50:00Z"), reference), 1);
}

#[test]
fn test_graceful_degradation_on_bad_input() {
    let reference = reference_date();
    assert_eq!(sobriety_days(None, reference), 0);
    assert_eq!(sobriety_days(Some(""), reference), 0);
    assert_eq!(sobriety_days(Some("15/01/2021"), reference), 0);
    assert_eq!(sobriety_years(Some("garbage"), 2, reference), 0.0);
}
