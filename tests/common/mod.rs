// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Duration, Utc};
use recovery_tracker::models::{Activity, ActivityType, UserPreferences, UserProfile};
use recovery_tracker::time_utils::format_utc_rfc3339;

/// Fixed reference instant used across scenarios.
#[allow(dead_code)]
pub fn reference_date() -> DateTime<Utc> {
    "2023-04-15T12:00:00Z".parse().expect("valid timestamp")
}

#[allow(dead_code)]
pub fn make_activity(id: &str, activity_type: ActivityType, date: &str) -> Activity {
    Activity {
        id: id.to_string(),
        user_id: "local-user".to_string(),
        activity_type,
        date: date.to_string(),
        duration_minutes: None,
        notes: None,
    }
}

/// An activity dated a whole number of days before `reference`.
#[allow(dead_code)]
pub fn activity_days_ago(
    id: &str,
    activity_type: ActivityType,
    days: i64,
    reference: DateTime<Utc>,
) -> Activity {
    make_activity(
        id,
        activity_type,
        &format_utc_rfc3339(reference - Duration::days(days)),
    )
}

#[allow(dead_code)]
pub fn profile_with_sobriety(sobriety_date: &str) -> UserProfile {
    UserProfile {
        sobriety_date: Some(sobriety_date.to_string()),
        home_group: None,
        created_at: "2021-01-01T00:00:00Z".to_string(),
        preferences: UserPreferences::default(),
    }
}
