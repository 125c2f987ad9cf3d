//! User profile model for the single local profile.

use serde::{Deserialize, Serialize};

/// Display and calculation preferences stored with the profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Preferred spiritual fitness lookback window, in days.
    #[serde(default)]
    pub fitness_timeframe_days: Option<u32>,
}

/// The single local user profile.
///
/// Created once at first app launch as an anonymous default, then mutated
/// through profile edits. There is never more than one per device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Sobriety start date (ISO 8601 date), if set.
    #[serde(default)]
    pub sobriety_date: Option<String>,
    /// Home group name, if set.
    #[serde(default)]
    pub home_group: Option<String>,
    /// When the profile was created (ISO 8601).
    pub created_at: String,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl UserProfile {
    /// The anonymous default profile created at first launch.
    pub fn anonymous(created_at: String) -> Self {
        Self {
            sobriety_date: None,
            home_group: None,
            created_at,
            preferences: UserPreferences::default(),
        }
    }
}
