// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recovery activity model for storage and scoring.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Enumerated recovery action categories.
///
/// Anything logged with an unrecognized or missing category decodes as
/// `Other`. `Other` counts toward total activity volume but never receives a
/// category weight in scoring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
pub enum ActivityType {
    Meeting,
    Prayer,
    Meditation,
    Reading,
    Service,
    Stepwork,
    Sponsorship,
    /// Catch-all bucket for unrecognized categories.
    #[serde(other)]
    #[default]
    Other,
}

impl ActivityType {
    /// The scored categories, in display order. Excludes `Other`.
    pub const CATEGORIES: [ActivityType; 7] = [
        ActivityType::Meeting,
        ActivityType::Prayer,
        ActivityType::Meditation,
        ActivityType::Reading,
        ActivityType::Service,
        ActivityType::Stepwork,
        ActivityType::Sponsorship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Meeting => "meeting",
            ActivityType::Prayer => "prayer",
            ActivityType::Meditation => "meditation",
            ActivityType::Reading => "reading",
            ActivityType::Service => "service",
            ActivityType::Stepwork => "stepwork",
            ActivityType::Sponsorship => "sponsorship",
            ActivityType::Other => "other",
        }
    }
}

/// One logged recovery action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
pub struct Activity {
    /// Unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Owning user (single local profile in practice).
    pub user_id: String,
    /// Activity category; unrecognized values decode as `other`.
    #[serde(rename = "type", default)]
    pub activity_type: ActivityType,
    /// When the activity occurred (ISO 8601). User-set, may be backdated,
    /// and may be unparseable; the scoring engine skips bad dates.
    pub date: String,
    /// Duration in minutes for time-based activity types.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Free-text note attached to the entry.
    #[serde(default)]
    pub notes: Option<String>,
}
