// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard summary assembly.
//!
//! The dashboard screen shows the sobriety day counter, the year counter,
//! and the spiritual fitness score together; this service computes all three
//! from the same reference instant.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::models::{Activity, SpiritualFitnessResult, UserProfile};
use crate::services::fitness::compute_spiritual_fitness;
use crate::time_utils::{sobriety_days, sobriety_years};

/// Everything the dashboard renders in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub sobriety_days: i64,
    /// Years as `days / 365.25`, rounded to 2 decimal places.
    pub sobriety_years: f64,
    pub fitness: SpiritualFitnessResult,
}

/// Build the dashboard summary for a profile and its activity history.
///
/// Honors the profile's `fitness_timeframe_days` preference when it is set
/// and usable; a stored 0 is treated as unset rather than rejected, since
/// preference data is not a direct API argument.
pub fn build_dashboard(
    profile: &UserProfile,
    activities: &[Activity],
    reference: DateTime<Utc>,
    config: &ScoringConfig,
) -> Result<DashboardSummary> {
    let timeframe_days = match profile.preferences.fitness_timeframe_days {
        Some(0) => {
            tracing::debug!("Ignoring stored fitness timeframe of 0 days");
            config.default_timeframe_days
        }
        Some(days) => days,
        None => config.default_timeframe_days,
    };

    let fitness = compute_spiritual_fitness(activities, timeframe_days, reference, config)?;

    Ok(DashboardSummary {
        sobriety_days: sobriety_days(profile.sobriety_date.as_deref(), reference),
        sobriety_years: sobriety_years(profile.sobriety_date.as_deref(), 2, reference),
        fitness,
    })
}
