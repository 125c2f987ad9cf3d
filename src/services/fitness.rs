// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spiritual fitness scoring engine.
//!
//! Converts a window of logged activities into a bounded aggregate score
//! plus a per-category breakdown:
//! 1. Filter to activities dated inside `[reference - timeframe, reference]`
//! 2. Count per category; unrecognized categories go to the `other` bucket
//! 3. Per-category contribution = min(count x weight, cap)
//! 4. Sum, clamp into `[0, max_score]`, round to 2 decimals
//!
//! The engine is pure: the reference instant is a parameter (never the wall
//! clock), the weights come from injected configuration, and nothing is
//! persisted. Unparseable activity dates are absorbed, never raised.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::config::ScoringConfig;
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityType, SpiritualFitnessResult};
use crate::time_utils::{parse_stored_datetime, round_to};

/// Compute the spiritual fitness score over a lookback window.
///
/// `timeframe_days` must be positive; it is the one input validated eagerly,
/// since silently substituting a default window would mask caller bugs. An
/// empty (or fully out-of-window) activity set is not an error: it takes the
/// fallback-score path.
pub fn compute_spiritual_fitness(
    activities: &[Activity],
    timeframe_days: u32,
    reference: DateTime<Utc>,
    config: &ScoringConfig,
) -> Result<SpiritualFitnessResult> {
    if timeframe_days == 0 {
        return Err(AppError::InvalidArgument(
            "timeframe_days must be a positive number of days".to_string(),
        ));
    }

    let cutoff = reference - Duration::days(i64::from(timeframe_days));

    let mut counts: BTreeMap<ActivityType, u32> = BTreeMap::new();
    let mut in_window = 0u32;
    for activity in activities {
        let Some(date) = parse_stored_datetime(&activity.date) else {
            tracing::debug!(
                id = %activity.id,
                raw = %activity.date,
                "Skipping activity with unparseable date"
            );
            continue;
        };
        // Window bounds are inclusive on both ends.
        if date < cutoff || date > reference {
            continue;
        }
        in_window += 1;
        if activity.activity_type != ActivityType::Other {
            *counts.entry(activity.activity_type).or_insert(0) += 1;
        }
    }

    // "No data" is a separate path from "data yields zero": a brand-new user
    // with an empty log sees the fallback score, not a 0.
    if in_window == 0 {
        return Ok(SpiritualFitnessResult {
            score: config.fallback_score,
            breakdown: BTreeMap::new(),
            timeframe_days,
            last_calculated: reference,
        });
    }

    let mut breakdown = BTreeMap::new();
    let mut total = 0.0;
    for category in ActivityType::CATEGORIES {
        let count = counts.get(&category).copied().unwrap_or(0);
        let contribution =
            category_contribution(count, config.weight_for(category), config.per_category_cap);
        total += contribution;
        breakdown.insert(category, round_to(contribution, 2));
    }

    let score = round_to(total.clamp(0.0, config.max_score), 2);
    tracing::debug!(score, in_window, timeframe_days, "Computed spiritual fitness");

    Ok(SpiritualFitnessResult {
        score,
        breakdown,
        timeframe_days,
        last_calculated: reference,
    })
}

/// Saturating per-category contribution: linear in count up to the cap.
fn category_contribution(count: u32, weight: f64, cap: f64) -> f64 {
    (f64::from(count) * weight).min(cap)
}
