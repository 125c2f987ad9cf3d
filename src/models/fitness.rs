// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived spiritual fitness result.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::ActivityType;

/// Computed spiritual fitness for one lookback window.
///
/// Recomputed on demand and never persisted. Deterministic: the same
/// activity set, window, and reference instant always produce the same
/// result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
pub struct SpiritualFitnessResult {
    /// Aggregate score in `[0, max_score]`, rounded to 2 decimal places.
    pub score: f64,
    /// Contribution per scored category. Empty on the no-data path.
    pub breakdown: BTreeMap<ActivityType, f64>,
    /// Lookback window used for the calculation, in days.
    pub timeframe_days: u32,
    /// The reference instant the calculation was anchored to.
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub last_calculated: DateTime<Utc>,
}
