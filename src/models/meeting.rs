// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meeting Guide feed record.
//!
//! Field set follows the Meeting Guide spec:
//! https://github.com/code4recovery/spec

use serde::{Deserialize, Serialize};

/// A meeting entry from a regional Meeting Guide feed.
///
/// Regional feeds are inconsistently populated, so every field decodes
/// tolerantly; records that fail to decode at all are skipped upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(default)]
    pub name: Option<String>,
    /// Day of week as the feed provides it (e.g. "Monday").
    #[serde(default)]
    pub day: Option<String>,
    /// Start time in "HH:MM" 24-hour form.
    #[serde(default)]
    pub time: Option<String>,
    /// Meeting type codes (e.g. "O" open, "C" closed, "W" women).
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}
