// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spiritual Condition Tracker core.
//!
//! This crate provides the recovery-tracking core for the app: the activity
//! log models, the spiritual fitness scoring engine, sobriety counters, and
//! the Meeting Guide feed client.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::MeetingGuideClient;
use store::ActivityStore;

/// Shared application state held by the embedding shell (UI layer).
pub struct AppState {
    pub config: Config,
    pub store: ActivityStore,
    pub meeting_client: MeetingGuideClient,
}
