// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod dashboard;
pub mod fitness;
pub mod meetings;

pub use dashboard::{build_dashboard, DashboardSummary};
pub use fitness::compute_spiritual_fitness;
pub use meetings::{
    CachedFeed, MeetingCache, MeetingFilter, MeetingGuideClient, TimeOfDay, DEFAULT_REGION,
};
