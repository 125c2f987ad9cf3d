// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod fitness;
pub mod meeting;
pub mod user;

pub use activity::{Activity, ActivityType};
pub use fitness::SpiritualFitnessResult;
pub use meeting::Meeting;
pub use user::{UserPreferences, UserProfile};
