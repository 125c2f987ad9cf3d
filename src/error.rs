// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! The calculation layer absorbs data-level anomalies (unparseable dates,
//! empty histories) and returns usable defaults instead of erroring. Only
//! structurally invalid arguments and the Meeting Guide fetch surface errors.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Meeting Guide API error: {0}")]
    MeetingGuideApi(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, AppError>;
