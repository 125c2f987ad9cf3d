// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meeting Guide feed client.
//!
//! Fetches regional meeting lists from Meeting Guide API feeds
//! (https://github.com/code4recovery/spec) and answers filtered queries.
//! Feeds change rarely, so parsed responses are cached in memory with a
//! time-bounded TTL (24 hours by default). The cache handle is injected so
//! it can be shared and seeded in tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::error::{AppError, Result};
use crate::models::Meeting;

/// Region -> feed URL table for supported Meeting Guide feeds.
const MEETING_GUIDE_FEEDS: &[(&str, &str)] = &[
    (
        "San Francisco",
        "https://aasfmarin.org/wp-admin/admin-ajax.php?action=meetings",
    ),
    (
        "New York",
        "https://www.nyintergroup.org/wp-admin/admin-ajax.php?action=meetings",
    ),
    (
        "Los Angeles",
        "https://lacoaa.org/wp-admin/admin-ajax.php?action=meetings",
    ),
    (
        "Chicago",
        "https://chicagoaa.org/wp-admin/admin-ajax.php?action=meetings",
    ),
    (
        "Central New York",
        "https://aacny.org/wp-admin/admin-ajax.php?action=meetings",
    ),
];

/// Region used when a query doesn't name one (or names an unknown one).
pub const DEFAULT_REGION: &str = "San Francisco";

/// Maximum number of meetings returned from a query.
const MAX_RESULTS: usize = 20;

/// A cached regional feed.
#[derive(Debug, Clone)]
pub struct CachedFeed {
    pub meetings: Vec<Meeting>,
    pub fetched_at: DateTime<Utc>,
}

/// Shared feed cache, keyed by region name.
pub type MeetingCache = Arc<DashMap<String, CachedFeed>>;

/// Coarse time-of-day buckets used by the meeting finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Noon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Inclusive "HH:MM" range for the bucket.
    fn range(self) -> (&'static str, &'static str) {
        match self {
            TimeOfDay::Morning => ("00:00", "11:59"),
            TimeOfDay::Noon => ("12:00", "14:59"),
            TimeOfDay::Evening => ("15:00", "19:59"),
            TimeOfDay::Night => ("20:00", "23:59"),
        }
    }
}

/// Filter criteria for a meeting query. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct MeetingFilter {
    /// Day-of-week name, matched case-insensitively.
    pub day: Option<String>,
    pub time_of_day: Option<TimeOfDay>,
    /// Meeting type code, matched case-insensitively against each entry.
    pub meeting_type: Option<String>,
    /// Free-text substring matched against name/location/address/city/region.
    pub location: Option<String>,
}

/// Meeting Guide API client with a shared time-bounded cache.
#[derive(Clone)]
pub struct MeetingGuideClient {
    http: reqwest::Client,
    cache: MeetingCache,
    cache_ttl: Duration,
}

impl MeetingGuideClient {
    /// Create a client. The `cache` should be shared across clones.
    pub fn new(cache: MeetingCache, cache_ttl_hours: i64) -> Self {
        Self {
            http: reqwest::Client::new(),
            cache,
            cache_ttl: Duration::hours(cache_ttl_hours),
        }
    }

    /// Feed URL for a region, if supported.
    pub fn feed_url(region: &str) -> Option<&'static str> {
        MEETING_GUIDE_FEEDS
            .iter()
            .find(|(name, _)| *name == region)
            .map(|(_, url)| *url)
    }

    /// Find meetings in a region, serving from cache while it's fresh.
    ///
    /// Unknown regions fall back to [`DEFAULT_REGION`]. If a refetch fails
    /// but a stale cache entry exists, the stale data is served rather than
    /// an error.
    pub async fn find_meetings(
        &self,
        region: Option<&str>,
        filter: &MeetingFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Meeting>> {
        let region = region
            .filter(|r| Self::feed_url(r).is_some())
            .unwrap_or(DEFAULT_REGION);

        if let Some(cached) = self.cache.get(region) {
            if is_fresh(cached.fetched_at, now, self.cache_ttl) {
                return Ok(filter_meetings(&cached.meetings, filter));
            }
        }

        match self.fetch_feed(region).await {
            Ok(meetings) => {
                self.cache.insert(
                    region.to_string(),
                    CachedFeed {
                        meetings: meetings.clone(),
                        fetched_at: now,
                    },
                );
                Ok(filter_meetings(&meetings, filter))
            }
            Err(err) => {
                if let Some(stale) = self.cache.get(region) {
                    tracing::warn!(region, error = %err, "Feed refresh failed, serving stale cache");
                    return Ok(filter_meetings(&stale.meetings, filter));
                }
                Err(err)
            }
        }
    }

    /// Fetch and parse a regional feed.
    async fn fetch_feed(&self, region: &str) -> Result<Vec<Meeting>> {
        let url = Self::feed_url(region)
            .ok_or_else(|| AppError::InvalidArgument(format!("Unknown region: {}", region)))?;

        tracing::info!(region, "Fetching Meeting Guide feed");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::MeetingGuideApi(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::MeetingGuideApi(format!(
                "HTTP {} fetching {} feed",
                response.status(),
                region
            )));
        }

        let raw: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| AppError::MeetingGuideApi(e.to_string()))?;

        // Regional feeds are inconsistently shaped; skip records that don't
        // decode instead of failing the whole feed.
        let mut meetings = Vec::with_capacity(raw.len());
        for value in raw {
            match serde_json::from_value::<Meeting>(value) {
                Ok(meeting) => meetings.push(meeting),
                Err(err) => tracing::debug!(region, error = %err, "Skipping malformed meeting record"),
            }
        }
        tracing::info!(region, count = meetings.len(), "Meeting feed parsed");
        Ok(meetings)
    }
}

/// True when a cache entry is still within its TTL.
pub fn is_fresh(fetched_at: DateTime<Utc>, now: DateTime<Utc>, ttl: Duration) -> bool {
    now - fetched_at < ttl
}

/// Apply filter criteria and cap the result count at 20.
pub fn filter_meetings(meetings: &[Meeting], filter: &MeetingFilter) -> Vec<Meeting> {
    meetings
        .iter()
        .filter(|m| matches_filter(m, filter))
        .take(MAX_RESULTS)
        .cloned()
        .collect()
}

fn matches_filter(meeting: &Meeting, filter: &MeetingFilter) -> bool {
    if let Some(day) = &filter.day {
        let matches = meeting
            .day
            .as_deref()
            .is_some_and(|d| d.eq_ignore_ascii_case(day));
        if !matches {
            return false;
        }
    }

    if let Some(bucket) = filter.time_of_day {
        let (start, end) = bucket.range();
        // "HH:MM" zero-padded strings compare correctly as text.
        let matches = meeting
            .time
            .as_deref()
            .is_some_and(|t| start <= t && t <= end);
        if !matches {
            return false;
        }
    }

    if let Some(code) = &filter.meeting_type {
        let matches = meeting.types.iter().any(|t| t.eq_ignore_ascii_case(code));
        if !matches {
            return false;
        }
    }

    if let Some(needle) = &filter.location {
        let needle = needle.to_lowercase();
        let haystacks = [
            &meeting.name,
            &meeting.location,
            &meeting.address,
            &meeting.city,
            &meeting.region,
        ];
        let matches = haystacks
            .iter()
            .any(|h| h.as_deref().is_some_and(|v| v.to_lowercase().contains(&needle)));
        if !matches {
            return false;
        }
    }

    true
}
