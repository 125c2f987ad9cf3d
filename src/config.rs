//! Application configuration loaded from environment variables.
//!
//! Every knob has a compiled-in default, so `from_env` succeeds on a clean
//! environment. The scoring constants (fallback score, category cap, window)
//! have been retuned before, so they stay configurable rather than
//! hard-coded.

use std::env;

use crate::models::ActivityType;
use crate::services::meetings::DEFAULT_REGION;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Meeting Guide region used when a search doesn't name one.
    pub meeting_region: String,
    /// Meeting feed cache lifetime, in hours.
    pub meeting_cache_ttl_hours: i64,
    /// Scoring engine constants.
    pub scoring: ScoringConfig,
}

/// Injected constants for the spiritual fitness calculation.
///
/// Weights are points per in-window activity; each category's total is
/// clamped at `per_category_cap` so no single habit can dominate the score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub meeting_weight: f64,
    pub prayer_weight: f64,
    pub meditation_weight: f64,
    pub reading_weight: f64,
    pub service_weight: f64,
    pub stepwork_weight: f64,
    pub sponsorship_weight: f64,
    /// Ceiling on any single category's contribution.
    pub per_category_cap: f64,
    /// Score returned when no activities fall inside the window.
    pub fallback_score: f64,
    /// Upper bound of the score range.
    pub max_score: f64,
    /// Lookback window when the profile has no preference set.
    pub default_timeframe_days: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            meeting_weight: 3.0,
            prayer_weight: 2.5,
            meditation_weight: 2.5,
            reading_weight: 2.0,
            service_weight: 2.5,
            stepwork_weight: 2.0,
            sponsorship_weight: 2.5,
            per_category_cap: 4.0,
            fallback_score: 5.0,
            max_score: 10.0,
            default_timeframe_days: 30,
        }
    }
}

impl ScoringConfig {
    /// Points per in-window activity for a category. `Other` is unweighted.
    pub fn weight_for(&self, category: ActivityType) -> f64 {
        match category {
            ActivityType::Meeting => self.meeting_weight,
            ActivityType::Prayer => self.prayer_weight,
            ActivityType::Meditation => self.meditation_weight,
            ActivityType::Reading => self.reading_weight,
            ActivityType::Service => self.service_weight,
            ActivityType::Stepwork => self.stepwork_weight,
            ActivityType::Sponsorship => self.sponsorship_weight,
            ActivityType::Other => 0.0,
        }
    }
}

impl Default for Config {
    /// Default config with compiled-in constants.
    fn default() -> Self {
        Self {
            meeting_region: DEFAULT_REGION.to_string(),
            meeting_cache_ttl_hours: 24,
            scoring: ScoringConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only overrides are read from the environment; anything unset keeps
    /// its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let mut scoring = ScoringConfig::default();
        if let Some(v) = parse_env_f64("FITNESS_FALLBACK_SCORE")? {
            scoring.fallback_score = v;
        }
        if let Some(v) = parse_env_f64("FITNESS_CATEGORY_CAP")? {
            scoring.per_category_cap = v;
        }
        if let Some(v) = parse_env_u32("FITNESS_TIMEFRAME_DAYS")? {
            if v == 0 {
                return Err(ConfigError::Invalid("FITNESS_TIMEFRAME_DAYS"));
            }
            scoring.default_timeframe_days = v;
        }

        Ok(Self {
            meeting_region: env::var("MEETING_GUIDE_REGION")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            meeting_cache_ttl_hours: parse_env_i64("MEETING_CACHE_TTL_HOURS")?.unwrap_or(24),
            scoring,
        })
    }
}

fn parse_env_f64(name: &'static str) -> Result<Option<f64>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(None),
    }
}

fn parse_env_u32(name: &'static str) -> Result<Option<u32>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(None),
    }
}

fn parse_env_i64(name: &'static str) -> Result<Option<i64>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_defaults() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.fallback_score, 5.0);
        assert_eq!(scoring.max_score, 10.0);
        assert_eq!(scoring.default_timeframe_days, 30);
        // Every scored category carries a positive weight.
        for category in ActivityType::CATEGORIES {
            assert!(scoring.weight_for(category) > 0.0);
        }
        assert_eq!(scoring.weight_for(ActivityType::Other), 0.0);
    }

    // Single test for the env-var path: cargo runs tests in parallel and
    // the process environment is shared.
    #[test]
    fn test_config_from_env() {
        env::set_var("FITNESS_FALLBACK_SCORE", "4.5");
        env::set_var("MEETING_CACHE_TTL_HOURS", "6");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.scoring.fallback_score, 4.5);
        assert_eq!(config.meeting_cache_ttl_hours, 6);
        assert_eq!(config.meeting_region, DEFAULT_REGION);

        env::set_var("FITNESS_TIMEFRAME_DAYS", "0");
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        env::remove_var("FITNESS_FALLBACK_SCORE");
        env::remove_var("MEETING_CACHE_TTL_HOURS");
        env::remove_var("FITNESS_TIMEFRAME_DAYS");
    }
}
