//! In-memory activity store.
//!
//! The app is single-user and offline-first; durable persistence lives
//! behind the platform storage adapter. This store holds the working set
//! the scoring engine and dashboard read from.

use std::sync::Arc;

use dashmap::DashMap;

use crate::error::{AppError, Result};
use crate::models::Activity;
use crate::time_utils::parse_stored_datetime;

/// In-memory activity collection keyed by activity id.
#[derive(Clone, Default)]
pub struct ActivityStore {
    activities: Arc<DashMap<String, Activity>>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new activity. The id must be non-empty and unused.
    pub fn add(&self, activity: Activity) -> Result<()> {
        if activity.id.is_empty() {
            return Err(AppError::InvalidArgument(
                "activity id must not be empty".to_string(),
            ));
        }
        if self.activities.contains_key(&activity.id) {
            return Err(AppError::InvalidArgument(format!(
                "duplicate activity id: {}",
                activity.id
            )));
        }
        tracing::debug!(id = %activity.id, activity_type = activity.activity_type.as_str(), "Activity added");
        self.activities.insert(activity.id.clone(), activity);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Activity> {
        self.activities.get(id).map(|entry| entry.value().clone())
    }

    /// Apply an edit to a stored activity. The id itself is immutable.
    pub fn update(&self, id: &str, edit: impl FnOnce(&mut Activity)) -> Result<()> {
        let mut entry = self
            .activities
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("activity {}", id)))?;
        edit(&mut entry);
        entry.id = id.to_string();
        Ok(())
    }

    /// Remove an activity, returning the removed record.
    pub fn remove(&self, id: &str) -> Result<Activity> {
        self.activities
            .remove(id)
            .map(|(_, activity)| activity)
            .ok_or_else(|| AppError::NotFound(format!("activity {}", id)))
    }

    /// All activities for a user, newest first. Activities with unparseable
    /// dates sort last; the scoring engine skips them anyway.
    pub fn list_for_user(&self, user_id: &str) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .activities
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        activities.sort_by_key(|a| std::cmp::Reverse(parse_stored_datetime(&a.date)));
        activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
