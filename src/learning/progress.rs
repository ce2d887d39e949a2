//! Progress Tracker Module
//!
//! Tracks which topics each user has completed, the points they have earned,
//! and the level derived from those points. One completion per topic per user:
//! repeating a completion is a no-op on points and level.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

/// Points per level tier
const POINTS_PER_LEVEL: u32 = 100;

// ============================================================
// USER PROGRESS
// ============================================================

/// Per-user learning progress record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: String,
    /// Topic ids the user has completed (sorted for stable JSON output)
    pub completed_topics: BTreeSet<String>,
    pub total_points: u32,
    /// Derived tier, always recomputed from total_points
    pub level: u32,
}

impl UserProgress {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            completed_topics: BTreeSet::new(),
            total_points: 0,
            level: 1,
        }
    }

    /// Level is a pure function of points: floor(points / 100) + 1
    pub fn level_for_points(points: u32) -> u32 {
        points / POINTS_PER_LEVEL + 1
    }
}

// ============================================================
// PROGRESS TRACKER
// ============================================================

/// In-memory progress store, one record per user, process-lifetime scoped
pub struct ProgressTracker {
    records: Mutex<HashMap<String, UserProgress>>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Credit a topic completion. Idempotent: if the topic is already in the
    /// user's completed set, points and level are left untouched. Returns the
    /// updated (or unchanged) record.
    pub fn record_completion(&self, user_id: &str, topic_id: &str, points: u32) -> UserProgress {
        let mut records = self.records.lock().unwrap();
        let progress = records
            .entry(user_id.to_string())
            .or_insert_with(|| UserProgress::new(user_id));

        if progress.completed_topics.insert(topic_id.to_string()) {
            progress.total_points += points;
            progress.level = UserProgress::level_for_points(progress.total_points);
        }

        progress.clone()
    }

    /// Fetch a user's progress. Unknown users get the zero record
    /// (no topics, 0 points, level 1) rather than an error.
    pub fn get_progress(&self, user_id: &str) -> UserProgress {
        let records = self.records.lock().unwrap();
        records
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| UserProgress::new(user_id))
    }

    /// Number of users with at least one recorded completion
    pub fn tracked_users(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// (total completions, total points awarded) across all users
    pub fn totals(&self) -> (usize, u64) {
        let records = self.records.lock().unwrap();
        records.values().fold((0, 0), |(c, p), r| {
            (c + r.completed_topics.len(), p + r.total_points as u64)
        })
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
