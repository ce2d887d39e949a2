//! Rating Aggregator Module
//!
//! Keeps one rating per (user, topic) pair and a running arithmetic mean per
//! topic. Resubmitting replaces the user's previous rating for that topic.
//!
//! Rating values are bounded to 1..=5 (stars). The original surface accepted
//! arbitrary numbers; out-of-range submissions are rejected here instead of
//! silently skewing the average.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

use super::StoreError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

// ============================================================
// RATING ENTRIES
// ============================================================

/// A single user's rating of a topic
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingEntry {
    pub user_id: String,
    pub rating: u8,
    pub rated_at: DateTime<Utc>,
}

/// Aggregate view of one topic's ratings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub topic_id: String,
    pub average_rating: f64,
    pub total_ratings: usize,
}

// ============================================================
// RATING AGGREGATOR
// ============================================================

/// In-memory rating store keyed by topic id
pub struct RatingAggregator {
    by_topic: Mutex<HashMap<String, Vec<RatingEntry>>>,
}

impl RatingAggregator {
    pub fn new() -> Self {
        Self {
            by_topic: Mutex::new(HashMap::new()),
        }
    }

    /// Record a rating, replacing any prior entry by the same user for the
    /// same topic, and return the recomputed aggregate.
    pub fn submit_rating(
        &self,
        topic_id: &str,
        user_id: &str,
        rating: u8,
    ) -> Result<RatingSummary, StoreError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(StoreError::Validation(format!(
                "rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, rating
            )));
        }

        let mut by_topic = self.by_topic.lock().unwrap();
        let entries = by_topic.entry(topic_id.to_string()).or_default();

        entries.retain(|e| e.user_id != user_id);
        entries.push(RatingEntry {
            user_id: user_id.to_string(),
            rating,
            rated_at: Utc::now(),
        });

        Ok(summarize(topic_id, entries))
    }

    /// Current aggregate for a topic. Unrated topics report 0.0 / 0.
    pub fn topic_summary(&self, topic_id: &str) -> RatingSummary {
        let by_topic = self.by_topic.lock().unwrap();
        match by_topic.get(topic_id) {
            Some(entries) => summarize(topic_id, entries),
            None => RatingSummary {
                topic_id: topic_id.to_string(),
                average_rating: 0.0,
                total_ratings: 0,
            },
        }
    }

    /// (rated topic count, total entries, mean over every entry)
    pub fn totals(&self) -> (usize, usize, f64) {
        let by_topic = self.by_topic.lock().unwrap();
        let count: usize = by_topic.values().map(|v| v.len()).sum();
        if count == 0 {
            return (0, 0, 0.0);
        }
        let sum: u64 = by_topic
            .values()
            .flat_map(|v| v.iter())
            .map(|e| e.rating as u64)
            .sum();
        (by_topic.len(), count, sum as f64 / count as f64)
    }
}

impl Default for RatingAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn summarize(topic_id: &str, entries: &[RatingEntry]) -> RatingSummary {
    let total = entries.len();
    let average = if total == 0 {
        0.0
    } else {
        entries.iter().map(|e| e.rating as f64).sum::<f64>() / total as f64
    };
    RatingSummary {
        topic_id: topic_id.to_string(),
        average_rating: average,
        total_ratings: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_over_distinct_users() {
        let aggregator = RatingAggregator::new();
        aggregator.submit_rating("cardiology", "alice", 5).unwrap();
        aggregator.submit_rating("cardiology", "bob", 3).unwrap();
        let summary = aggregator.submit_rating("cardiology", "carol", 4).unwrap();

        assert_eq!(summary.total_ratings, 3);
        assert!((summary.average_rating - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resubmission_replaces_prior_rating() {
        let aggregator = RatingAggregator::new();
        aggregator.submit_rating("cardiology", "alice", 2).unwrap();
        let summary = aggregator.submit_rating("cardiology", "alice", 4).unwrap();

        assert_eq!(summary.total_ratings, 1);
        assert!((summary.average_rating - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let aggregator = RatingAggregator::new();
        assert!(aggregator.submit_rating("cardiology", "alice", 0).is_err());
        assert!(aggregator.submit_rating("cardiology", "alice", 6).is_err());
        assert_eq!(aggregator.topic_summary("cardiology").total_ratings, 0);
    }

    #[test]
    fn test_unrated_topic_summary_is_zero() {
        let aggregator = RatingAggregator::new();
        let summary = aggregator.topic_summary("neurology");

        assert_eq!(summary.total_ratings, 0);
        assert_eq!(summary.average_rating, 0.0);
    }

    #[test]
    fn test_totals_span_topics() {
        let aggregator = RatingAggregator::new();
        aggregator.submit_rating("a", "alice", 5).unwrap();
        aggregator.submit_rating("b", "alice", 3).unwrap();
        aggregator.submit_rating("b", "bob", 4).unwrap();

        let (topics, entries, mean) = aggregator.totals();
        assert_eq!(topics, 2);
        assert_eq!(entries, 3);
        assert!((mean - 4.0).abs() < f64::EPSILON);
    }
}
