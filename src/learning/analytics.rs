//! Analytics Module
//!
//! Aggregates platform activity into a single summary: catalog sizes, learner
//! totals from the progress/rating/bookmark stores, and a static weekly
//! engagement series. Everything here is a plain reduction; no live event
//! pipeline exists behind it.

use serde::{Deserialize, Serialize};

use super::engagement::BookmarkStore;
use super::progress::ProgressTracker;
use super::ratings::RatingAggregator;

// ============================================================
// SUMMARY TYPES
// ============================================================

/// Entity counts per content catalog
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCounts {
    pub courses: usize,
    pub articles: usize,
    pub books: usize,
    pub drugs: usize,
    pub badges: usize,
    pub team_members: usize,
    pub topics: usize,
}

/// Totals reduced from the learning-state stores
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerTotals {
    pub tracked_users: usize,
    pub total_completions: usize,
    pub total_points_awarded: u64,
    pub rated_topics: usize,
    pub total_ratings: usize,
    pub average_rating: f64,
    pub total_bookmarks: usize,
}

/// One week of (mock) platform activity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivity {
    pub week: String,
    pub active_users: u32,
    pub completions: u32,
}

/// Static engagement series plus its reductions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSeries {
    pub weeks: Vec<WeeklyActivity>,
    pub total_active_users: u32,
    pub mean_weekly_completions: f64,
}

/// The full analytics payload served by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    pub content: CatalogCounts,
    pub learners: LearnerTotals,
    pub engagement: EngagementSeries,
}

// ============================================================
// AGGREGATION
// ============================================================

/// Mock weekly activity. The platform has no event pipeline; this series is
/// fixed and only its reductions are computed.
fn weekly_activity() -> Vec<WeeklyActivity> {
    vec![
        WeeklyActivity { week: "2026-W29".to_string(), active_users: 412, completions: 980 },
        WeeklyActivity { week: "2026-W30".to_string(), active_users: 438, completions: 1045 },
        WeeklyActivity { week: "2026-W31".to_string(), active_users: 371, completions: 862 },
        WeeklyActivity { week: "2026-W32".to_string(), active_users: 455, completions: 1190 },
        WeeklyActivity { week: "2026-W33".to_string(), active_users: 490, completions: 1241 },
        WeeklyActivity { week: "2026-W34".to_string(), active_users: 503, completions: 1308 },
    ]
}

/// Reduce the catalogs and learning stores into one summary
pub fn platform_summary(
    content: CatalogCounts,
    progress: &ProgressTracker,
    ratings: &RatingAggregator,
    bookmarks: &BookmarkStore,
) -> PlatformSummary {
    let (total_completions, total_points_awarded) = progress.totals();
    let (rated_topics, total_ratings, average_rating) = ratings.totals();

    let weeks = weekly_activity();
    let total_active_users = weeks.iter().map(|w| w.active_users).sum();
    let mean_weekly_completions = if weeks.is_empty() {
        0.0
    } else {
        weeks.iter().map(|w| w.completions as f64).sum::<f64>() / weeks.len() as f64
    };

    PlatformSummary {
        content,
        learners: LearnerTotals {
            tracked_users: progress.tracked_users(),
            total_completions,
            total_points_awarded,
            rated_topics,
            total_ratings,
            average_rating,
            total_bookmarks: bookmarks.total(),
        },
        engagement: EngagementSeries {
            weeks,
            total_active_users,
            mean_weekly_completions,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_reflects_store_state() {
        let progress = ProgressTracker::new();
        let ratings = RatingAggregator::new();
        let bookmarks = BookmarkStore::new();

        progress.record_completion("alice", "t1", 40);
        progress.record_completion("bob", "t1", 40);
        ratings.submit_rating("t1", "alice", 5).unwrap();
        ratings.submit_rating("t1", "bob", 3).unwrap();
        bookmarks.set_bookmark("alice", "article", "a1", true);

        let summary =
            platform_summary(CatalogCounts::default(), &progress, &ratings, &bookmarks);

        assert_eq!(summary.learners.tracked_users, 2);
        assert_eq!(summary.learners.total_completions, 2);
        assert_eq!(summary.learners.total_points_awarded, 80);
        assert_eq!(summary.learners.total_ratings, 2);
        assert!((summary.learners.average_rating - 4.0).abs() < f64::EPSILON);
        assert_eq!(summary.learners.total_bookmarks, 1);
    }

    #[test]
    fn test_engagement_reductions_match_series() {
        let summary = platform_summary(
            CatalogCounts::default(),
            &ProgressTracker::new(),
            &RatingAggregator::new(),
            &BookmarkStore::new(),
        );

        let weeks = &summary.engagement.weeks;
        assert!(!weeks.is_empty());
        let expected_sum: u32 = weeks.iter().map(|w| w.active_users).sum();
        assert_eq!(summary.engagement.total_active_users, expected_sum);

        let expected_mean =
            weeks.iter().map(|w| w.completions as f64).sum::<f64>() / weeks.len() as f64;
        assert!((summary.engagement.mean_weekly_completions - expected_mean).abs() < 1e-9);
    }
}
