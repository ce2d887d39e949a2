//! Engagement Store Module
//!
//! Bookmarks and highlights. Bookmarks are per-user sets of composite
//! `type:itemId` keys; highlights are per-(user, type, item) opaque payloads
//! with last-write-wins semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

/// Composite key distinguishing bookmarked entities across content types
pub fn bookmark_key(item_type: &str, item_id: &str) -> String {
    format!("{}:{}", item_type, item_id)
}

fn highlight_key(user_id: &str, item_type: &str, item_id: &str) -> String {
    format!("{}:{}:{}", user_id, item_type, item_id)
}

// ============================================================
// BOOKMARKS
// ============================================================

/// Per-user bookmark sets. Membership always reflects the latest boolean
/// sent for an item; re-sending the current state is a no-op.
pub struct BookmarkStore {
    by_user: Mutex<HashMap<String, BTreeSet<String>>>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self {
            by_user: Mutex::new(HashMap::new()),
        }
    }

    /// Set or clear a bookmark. Returns true if the set changed.
    pub fn set_bookmark(
        &self,
        user_id: &str,
        item_type: &str,
        item_id: &str,
        bookmarked: bool,
    ) -> bool {
        let key = bookmark_key(item_type, item_id);
        let mut by_user = self.by_user.lock().unwrap();
        let set = by_user.entry(user_id.to_string()).or_default();
        if bookmarked {
            set.insert(key)
        } else {
            set.remove(&key)
        }
    }

    /// The user's current composite keys, sorted
    pub fn bookmarks_for(&self, user_id: &str) -> Vec<String> {
        let by_user = self.by_user.lock().unwrap();
        by_user
            .get(user_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Total bookmarks across all users
    pub fn total(&self) -> usize {
        let by_user = self.by_user.lock().unwrap();
        by_user.values().map(|set| set.len()).sum()
    }
}

impl Default for BookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================
// HIGHLIGHTS
// ============================================================

/// A saved highlight payload for one (user, type, item) triple
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightRecord {
    pub user_id: String,
    pub item_type: String,
    pub item_id: String,
    /// Opaque client payload (ranges, colors, notes)
    pub highlights: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Keyed highlight storage, last write wins
pub struct HighlightStore {
    records: Mutex<HashMap<String, HighlightRecord>>,
}

impl HighlightStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Replace the payload for the triple, stamping the current time
    pub fn set_highlight(
        &self,
        user_id: &str,
        item_type: &str,
        item_id: &str,
        highlights: serde_json::Value,
    ) -> HighlightRecord {
        let record = HighlightRecord {
            user_id: user_id.to_string(),
            item_type: item_type.to_string(),
            item_id: item_id.to_string(),
            highlights,
            updated_at: Utc::now(),
        };
        let mut records = self.records.lock().unwrap();
        records.insert(highlight_key(user_id, item_type, item_id), record.clone());
        record
    }

    pub fn highlights_for(
        &self,
        user_id: &str,
        item_type: &str,
        item_id: &str,
    ) -> Option<HighlightRecord> {
        let records = self.records.lock().unwrap();
        records.get(&highlight_key(user_id, item_type, item_id)).cloned()
    }
}

impl Default for HighlightStore {
    fn default() -> Self {
        Self::new()
    }
}
