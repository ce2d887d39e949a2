//! Catalog Types
//!
//! Content entities served by the platform: courses, articles, books, drug
//! monographs, badges, team members, and completable topics. Every entity is
//! keyed by a string id and carries a creation timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entity that lives in a [`super::Catalog`], addressable by string id
pub trait Keyed {
    fn key(&self) -> &str;
    fn assign_key(&mut self, key: String);
}

macro_rules! impl_keyed {
    ($($ty:ty),+) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &str {
                &self.id
            }
            fn assign_key(&mut self, key: String) {
                self.id = key;
            }
        })+
    };
}

/// Fresh uuid string for entities created through the API
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

// ============================================================
// COURSES
// ============================================================

/// A structured course of lessons within one specialty
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Medical specialty: "cardiology", "neurology", "pharmacology", ...
    pub specialty: String,
    pub lesson_count: u32,
    pub duration_hours: u32,
    /// "beginner", "intermediate", "advanced"
    pub difficulty: String,
    pub instructor: String,
    #[serde(default)]
    pub enrolled_count: u32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

// ============================================================
// ARTICLES
// ============================================================

/// A long-form article, either published or awaiting review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub author: String,
    pub specialty: String,
    pub summary: String,
    pub body: String,
    pub read_minutes: u32,
    #[serde(default)]
    pub published: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

// ============================================================
// BOOKS
// ============================================================

/// A reference book in the platform library
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub author: String,
    pub specialty: String,
    pub edition: String,
    pub year: u32,
    pub page_count: u32,
    pub summary: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

// ============================================================
// DRUG MONOGRAPHS
// ============================================================

/// A condensed drug monograph for quick reference
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub drug_class: String,
    pub indications: Vec<String>,
    pub contraindications: Vec<String>,
    pub common_dosage: String,
    pub side_effects: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

// ============================================================
// BADGES
// ============================================================

/// An achievement badge earned by accumulating points
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon identifier for the client
    pub icon: String,
    /// Total points a user needs before this badge is earned
    pub points_required: u32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

// ============================================================
// TEAM
// ============================================================

/// A member of the editorial / teaching team
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub role: String,
    pub specialty: String,
    pub bio: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

// ============================================================
// TOPICS
// ============================================================

/// A learning unit a user can complete for points
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub specialty: String,
    /// Points credited on first completion
    pub points: u32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl_keyed!(Course, Article, Book, Drug, Badge, TeamMember, Topic);
