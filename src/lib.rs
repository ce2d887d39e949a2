//! Synapse Med Backend
//!
//! API server for a medical-education learning platform:
//! - Content catalogs: courses, articles, books, drugs, badges, team, topics
//! - Learning state: progress/levels, ratings, bookmarks, highlights
//! - Analytics aggregation and a chat-tutor proxy
//!
//! All storage is in-memory and resets on restart (prototype mode).

pub mod api;
pub mod catalog;
pub mod chat;
pub mod learning;

pub use api::*;
pub use catalog::*;
pub use chat::*;
pub use learning::*;
