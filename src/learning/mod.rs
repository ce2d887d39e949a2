//! Learning State Module
//!
//! Per-user learning state for the platform: topic completion progress,
//! topic ratings, bookmarks, and highlights. Each key-space lives behind its
//! own mutex-guarded in-memory map, scoped to the process lifetime.

pub mod analytics;
pub mod engagement;
pub mod progress;
pub mod ratings;

pub use analytics::*;
pub use engagement::*;
pub use progress::*;
pub use ratings::*;

use thiserror::Error;

/// Errors surfaced by the in-memory stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),
}
