//! Catalog Module
//!
//! Mock content catalogs for the platform, one keyed in-memory store per
//! content type, seeded at startup.

pub mod seed;
pub mod store;
pub mod types;

pub use seed::*;
pub use store::*;
pub use types::*;
