//! Cache Module
//!
//! Provides an in-memory key-value store with lazy TTL expiration and
//! glob-style key enumeration.

mod backend;
mod entry;
mod pattern;
mod stats;
mod store;


use std::time::Duration;

// Re-export public types
pub use backend::Cache;
pub use entry::CacheEntry;
pub use pattern::GlobPattern;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// TTL meaning "this entry never expires".
pub const NEVER_EXPIRE: Duration = Duration::ZERO;
