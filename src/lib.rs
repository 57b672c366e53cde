//! Simple Cache - a process-local key-value cache
//!
//! Provides Redis-like `SET`/`GET`/`DEL`/`EXPIRE`/`KEYS` semantics with
//! per-key TTL and lazy expiration, for hosts that want a cache without an
//! external service.
//!
//! ```
//! use std::time::Duration;
//! use simple_cache::{CacheStore, NEVER_EXPIRE};
//!
//! let store = CacheStore::new();
//! store.set("session:1", "alice", Duration::from_secs(60)).unwrap();
//! store.set("config", "v1", NEVER_EXPIRE).unwrap();
//!
//! assert_eq!(store.get("session:1").unwrap(), "alice");
//! assert_eq!(store.keys("session:*").unwrap(), vec!["session:1"]);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheStats, CacheStore, NEVER_EXPIRE};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
