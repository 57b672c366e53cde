//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside a cache store.
//!
//! # Tasks
//! - TTL Cleanup: Removes expired entries nobody has read, bounding memory

mod cleanup;

pub use cleanup::spawn_cleanup_task;
