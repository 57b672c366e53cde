//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;
use crate::config::DEFAULT_CLEANUP_INTERVAL;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task sleeps for `interval` between runs and takes the store's write
/// lock for each sweep. Lazy expiration already keeps expired entries out of
/// every read; the sweep only frees entries that are never read again.
///
/// The task holds only a weak reference and exits once the store is closed
/// or every `CacheStore` handle has been dropped. The returned handle can
/// also be used to abort it. A zero `interval` means the default period.
///
/// # Example
/// ```ignore
/// let store = CacheStore::new();
/// let cleanup_handle = spawn_cleanup_task(store.clone(), Duration::from_secs(120));
/// // Later, during shutdown:
/// store.close();
/// ```
pub fn spawn_cleanup_task(store: CacheStore, interval: Duration) -> JoinHandle<()> {
    let interval = effective_interval(interval);
    let weak = store.downgrade();
    drop(store);

    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let Some(store) = weak.upgrade() else {
                info!("Cache store dropped, stopping TTL cleanup task");
                break;
            };

            if store.is_closed() {
                info!("Cache store closed, stopping TTL cleanup task");
                break;
            }

            let removed = store.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

fn effective_interval(interval: Duration) -> Duration {
    if interval.is_zero() {
        Duration::from_secs(DEFAULT_CLEANUP_INTERVAL)
    } else {
        interval
    }
}
