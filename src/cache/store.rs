//! Cache Store Module
//!
//! Main cache engine: a HashMap behind a read-write lock with lazy TTL
//! expiration and glob key enumeration.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::stats::StatsCounters;
use crate::cache::{CacheEntry, CacheStats, GlobPattern, NEVER_EXPIRE};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_cleanup_task;

#[derive(Debug, Default)]
struct Shared {
    entries: RwLock<HashMap<String, CacheEntry>>,
    stats: StatsCounters,
    closed: AtomicBool,
}

// == Cache Store ==
/// Thread-safe key-value store with per-key TTL.
///
/// Cloning a `CacheStore` yields another handle to the same data. Expired
/// entries are never returned; `get` and `keys` remove the ones they run
/// into.
#[derive(Debug, Clone, Default)]
pub struct CacheStore {
    shared: Arc<Shared>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store relying on lazy expiration only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store and starts a background task that sweeps
    /// expired entries every `config.cleanup_period()`.
    ///
    /// Must be called from within a tokio runtime. The task stops on its own
    /// once the store is closed or every handle to it is dropped.
    pub fn with_cleanup(config: &Config) -> (Self, JoinHandle<()>) {
        let store = Self::new();
        let handle = spawn_cleanup_task(store.clone(), config.cleanup_period());
        (store, handle)
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// A `NEVER_EXPIRE` ttl stores the entry without expiration; any other
    /// ttl expires it after that duration. Overwriting an existing key
    /// replaces both its value and its expiration.
    pub fn set(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Result<()> {
        let entry = CacheEntry::new(value.into(), ttl);

        let mut entries = self.shared.entries.write();
        self.ensure_open()?;
        entries.insert(key.into(), entry);

        Ok(())
    }

    // == Get ==
    /// Retrieves a live value by key.
    ///
    /// Absent and expired keys both yield `NotFound`; an expired entry is
    /// removed on the way out.
    pub fn get(&self, key: &str) -> Result<String> {
        {
            let entries = self.shared.entries.read();
            self.ensure_open()?;

            match entries.get(key) {
                Some(entry) if !entry.is_expired() => {
                    self.shared.stats.record_hit();
                    return Ok(entry.value.clone());
                }
                Some(_) => {}
                None => {
                    self.shared.stats.record_miss();
                    return Err(CacheError::NotFound(key.to_string()));
                }
            }
        }

        self.purge_expired([key]);
        self.shared.stats.record_miss();
        Err(CacheError::NotFound(key.to_string()))
    }

    // == Delete ==
    /// Removes every listed key. Missing keys are ignored.
    pub fn del<I, K>(&self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut entries = self.shared.entries.write();
        self.ensure_open()?;

        for key in keys {
            entries.remove(key.as_ref());
        }

        Ok(())
    }

    // == Exists ==
    /// Returns true if every listed key is present and not expired.
    ///
    /// An empty list is vacuously true.
    pub fn exists<I, K>(&self, keys: I) -> Result<bool>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let entries = self.shared.entries.read();
        self.ensure_open()?;

        let now = Instant::now();
        Ok(keys.into_iter().all(|key| {
            entries
                .get(key.as_ref())
                .is_some_and(|entry| !entry.is_expired_at(now))
        }))
    }

    // == Expire ==
    /// Rearms the expiration of a live key to `now + ttl`.
    ///
    /// `ttl` must be positive; `NEVER_EXPIRE` is rejected.
    pub fn expire(&self, key: &str, ttl: Duration) -> Result<()> {
        if ttl == NEVER_EXPIRE {
            return Err(CacheError::InvalidArgument(
                "expire requires a positive ttl".to_string(),
            ));
        }

        let mut entries = self.shared.entries.write();
        self.ensure_open()?;

        match entries.get_mut(key) {
            Some(entry) if !entry.is_expired() => {
                entry.rearm(ttl);
                return Ok(());
            }
            Some(_) => {}
            None => return Err(CacheError::NotFound(key.to_string())),
        }

        entries.remove(key);
        self.shared.stats.record_expirations(1);
        Err(CacheError::NotFound(key.to_string()))
    }

    // == Keys ==
    /// Returns all live keys matching a glob pattern, in no particular order.
    ///
    /// Expired entries met during the scan are removed.
    pub fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let pattern = GlobPattern::new(pattern);

        let (matched, expired) = {
            let entries = self.shared.entries.read();
            self.ensure_open()?;

            let now = Instant::now();
            let mut matched = Vec::new();
            let mut expired = Vec::new();
            for (key, entry) in entries.iter() {
                if entry.is_expired_at(now) {
                    expired.push(key.clone());
                } else if pattern.matches(key) {
                    matched.push(key.clone());
                }
            }
            (matched, expired)
        };

        if !expired.is_empty() {
            self.purge_expired(&expired);
        }

        Ok(matched)
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        let mut entries = self.shared.entries.write();
        let now = Instant::now();

        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - entries.len();

        self.shared.stats.record_expirations(removed);
        removed
    }

    // == Close ==
    /// Closes the store and drops its entries.
    ///
    /// Every later operation fails with `StoreUnavailable`. Closing twice is
    /// a no-op.
    pub fn close(&self) {
        let mut entries = self.shared.entries.write();
        if self.shared.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        let dropped = entries.len();
        entries.clear();
        info!("Cache store closed, dropped {} entries", dropped);
    }

    /// Returns true once `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::SeqCst)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.shared.stats.snapshot(self.len())
    }

    // == Length ==
    /// Returns the number of entries physically held, including expired
    /// entries nobody has looked at yet.
    pub fn len(&self) -> usize {
        self.shared.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a handle that does not keep the store alive.
    pub(crate) fn downgrade(&self) -> WeakCacheStore {
        WeakCacheStore {
            shared: Arc::downgrade(&self.shared),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            Err(CacheError::StoreUnavailable)
        } else {
            Ok(())
        }
    }

    /// Removes the given keys if they are still expired once the write lock
    /// is held. A key re-set in the meantime is left alone.
    fn purge_expired<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut entries = self.shared.entries.write();
        let now = Instant::now();

        let mut removed = 0;
        for key in keys {
            let key = key.as_ref();
            if entries.get(key).is_some_and(|entry| entry.is_expired_at(now)) {
                entries.remove(key);
                removed += 1;
            }
        }

        if removed > 0 {
            debug!("Lazily removed {} expired entries", removed);
            self.shared.stats.record_expirations(removed);
        }
    }
}

// == Weak Cache Store ==
/// Non-owning handle to a store, used by background tasks so they never
/// keep a dropped store's map alive.
#[derive(Debug, Clone)]
pub(crate) struct WeakCacheStore {
    shared: Weak<Shared>,
}

impl WeakCacheStore {
    /// Returns a strong handle, or None once every `CacheStore` is dropped.
    pub(crate) fn upgrade(&self) -> Option<CacheStore> {
        self.shared.upgrade().map(|shared| CacheStore { shared })
    }
}
