//! Cache Backend Interface
//!
//! The operation set a host application codes against, so the in-memory
//! store can stand in for an external cache service.

use std::time::Duration;

use crate::cache::CacheStore;
use crate::error::Result;

/// Backend-neutral cache operations.
///
/// Object safe, so hosts can hold an `Arc<dyn Cache>`.
pub trait Cache: Send + Sync {
    /// Stores `value` under `key`; `NEVER_EXPIRE` disables expiration.
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Returns the live value for `key`, or `NotFound`.
    fn get(&self, key: &str) -> Result<String>;

    /// Removes every listed key; missing keys are ignored.
    fn del(&self, keys: &[&str]) -> Result<()>;

    /// Returns true if every listed key is live.
    fn exists(&self, keys: &[&str]) -> Result<bool>;

    /// Rearms the expiration of a live key.
    fn expire(&self, key: &str, ttl: Duration) -> Result<()>;

    /// Lists live keys matching a glob pattern.
    fn keys(&self, pattern: &str) -> Result<Vec<String>>;
}

impl Cache for CacheStore {
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        CacheStore::set(self, key, value, ttl)
    }

    fn get(&self, key: &str) -> Result<String> {
        CacheStore::get(self, key)
    }

    fn del(&self, keys: &[&str]) -> Result<()> {
        CacheStore::del(self, keys)
    }

    fn exists(&self, keys: &[&str]) -> Result<bool> {
        CacheStore::exists(self, keys)
    }

    fn expire(&self, key: &str, ttl: Duration) -> Result<()> {
        CacheStore::expire(self, key, ttl)
    }

    fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        CacheStore::keys(self, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::NEVER_EXPIRE;
    use crate::error::CacheError;
    use std::sync::Arc;

    #[test]
    fn test_store_behind_trait_object() {
        let cache: Arc<dyn Cache> = Arc::new(CacheStore::new());

        cache.set("foo", "bar", NEVER_EXPIRE).unwrap();
        assert_eq!(cache.get("foo").unwrap(), "bar");
        assert!(cache.exists(&["foo"]).unwrap());
        assert_eq!(cache.keys("f*").unwrap(), vec!["foo"]);

        cache.del(&["foo", "missing"]).unwrap();
        assert!(matches!(cache.get("foo"), Err(CacheError::NotFound(_))));
        assert!(matches!(
            cache.expire("foo", Duration::from_secs(1)),
            Err(CacheError::NotFound(_))
        ));
    }
}
