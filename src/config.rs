//! Configuration Module
//!
//! Handles loading the cache's background cleanup settings, either from
//! environment variables or from a host application's own config file.

use std::env;
use std::time::Duration;

use serde::Deserialize;

/// Cleanup interval used when none (or zero) is configured.
pub const DEFAULT_CLEANUP_INTERVAL: u64 = 120;

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 120)
    pub fn from_env() -> Self {
        Self {
            cleanup_interval: env::var("CACHE_CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_CLEANUP_INTERVAL),
        }
    }

    /// Returns the interval between cleanup runs.
    ///
    /// A zero interval means "use the default".
    pub fn cleanup_period(&self) -> Duration {
        match self.cleanup_interval {
            0 => Duration::from_secs(DEFAULT_CLEANUP_INTERVAL),
            secs => Duration::from_secs(secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cleanup_interval, 120);
        assert_eq!(config.cleanup_period(), Duration::from_secs(120));
    }

    #[test]
    fn test_zero_interval_falls_back_to_default() {
        let config = Config { cleanup_interval: 0 };
        assert_eq!(config.cleanup_period(), Duration::from_secs(120));
    }

    #[test]
    fn test_config_from_env() {
        env::set_var("CACHE_CLEANUP_INTERVAL", "30");
        assert_eq!(Config::from_env().cleanup_interval, 30);

        env::set_var("CACHE_CLEANUP_INTERVAL", "not-a-number");
        assert_eq!(Config::from_env().cleanup_interval, 120);

        env::set_var("CACHE_CLEANUP_INTERVAL", "0");
        assert_eq!(Config::from_env().cleanup_interval, 120);

        env::remove_var("CACHE_CLEANUP_INTERVAL");
        assert_eq!(Config::from_env().cleanup_interval, 120);
    }
}
