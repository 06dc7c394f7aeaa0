use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the series cache wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum age before a cached series is considered stale and refetched.
    /// A zero TTL disables caching entirely.
    pub ttl: Duration,
    /// Maximum number of `(ticker, window)` entries kept; least recently
    /// used entries are evicted beyond this.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_entries: 256,
        }
    }
}

impl CacheConfig {
    /// Config with the given TTL in whole seconds and default capacity.
    #[must_use]
    pub fn with_ttl_secs(secs: u64) -> Self {
        Self {
            ttl: Duration::from_secs(secs),
            ..Self::default()
        }
    }
}
