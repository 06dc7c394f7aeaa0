use std::time::Duration;

use tickstat_core::{CacheConfig, TickstatError};
use tickstat_rest::DEFAULT_TIMEOUT;
use url::Url;

/// Environment variable naming the upstream service base URL.
pub const ENV_BASE_URL: &str = "UPSTREAM_BASE_URL";
/// Environment variable naming the cache TTL in whole seconds.
pub const ENV_CACHE_TTL: &str = "CACHE_TTL_SEC";

const DEFAULT_TTL_SECS: u64 = 30;

/// Configuration for a [`crate::Tickstat`] service instance.
#[derive(Debug, Clone)]
pub struct TickstatConfig {
    /// Base URL of the upstream price service.
    pub base_url: Url,
    /// Series cache policy.
    pub cache: CacheConfig,
    /// Per-request timeout for outbound fetches.
    pub request_timeout: Duration,
}

impl TickstatConfig {
    /// Config targeting `base_url` with default cache policy and timeout.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            cache: CacheConfig::default(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read configuration from the environment.
    ///
    /// `UPSTREAM_BASE_URL` is required. `CACHE_TTL_SEC` is optional and
    /// falls back to 30 seconds when unset or unparseable.
    ///
    /// # Errors
    /// Returns `TickstatError::InvalidArg` when the base URL is missing or
    /// does not parse.
    pub fn from_env() -> Result<Self, TickstatError> {
        let raw = std::env::var(ENV_BASE_URL)
            .map_err(|_| TickstatError::invalid_arg(format!("{ENV_BASE_URL} is not set")))?;
        let base_url = Url::parse(&raw).map_err(|e| {
            TickstatError::invalid_arg(format!("{ENV_BASE_URL} is not a valid URL: {e}"))
        })?;
        let ttl_secs = std::env::var(ENV_CACHE_TTL)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_SECS);
        Ok(Self {
            base_url,
            cache: CacheConfig::with_ttl_secs(ttl_secs),
            request_timeout: DEFAULT_TIMEOUT,
        })
    }
}
