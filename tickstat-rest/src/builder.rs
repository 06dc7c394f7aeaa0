use std::sync::Arc;
use std::time::Duration;

use tickstat_core::{Clock, SystemClock, TickstatError};
use url::Url;

use crate::RestSource;

/// Default per-request timeout applied to the HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Builder for [`RestSource`].
pub struct RestSourceBuilder {
    base_url: Url,
    timeout: Duration,
    clock: Arc<dyn Clock>,
}

impl RestSourceBuilder {
    /// Start a builder targeting the upstream service at `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            clock: Arc::new(SystemClock),
        }
    }

    /// Override the per-request timeout. A hung upstream can otherwise hold
    /// a request for the transport's full default.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Inject a clock; synthetic fallback slots are anchored to `clock.now()`.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `TickstatError::InvalidArg` when the base URL cannot carry
    /// path segments, or `TickstatError::Data` if the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<RestSource, TickstatError> {
        if self.base_url.cannot_be_a_base() {
            return Err(TickstatError::invalid_arg(format!(
                "base URL cannot carry paths: {}",
                self.base_url
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| TickstatError::Data(format!("failed to build HTTP client: {e}")))?;
        Ok(RestSource::from_parts(client, self.base_url, self.clock))
    }
}
