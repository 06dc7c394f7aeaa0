use std::sync::Arc;

use tickstat_core::{Clock, PriceSource, SystemClock, TickerUniverse, TickstatError, align, stats};
use tickstat_middleware::CachingSource;
use tickstat_rest::RestSource;

use crate::config::TickstatConfig;
use crate::report::{CorrelationReport, TickerStats};

/// The statistics service: resolves cached price history and derives
/// windowed averages and cross-ticker correlation.
pub struct Tickstat {
    source: Arc<dyn PriceSource>,
}

impl std::fmt::Debug for Tickstat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tickstat").finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Tickstat`] service instance.
pub struct TickstatBuilder {
    source: Option<Arc<dyn PriceSource>>,
    config: Option<TickstatConfig>,
    clock: Option<Arc<dyn Clock>>,
}

impl Default for TickstatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TickstatBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            config: None,
            clock: None,
        }
    }

    /// Supply the service configuration. Required unless a custom source is
    /// injected via [`with_source`](Self::with_source).
    #[must_use]
    pub fn with_config(mut self, config: TickstatConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Inject a custom inner source (e.g. a mock) instead of the REST
    /// connector. The builder still wraps it with the series cache.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn PriceSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Inject a clock shared by the cache and the fallback synthesizer.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the service: resolve the inner source and wrap it with the
    /// caching layer.
    ///
    /// # Errors
    /// Returns `TickstatError::InvalidArg` when neither a source nor a
    /// config was supplied, or when the configured connector fails to build.
    pub fn build(self) -> Result<Tickstat, TickstatError> {
        let clock: Arc<dyn Clock> = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let cache_cfg = self
            .config
            .as_ref()
            .map(|c| c.cache.clone())
            .unwrap_or_default();

        let inner: Arc<dyn PriceSource> = match self.source {
            Some(source) => source,
            None => {
                let cfg = self.config.as_ref().ok_or_else(|| {
                    TickstatError::invalid_arg(
                        "either a price source or a config with an upstream base URL is required",
                    )
                })?;
                Arc::new(
                    RestSource::builder(cfg.base_url.clone())
                        .timeout(cfg.request_timeout)
                        .clock(Arc::clone(&clock))
                        .build()?,
                )
            }
        };

        Ok(Tickstat {
            source: Arc::new(CachingSource::with_clock(inner, &cache_cfg, clock)),
        })
    }
}

fn validate(ticker: &str, window_minutes: u32) -> Result<(), TickstatError> {
    if ticker.trim().is_empty() {
        return Err(TickstatError::invalid_arg("ticker must not be empty"));
    }
    if window_minutes == 0 {
        return Err(TickstatError::invalid_arg(
            "window_minutes must be positive",
        ));
    }
    Ok(())
}

impl Tickstat {
    /// Start building a service instance.
    #[must_use]
    pub fn builder() -> TickstatBuilder {
        TickstatBuilder::new()
    }

    /// Build a service from environment configuration
    /// (`UPSTREAM_BASE_URL`, `CACHE_TTL_SEC`).
    ///
    /// # Errors
    /// Returns `TickstatError::InvalidArg` when the environment is
    /// incomplete or malformed.
    pub fn from_env() -> Result<Self, TickstatError> {
        Self::builder()
            .with_config(TickstatConfig::from_env()?)
            .build()
    }

    /// Average price and full history for `ticker` over the trailing
    /// `window_minutes`.
    ///
    /// # Errors
    /// - `TickstatError::InvalidArg` on empty ticker or zero window.
    /// - `TickstatError::NotFound` when the resolved series is empty.
    pub async fn average_and_history(
        &self,
        ticker: &str,
        window_minutes: u32,
    ) -> Result<TickerStats, TickstatError> {
        validate(ticker, window_minutes)?;
        tracing::debug!(ticker, window_minutes, "resolving windowed average");
        let history = self.source.history(ticker, window_minutes).await?;
        if history.is_empty() {
            return Err(TickstatError::not_found(format!(
                "price history for {ticker}"
            )));
        }
        let average = stats::average(&history.prices());
        Ok(TickerStats {
            ticker: ticker.to_string(),
            average,
            history,
        })
    }

    /// Pearson correlation between two tickers over the trailing window,
    /// plus both full histories with their independent averages.
    ///
    /// Both series are fetched concurrently. The coefficient is computed on
    /// the exact-timestamp intersection; the averages cover each raw series.
    ///
    /// # Errors
    /// - `TickstatError::InvalidArg` on empty tickers or zero window.
    /// - `TickstatError::NotFound` when either resolved series is empty.
    /// - `TickstatError::InsufficientOverlap` when the two series share
    ///   fewer than 2 timestamps.
    pub async fn correlation(
        &self,
        ticker_a: &str,
        ticker_b: &str,
        window_minutes: u32,
    ) -> Result<CorrelationReport, TickstatError> {
        validate(ticker_a, window_minutes)?;
        validate(ticker_b, window_minutes)?;
        tracing::debug!(ticker_a, ticker_b, window_minutes, "resolving correlation");

        let (first, second) = tokio::join!(
            self.source.history(ticker_a, window_minutes),
            self.source.history(ticker_b, window_minutes),
        );
        let (first, second) = (first?, second?);
        for (ticker, series) in [(ticker_a, &first), (ticker_b, &second)] {
            if series.is_empty() {
                return Err(TickstatError::not_found(format!(
                    "price history for {ticker}"
                )));
            }
        }

        let aligned = align(&first, &second);
        if aligned.len() < 2 {
            return Err(TickstatError::InsufficientOverlap {
                common: aligned.len(),
            });
        }
        let correlation = stats::correlation(&aligned.first.prices(), &aligned.second.prices());

        Ok(CorrelationReport {
            correlation,
            first: TickerStats {
                ticker: ticker_a.to_string(),
                average: stats::average(&first.prices()),
                history: first,
            },
            second: TickerStats {
                ticker: ticker_b.to_string(),
                average: stats::average(&second.prices()),
                history: second,
            },
        })
    }

    /// The upstream's full name-to-symbol instrument listing.
    ///
    /// # Errors
    /// Propagates `TickstatError::Upstream`; the listing has no synthetic
    /// stand-in.
    pub async fn universe(&self) -> Result<TickerUniverse, TickstatError> {
        self.source.universe().await
    }
}
