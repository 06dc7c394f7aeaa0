//! tickstat-rest
//!
//! Production connector that implements [`PriceSource`] over the upstream
//! REST price service. Normalizes the service's heterogeneous history
//! payloads into the canonical series type and substitutes a synthetic
//! series when the upstream cannot be reached, so downstream statistics
//! always have non-empty input.
#![warn(missing_docs)]

/// Builder for the REST connector.
pub mod builder;
/// Synthetic fallback series generation.
pub mod fallback;
/// Upstream payload decoding.
pub mod payload;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tickstat_core::{Clock, PriceSeries, PriceSource, TickerUniverse, TickstatError};
use url::Url;

pub use builder::{DEFAULT_TIMEOUT, RestSourceBuilder};
use payload::HistoryPayload;

/// Envelope of the upstream's ticker-listing endpoint.
#[derive(Debug, Deserialize)]
struct UniversePayload {
    stocks: BTreeMap<String, String>,
}

/// REST-backed price source.
///
/// `history` never surfaces upstream failures: any transport or decode
/// error is logged and answered with a synthetic series instead. The
/// `universe` endpoint has no meaningful stand-in, so its failures
/// propagate.
pub struct RestSource {
    client: reqwest::Client,
    base_url: Url,
    clock: Arc<dyn Clock>,
}

impl RestSource {
    /// Stable source name used in logs and errors.
    pub const NAME: &'static str = "tickstat-rest";

    /// Builder targeting `base_url`.
    #[must_use]
    pub fn builder(base_url: Url) -> RestSourceBuilder {
        RestSourceBuilder::new(base_url)
    }

    pub(crate) fn from_parts(client: reqwest::Client, base_url: Url, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            base_url,
            clock,
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, TickstatError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                TickstatError::invalid_arg(format!("base URL cannot carry paths: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn try_history(
        &self,
        ticker: &str,
        window_minutes: u32,
    ) -> Result<PriceSeries, TickstatError> {
        let mut url = self.endpoint(&["stocks", ticker])?;
        url.query_pairs_mut()
            .append_pair("minutes", &window_minutes.to_string());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| TickstatError::upstream(Self::NAME, e.to_string()))?;
        let payload: HistoryPayload = response
            .json()
            .await
            .map_err(|e| TickstatError::upstream(Self::NAME, e.to_string()))?;
        Ok(payload.into_series())
    }
}

#[async_trait]
impl PriceSource for RestSource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn history(
        &self,
        ticker: &str,
        window_minutes: u32,
    ) -> Result<PriceSeries, TickstatError> {
        match self.try_history(ticker, window_minutes).await {
            Ok(series) => Ok(series),
            Err(err) => {
                // Operator-facing degradation signal; callers only ever see
                // a well-formed series.
                tracing::warn!(
                    ticker,
                    window_minutes,
                    reason = %err,
                    "upstream fetch failed, substituting synthetic series"
                );
                Ok(fallback::synthetic_series(window_minutes, self.clock.now()))
            }
        }
    }

    async fn universe(&self) -> Result<TickerUniverse, TickstatError> {
        let url = self.endpoint(&["stocks"])?;
        let payload: UniversePayload = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| TickstatError::upstream(Self::NAME, e.to_string()))?
            .json()
            .await
            .map_err(|e| TickstatError::upstream(Self::NAME, e.to_string()))?;
        Ok(payload.stocks.into())
    }
}
