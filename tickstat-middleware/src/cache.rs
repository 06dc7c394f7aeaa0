use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use lru::LruCache;
use tickstat_core::{
    CacheConfig, Clock, PriceSeries, PriceSource, SystemClock, TickerUniverse, TickstatError,
};
use tokio::sync::Mutex;

/// Cache discrimination key: the literal `(ticker, window)` pair. Distinct
/// windows for the same ticker are independent entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SeriesKey {
    ticker: String,
    window_minutes: u32,
}

/// One cached series with its fetch instant. Replaced wholesale when stale,
/// never partially updated; the series itself is immutable and shared.
struct CacheEntry {
    series: Arc<PriceSeries>,
    fetched_at: DateTime<Utc>,
}

/// Caching wrapper around any [`PriceSource`].
///
/// An entry younger than the TTL is served without touching the inner
/// source. A stale or missing entry triggers exactly one inner fetch even
/// under concurrency: refreshes for the same key are serialized through a
/// per-key gate, and late arrivals re-check the cache before fetching.
/// Whatever the inner source returns is cached, synthetic fallback series
/// included, so a failing upstream is not hammered on every request.
///
/// `universe` calls pass through uncached.
pub struct CachingSource {
    inner: Arc<dyn PriceSource>,
    clock: Arc<dyn Clock>,
    ttl: TimeDelta,
    entries: Mutex<LruCache<SeriesKey, CacheEntry>>,
    inflight: Mutex<HashMap<SeriesKey, Arc<Mutex<()>>>>,
}

impl CachingSource {
    /// Wrap `inner` with the given cache policy and the system clock.
    #[must_use]
    pub fn new(inner: Arc<dyn PriceSource>, cfg: &CacheConfig) -> Self {
        Self::with_clock(inner, cfg, Arc::new(SystemClock))
    }

    /// Wrap `inner` with an injected clock so freshness is testable.
    #[must_use]
    pub fn with_clock(
        inner: Arc<dyn PriceSource>,
        cfg: &CacheConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let capacity = NonZeroUsize::new(cfg.max_entries.max(1)).expect("capacity is at least 1");
        Self {
            inner,
            clock,
            ttl: TimeDelta::from_std(cfg.ttl).unwrap_or(TimeDelta::MAX),
            entries: Mutex::new(LruCache::new(capacity)),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    async fn lookup_fresh(&self, key: &SeriesKey) -> Option<PriceSeries> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().await;
        let entry = entries.get(key)?;
        if now.signed_duration_since(entry.fetched_at) < self.ttl {
            tracing::debug!(
                ticker = %key.ticker,
                window_minutes = key.window_minutes,
                "serving cached series"
            );
            return Some((*entry.series).clone());
        }
        None
    }

    async fn gate_for(&self, key: &SeriesKey) -> Arc<Mutex<()>> {
        let mut inflight = self.inflight.lock().await;
        inflight.entry(key.clone()).or_default().clone()
    }

    async fn drop_gate(&self, key: &SeriesKey) {
        self.inflight.lock().await.remove(key);
    }
}

#[async_trait]
impl PriceSource for CachingSource {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn history(
        &self,
        ticker: &str,
        window_minutes: u32,
    ) -> Result<PriceSeries, TickstatError> {
        if self.ttl.is_zero() {
            return self.inner.history(ticker, window_minutes).await;
        }

        let key = SeriesKey {
            ticker: ticker.to_string(),
            window_minutes,
        };
        if let Some(series) = self.lookup_fresh(&key).await {
            return Ok(series);
        }

        let gate = self.gate_for(&key).await;
        let _refresh = gate.lock().await;

        // Another task may have refreshed this key while we waited.
        if let Some(series) = self.lookup_fresh(&key).await {
            return Ok(series);
        }

        match self.inner.history(ticker, window_minutes).await {
            Ok(series) => {
                let shared = Arc::new(series);
                let entry = CacheEntry {
                    series: Arc::clone(&shared),
                    fetched_at: self.clock.now(),
                };
                self.entries.lock().await.put(key.clone(), entry);
                self.drop_gate(&key).await;
                Ok((*shared).clone())
            }
            Err(err) => {
                self.drop_gate(&key).await;
                Err(err)
            }
        }
    }

    async fn universe(&self) -> Result<TickerUniverse, TickstatError> {
        self.inner.universe().await
    }
}
