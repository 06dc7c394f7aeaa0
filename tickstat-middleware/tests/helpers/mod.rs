use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use tickstat_core::{Clock, PriceSeries, PriceSource, TickerUniverse, TickstatError};
use tickstat_mock::MockSource;

/// Wrapper that counts inner history fetches.
pub struct CountingSource {
    inner: MockSource,
    count: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new(count: Arc<AtomicUsize>) -> Self {
        Self {
            inner: MockSource::new(),
            count,
        }
    }
}

#[async_trait]
impl PriceSource for CountingSource {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn history(
        &self,
        ticker: &str,
        window_minutes: u32,
    ) -> Result<PriceSeries, TickstatError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.inner.history(ticker, window_minutes).await
    }

    async fn universe(&self) -> Result<TickerUniverse, TickstatError> {
        self.inner.universe().await
    }
}

/// Manually advanced clock.
pub struct FakeClock(std::sync::Mutex<DateTime<Utc>>);

impl FakeClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self(std::sync::Mutex::new(
            Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap(),
        )))
    }

    #[allow(dead_code)]
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.0.lock().unwrap();
        *now = *now + delta;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}
