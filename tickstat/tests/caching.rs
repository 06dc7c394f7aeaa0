use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tickstat::{PriceSeries, PriceSource, Tickstat, TickstatError};
use tickstat_core::TickerUniverse;
use tickstat_mock::MockSource;

struct CountingSource {
    inner: MockSource,
    count: Arc<AtomicUsize>,
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

#[tokio::test]
async fn the_builder_wraps_injected_sources_with_the_series_cache() {
    let count = Arc::new(AtomicUsize::new(0));
    let service = Tickstat::builder()
        .with_source(Arc::new(CountingSource {
            inner: MockSource::new(),
            count: count.clone(),
        }))
        .build()
        .unwrap();

    let _ = service.average_and_history("AAPL", 30).await.unwrap();
    let _ = service.average_and_history("AAPL", 30).await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1, "second call must hit the cache");

    // A correlation request against warm keys adds no fetches for them.
    let _ = service.correlation("AAPL", "MSFT", 30).await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 2, "only MSFT was cold");
}
