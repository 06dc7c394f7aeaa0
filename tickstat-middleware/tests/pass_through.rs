mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use helpers::{CountingSource, FakeClock};
use tickstat_core::{CacheConfig, PriceSource, TickstatError};
use tickstat_middleware::CachingSource;

#[tokio::test]
async fn universe_passes_through_uncached() {
    let cached = CachingSource::new(
        Arc::new(CountingSource::new(Arc::new(AtomicUsize::new(0)))),
        &CacheConfig::default(),
    );
    let universe = cached.universe().await.unwrap();
    assert_eq!(universe.symbol("Apple Inc."), Some("AAPL"));
}

#[tokio::test]
async fn name_delegates_to_the_inner_source() {
    let cached = CachingSource::new(
        Arc::new(CountingSource::new(Arc::new(AtomicUsize::new(0)))),
        &CacheConfig::default(),
    );
    assert_eq!(cached.name(), "counting");
}

#[tokio::test]
async fn inner_errors_propagate_and_are_not_cached() {
    let count = Arc::new(AtomicUsize::new(0));
    let cached = CachingSource::with_clock(
        Arc::new(CountingSource::new(count.clone())),
        &CacheConfig::default(),
        FakeClock::new(),
    );

    let err = cached.history("FAIL", 30).await.unwrap_err();
    assert!(matches!(err, TickstatError::Upstream { .. }));
    let err = cached.history("FAIL", 30).await.unwrap_err();
    assert!(matches!(err, TickstatError::Upstream { .. }));
    assert_eq!(
        count.load(Ordering::SeqCst),
        2,
        "a failed fetch leaves no entry behind"
    );
}
