mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::TimeDelta;
use helpers::{CountingSource, FakeClock};
use tickstat_core::{CacheConfig, PriceSource};
use tickstat_middleware::CachingSource;

fn cfg(ttl_secs: u64) -> CacheConfig {
    CacheConfig {
        ttl: Duration::from_secs(ttl_secs),
        ..CacheConfig::default()
    }
}

#[tokio::test]
async fn entries_younger_than_ttl_are_served_without_a_fetch() {
    let count = Arc::new(AtomicUsize::new(0));
    let clock = FakeClock::new();
    let cached = CachingSource::with_clock(
        Arc::new(CountingSource::new(count.clone())),
        &cfg(30),
        clock.clone(),
    );

    let first = cached.history("AAPL", 30).await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
    let second = cached.history("AAPL", 30).await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1, "fresh entry must not refetch");
    assert_eq!(first, second);
}

#[tokio::test]
async fn ttl_expiration_causes_refetch() {
    let count = Arc::new(AtomicUsize::new(0));
    let clock = FakeClock::new();
    let cached = CachingSource::with_clock(
        Arc::new(CountingSource::new(count.clone())),
        &cfg(30),
        clock.clone(),
    );

    let _ = cached.history("AAPL", 30).await.unwrap();
    clock.advance(TimeDelta::seconds(29));
    let _ = cached.history("AAPL", 30).await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1, "29s-old entry is still fresh");

    clock.advance(TimeDelta::seconds(2));
    let _ = cached.history("AAPL", 30).await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 2, "31s-old entry must refetch");
}

#[tokio::test]
async fn entry_exactly_at_ttl_is_stale() {
    let count = Arc::new(AtomicUsize::new(0));
    let clock = FakeClock::new();
    let cached = CachingSource::with_clock(
        Arc::new(CountingSource::new(count.clone())),
        &cfg(30),
        clock.clone(),
    );

    let _ = cached.history("AAPL", 30).await.unwrap();
    clock.advance(TimeDelta::seconds(30));
    let _ = cached.history("AAPL", 30).await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn ttl_zero_disables_caching() {
    let count = Arc::new(AtomicUsize::new(0));
    let cached = CachingSource::new(Arc::new(CountingSource::new(count.clone())), &cfg(0));

    let _ = cached.history("AAPL", 30).await.unwrap();
    let _ = cached.history("AAPL", 30).await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 2, "no caching when ttl=0");
}
