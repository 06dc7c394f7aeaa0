use chrono::{DateTime, TimeZone, Utc};
use tickstat_core::{PricePoint, PriceSeries, TickerUniverse};

fn ts(sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 13, 30, sec).unwrap()
}

#[test]
fn construction_sorts_ascending() {
    let series = PriceSeries::from_points(vec![
        PricePoint::new(3.0, ts(30)),
        PricePoint::new(1.0, ts(10)),
        PricePoint::new(2.0, ts(20)),
    ]);
    assert_eq!(series.prices(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn sort_is_stable_for_tied_timestamps() {
    let series = PriceSeries::from_points(vec![
        PricePoint::new(2.0, ts(10)),
        PricePoint::new(1.0, ts(5)),
        PricePoint::new(3.0, ts(10)),
    ]);
    // The two ts(10) points keep their original relative order.
    assert_eq!(series.prices(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn empty_series_reports_empty() {
    let series = PriceSeries::empty();
    assert!(series.is_empty());
    assert_eq!(series.len(), 0);
    assert!(series.prices().is_empty());
}

#[test]
fn serializes_as_a_plain_array_of_points() {
    let series = PriceSeries::from_points(vec![PricePoint::new(101.5, ts(0))]);
    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "price": 101.5, "observedAt": "2024-06-03T13:30:00Z" }])
    );
}

#[test]
fn universe_lookup_and_order() {
    let universe: TickerUniverse = [
        ("Microsoft Corporation".to_string(), "MSFT".to_string()),
        ("Apple Inc.".to_string(), "AAPL".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(universe.symbol("Apple Inc."), Some("AAPL"));
    assert_eq!(universe.symbol("missing"), None);
    // Name-ordered iteration regardless of insertion order.
    let names: Vec<_> = universe.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["Apple Inc.", "Microsoft Corporation"]);
}
