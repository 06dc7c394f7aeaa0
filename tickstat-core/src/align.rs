use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use crate::types::{PricePoint, PriceSeries};

/// Two equal-length series sharing identical, ordered timestamps pairwise.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    /// First series restricted to the common timestamps.
    pub first: PriceSeries,
    /// Second series restricted to the common timestamps.
    pub second: PriceSeries,
}

impl AlignedPair {
    /// Number of common timestamps (both sides have the same length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Whether the intersection was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }
}

/// Intersect two series by exact timestamp.
///
/// Each side is keyed by its parsed `observed_at` instant; on duplicate
/// timestamps within one series the later point wins. The intersection is
/// emitted in chronological order (a `BTreeMap` drives iteration, never
/// hash-map order). No interpolation and no nearest-neighbor matching: a
/// timestamp either matches exactly or is dropped. An empty intersection
/// yields two empty series, not an error.
#[must_use]
pub fn align(first: &PriceSeries, second: &PriceSeries) -> AlignedPair {
    let by_ts_first: BTreeMap<DateTime<Utc>, f64> = first
        .iter()
        .map(|p| (p.observed_at, p.price))
        .collect();
    let by_ts_second: HashMap<DateTime<Utc>, f64> = second
        .iter()
        .map(|p| (p.observed_at, p.price))
        .collect();

    let mut out_first = Vec::new();
    let mut out_second = Vec::new();
    for (ts, price) in by_ts_first {
        if let Some(other) = by_ts_second.get(&ts) {
            out_first.push(PricePoint::new(price, ts));
            out_second.push(PricePoint::new(*other, ts));
        }
    }

    AlignedPair {
        first: PriceSeries::from_points(out_first),
        second: PriceSeries::from_points(out_second),
    }
}
