//! Common data structures used throughout the workspace.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single observed price sample.
///
/// Immutable once produced. `observed_at` carries whatever precision the
/// upstream source emitted; two points align only when their parsed instants
/// are exactly equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    /// Observed price.
    pub price: f64,
    /// Instant the price was observed upstream.
    pub observed_at: DateTime<Utc>,
}

impl PricePoint {
    /// Construct a point from a price and its observation instant.
    #[must_use]
    pub const fn new(price: f64, observed_at: DateTime<Utc>) -> Self {
        Self { price, observed_at }
    }
}

/// An ordered sequence of price points.
///
/// Invariant: non-decreasing by `observed_at`. Ties are permitted and keep
/// their original relative order (the constructor uses a stable sort).
/// A series is never mutated after construction, only replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries(Vec<PricePoint>);

impl PriceSeries {
    /// Build a series from points in any order; sorts ascending by timestamp.
    #[must_use]
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.observed_at);
        Self(points)
    }

    /// The empty series.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Points in chronological order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.0
    }

    /// Just the prices, in chronological order.
    #[must_use]
    pub fn prices(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.price).collect()
    }

    /// Number of points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over points in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The upstream's full listing of tradable instruments, keyed by display
/// name with the short ticker symbol as the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickerUniverse(BTreeMap<String, String>);

impl TickerUniverse {
    /// Look up the symbol for a display name.
    #[must_use]
    pub fn symbol(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterate over `(name, symbol)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, s)| (n.as_str(), s.as_str()))
    }

    /// Number of listed instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the listing is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for TickerUniverse {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, String)> for TickerUniverse {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
