//! Decoding of upstream history payloads into the canonical series type.
//!
//! The upstream emits one of three shapes for the same data; the union is
//! modeled as one untagged enum so nothing outside this crate ever branches
//! on shape.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tickstat_core::{PricePoint, PriceSeries};

/// One raw record as the upstream emits it. Both fields are optional so a
/// partial record decodes instead of failing the whole payload; partial
/// records are dropped during normalization.
#[derive(Debug, Deserialize)]
pub struct RawPoint {
    /// Observed price, if present.
    pub price: Option<f64>,
    /// Observation instant as an RFC 3339 string, if present.
    #[serde(rename = "lastUpdatedAt")]
    pub last_updated_at: Option<String>,
}

impl RawPoint {
    /// Convert to a canonical point; `None` when the price or timestamp is
    /// missing or the timestamp does not parse.
    fn into_point(self) -> Option<PricePoint> {
        let price = self.price?;
        let raw_ts = self.last_updated_at?;
        let observed_at = DateTime::parse_from_rfc3339(&raw_ts)
            .ok()?
            .with_timezone(&Utc);
        Some(PricePoint::new(price, observed_at))
    }
}

/// The three accepted upstream history shapes.
///
/// Variant order matters for untagged deserialization: a bare array is
/// tried first, then the `prices`-wrapper object, then the keyed map whose
/// values are individual records (the only shape with no inherent order).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum HistoryPayload {
    /// Shape (a): a raw JSON array of price points.
    Points(Vec<RawPoint>),
    /// Shape (b): an object wrapping the array in a `prices` field.
    Wrapped {
        /// The wrapped price points.
        prices: Vec<RawPoint>,
    },
    /// Shape (c): an object mapping arbitrary keys to individual records.
    Keyed(BTreeMap<String, RawPoint>),
}

impl HistoryPayload {
    /// Normalize any shape into a chronologically sorted series, silently
    /// dropping records without a usable price and timestamp.
    #[must_use]
    pub fn into_series(self) -> PriceSeries {
        let raw: Vec<RawPoint> = match self {
            Self::Points(points) => points,
            Self::Wrapped { prices } => prices,
            Self::Keyed(map) => map.into_values().collect(),
        };
        PriceSeries::from_points(raw.into_iter().filter_map(RawPoint::into_point).collect())
    }
}
