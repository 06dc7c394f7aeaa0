use serde::Serialize;
use tickstat_core::PriceSeries;

/// Average price and full history for one ticker over the requested window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerStats {
    /// The ticker the statistics describe.
    pub ticker: String,
    /// Arithmetic mean over the full (unaligned) series.
    pub average: f64,
    /// The resolved series, sorted ascending by timestamp.
    pub history: PriceSeries,
}

/// Pearson correlation between two tickers plus both full histories.
///
/// The coefficient is computed on the timestamp-aligned intersection; the
/// per-ticker averages and histories cover each raw series in full.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationReport {
    /// Pearson coefficient in `[-1, 1]`, or `0` when undefined.
    pub correlation: f64,
    /// Statistics for the first requested ticker.
    pub first: TickerStats,
    /// Statistics for the second requested ticker.
    pub second: TickerStats,
}
