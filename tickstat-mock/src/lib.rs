//! tickstat-mock
//!
//! Mock price source for CI-safe tests and examples. Serves deterministic
//! series from static fixtures, plus two magic symbols: `FAIL` forces an
//! upstream-style error and `EMPTY` resolves to an empty series.

use async_trait::async_trait;
use tickstat_core::{PriceSeries, PriceSource, TickerUniverse, TickstatError};

mod fixtures;

/// Mock source backed by static fixtures.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Stable source name used in logs and errors.
    pub const NAME: &'static str = "tickstat-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), TickstatError> {
        if symbol == "FAIL" {
            return Err(TickstatError::upstream(
                Self::NAME,
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PriceSource for MockSource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn history(
        &self,
        ticker: &str,
        _window_minutes: u32,
    ) -> Result<PriceSeries, TickstatError> {
        Self::maybe_fail(ticker, "history")?;
        if ticker == "EMPTY" {
            return Ok(PriceSeries::empty());
        }
        fixtures::history::by_symbol(ticker)
            .ok_or_else(|| TickstatError::not_found(format!("price history for {ticker}")))
    }

    async fn universe(&self) -> Result<TickerUniverse, TickstatError> {
        Ok(fixtures::universe::listing())
    }
}
