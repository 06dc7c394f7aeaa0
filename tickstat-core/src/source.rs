use async_trait::async_trait;

use crate::TickstatError;
use crate::types::{PriceSeries, TickerUniverse};

/// A provider of short-window price history and the ticker universe.
///
/// Implemented by the production REST connector, the caching wrapper, and
/// the mock source. Wrappers compose: anything accepting a `PriceSource`
/// accepts a wrapped one.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Stable name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fetch the price series for `ticker` over the trailing
    /// `window_minutes` minutes, sorted ascending by timestamp.
    async fn history(
        &self,
        ticker: &str,
        window_minutes: u32,
    ) -> Result<PriceSeries, TickstatError>;

    /// Fetch the full name-to-symbol listing of tradable instruments.
    async fn universe(&self) -> Result<TickerUniverse, TickstatError>;
}
