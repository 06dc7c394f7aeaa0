//! tickstat
//!
//! Windowed stock statistics over a cached upstream price feed.
//!
//! The [`Tickstat`] service resolves short-window price history through a
//! TTL cache backed by the REST connector (or any injected
//! [`PriceSource`]), then derives two statistics:
//!
//! - the average price of one ticker over the trailing window, and
//! - the Pearson correlation between two tickers over the timestamps their
//!   series share.
//!
//! ```no_run
//! use tickstat::{Tickstat, TickstatConfig};
//! use url::Url;
//!
//! # async fn run() -> Result<(), tickstat::TickstatError> {
//! let service = Tickstat::builder()
//!     .with_config(TickstatConfig::new(Url::parse("http://upstream.example").unwrap()))
//!     .build()?;
//! let stats = service.average_and_history("AAPL", 30).await?;
//! println!("AAPL averaged {} over 30m", stats.average);
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

/// Service configuration, including environment loading.
pub mod config;
/// Caller-facing report types.
pub mod report;
/// The service struct, its builder, and the statistics operations.
pub mod service;

pub use config::{ENV_BASE_URL, ENV_CACHE_TTL, TickstatConfig};
pub use report::{CorrelationReport, TickerStats};
pub use service::{Tickstat, TickstatBuilder};

pub use tickstat_core::{
    CacheConfig, Clock, PricePoint, PriceSeries, PriceSource, SystemClock, TickerUniverse,
    TickstatError,
};
