//! tickstat-core
//!
//! Core types, traits, and utilities shared across the tickstat ecosystem.
//!
//! - `types`: common data structures (price points, series, the ticker universe).
//! - `source`: the `PriceSource` trait implemented by connectors and wrappers.
//! - `stats`: pure windowed statistics (mean, deviation, covariance, Pearson).
//! - `align`: exact-timestamp intersection of two price series.
//! - `clock`: an injectable time source so caching and fallback synthesis are
//!   deterministic under test.
//!
//! Async runtime (Tokio)
//! ---------------------
//! Connector implementations are expected to run under a Tokio 1.x runtime;
//! this crate itself only defines the async trait surface via `async-trait`.
#![warn(missing_docs)]

/// Exact-timestamp alignment of two price series.
pub mod align;
/// Injectable wall-clock abstraction.
pub mod clock;
/// Cache configuration shared by source wrappers.
pub mod config;
/// Unified error type for the workspace.
pub mod error;
/// The `PriceSource` connector trait.
pub mod source;
/// Pure statistics over ordered numeric sequences.
pub mod stats;
pub mod types;

pub use align::{AlignedPair, align};
pub use clock::{Clock, SystemClock};
pub use config::CacheConfig;
pub use error::TickstatError;
pub use source::PriceSource;
pub use types::{PricePoint, PriceSeries, TickerUniverse};
