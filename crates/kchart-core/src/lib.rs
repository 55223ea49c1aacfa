//! Core types for the kchart engine.
//!
//! This crate provides the data primitives the rest of the workspace builds
//! on:
//! - `Bar` - OHLCV bar data as supplied by the upstream feed
//! - `Period` - bar bucket granularity
//! - `SuffixSeries` - suffix-aligned container for indicator output
//! - upstream event shapes (`MaPoint`, `Signal`, `Trade`)

pub mod bar;
pub mod feed;
pub mod period;
pub mod series;
pub mod time;

pub use bar::Bar;
pub use feed::{MaPoint, Signal, SignalKind, Trade, TradeSide};
pub use period::Period;
pub use series::SuffixSeries;
pub use time::normalize_date;
