//! Indicator framework: pure functions from bar sequences to derived series.
//!
//! Every indicator maps a bar slice to one or more [`SuffixSeries`] values
//! aligned with the bar domain. Empty or too-short input yields empty
//! output; nothing here errors. Non-finite input propagates into the output
//! and is filtered by the series binder before rendering.
//!
//! [`SuffixSeries`]: kchart_core::SuffixSeries

pub mod indicator;
pub mod kdj;
pub mod ma;
pub mod macd;

pub use indicator::{Indicator, IndicatorConfig};
pub use kdj::{Kdj, KdjConfig, KdjOutput};
pub use ma::{Sma, SmaConfig};
pub use macd::{Macd, MacdConfig, MacdOutput};
