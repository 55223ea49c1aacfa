//! Chart surface composition: themed panes, typed series handles, and
//! event-derived markers.
//!
//! A [`Pane`] is one drawable chart surface bound to an embedder-owned
//! [`DisplayRegion`]. Series are attached through typed handles and loaded
//! with full-replace semantics; markers are derived from upstream signal and
//! trade events and attached to the candlestick series.

pub mod marker;
pub mod options;
pub mod pane;
pub mod region;
pub mod series;
pub mod theme;

pub use marker::{
    bind_signal_markers, bind_trade_markers, signal_markers, trade_markers, Marker,
    MarkerPosition, MarkerShape,
};
pub use options::{PaneOptions, ScaleMargins};
pub use pane::{CandleSeriesId, HistogramSeriesId, LineSeriesId, Pane};
pub use region::{DisplayRegion, FixedRegion};
pub use series::{
    candle_points, indicator_line_points, ma_line_points, signed_histogram_points, volume_points,
    CandlePoint, HistogramPoint, LinePoint,
};
