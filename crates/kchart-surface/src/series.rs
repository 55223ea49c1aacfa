//! Series point types and the builders that shape bar/indicator data into
//! them.

use kchart_core::{Bar, MaPoint, SuffixSeries};

use crate::theme;

/// One candlestick sample.
#[derive(Debug, Clone, PartialEq)]
pub struct CandlePoint {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// One line sample.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub time: String,
    pub value: f64,
}

/// One histogram bar. `color: None` falls back to the series base color.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramPoint {
    pub time: String,
    pub value: f64,
    pub color: Option<String>,
}

/// Candlestick points for a bar sequence.
pub fn candle_points(bars: &[Bar]) -> Vec<CandlePoint> {
    bars.iter()
        .map(|b| CandlePoint {
            time: b.time.clone(),
            open: b.open,
            high: b.high,
            low: b.low,
            close: b.close,
        })
        .collect()
}

/// Volume histogram points, colored by bar direction. Bars without volume
/// are skipped.
pub fn volume_points(bars: &[Bar]) -> Vec<HistogramPoint> {
    bars.iter()
        .filter_map(|b| {
            b.volume.map(|volume| HistogramPoint {
                time: b.time.clone(),
                value: volume,
                color: Some(direction_color(b.is_up()).to_string()),
            })
        })
        .collect()
}

/// Line points from a server-precomputed moving-average array.
pub fn ma_line_points(points: &[MaPoint]) -> Vec<LinePoint> {
    points
        .iter()
        .map(|p| LinePoint {
            time: p.time.clone(),
            value: p.value,
        })
        .collect()
}

/// Line points from an indicator series, timed by the bars it was derived
/// from.
pub fn indicator_line_points(series: &SuffixSeries<f64>, bars: &[Bar]) -> Vec<LinePoint> {
    series
        .iter_indexed()
        .filter_map(|(bar_index, &value)| {
            bars.get(bar_index).map(|b| LinePoint {
                time: b.time.clone(),
                value,
            })
        })
        .collect()
}

/// Histogram points from an indicator series, colored by sign.
pub fn signed_histogram_points(series: &SuffixSeries<f64>, bars: &[Bar]) -> Vec<HistogramPoint> {
    series
        .iter_indexed()
        .filter_map(|(bar_index, &value)| {
            bars.get(bar_index).map(|b| HistogramPoint {
                time: b.time.clone(),
                value,
                color: Some(direction_color(value >= 0.0).to_string()),
            })
        })
        .collect()
}

fn direction_color(up: bool) -> &'static str {
    if up {
        theme::UP_TRANSLUCENT
    } else {
        theme::DOWN_TRANSLUCENT
    }
}
