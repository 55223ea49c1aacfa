//! OHLCV bar data.

use serde::Deserialize;

use crate::time::normalize_date;

/// One OHLCV sample for a fixed time bucket (day/week/month).
///
/// Bars arrive from the upstream feed sorted ascending by `time` with unique
/// times; the engine neither re-sorts nor deduplicates them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bar {
    /// Calendar date string, possibly carrying a time-of-day suffix that the
    /// engine truncates away wherever the bar crosses into a series.
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<f64>,
}

impl Bar {
    pub fn new(time: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time: time.into(),
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Date-only form of the bar time.
    pub fn date(&self) -> &str {
        normalize_date(&self.time)
    }

    /// Whether this bar closed at or above its open.
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}
