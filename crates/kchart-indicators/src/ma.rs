//! Simple moving average.
//!
//! The upstream service usually precomputes MA lines alongside the bar
//! feed; this local fallback covers fetches that omit them.

use kchart_core::{Bar, SuffixSeries};

use crate::indicator::{Indicator, IndicatorConfig};

/// Simple moving average configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmaConfig {
    /// Averaging window (default: 5).
    pub period: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self { period: 5 }
    }
}

impl IndicatorConfig for SmaConfig {}

/// Simple moving average over closes.
pub struct Sma {
    config: SmaConfig,
}

impl Indicator for Sma {
    type Config = SmaConfig;
    type Output = SuffixSeries<f64>;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    /// Output length is `bars.len() - period + 1`; no output when
    /// `bars.len() < period`.
    fn calculate(&self, bars: &[Bar]) -> SuffixSeries<f64> {
        let period = self.config.period;
        if period == 0 || bars.len() < period {
            return SuffixSeries::new();
        }

        let start = period - 1;
        let mut values = Vec::with_capacity(bars.len() - start);
        let mut sum: f64 = bars[..period].iter().map(|b| b.close).sum();
        values.push(sum / period as f64);

        for i in period..bars.len() {
            sum += bars[i].close - bars[i - period].close;
            values.push(sum / period as f64);
        }

        SuffixSeries::from_values(values, start)
    }

    fn min_periods(&self) -> usize {
        self.config.period
    }

    fn is_overlay(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "MA"
    }
}
