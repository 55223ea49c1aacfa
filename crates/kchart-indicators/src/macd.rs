//! MACD trend-following oscillator (DIFF/DEA/histogram).

use kchart_core::{Bar, SuffixSeries};

use crate::indicator::{Indicator, IndicatorConfig};

/// MACD configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacdConfig {
    /// Fast EMA period (default: 12).
    pub fast_period: usize,
    /// Slow EMA period (default: 26).
    pub slow_period: usize,
    /// Signal line EMA period (default: 9).
    pub signal_period: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl IndicatorConfig for MacdConfig {}

/// MACD output. All three series share the same suffix alignment, starting
/// at bar index `slow_period - 1 + signal_period`.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput {
    /// Fast EMA minus slow EMA.
    pub diff: SuffixSeries<f64>,
    /// Signal line: EMA of DIFF.
    pub dea: SuffixSeries<f64>,
    /// `2 * (DIFF - DEA)`.
    pub histogram: SuffixSeries<f64>,
}

impl MacdOutput {
    fn empty() -> Self {
        Self {
            diff: SuffixSeries::new(),
            dea: SuffixSeries::new(),
            histogram: SuffixSeries::new(),
        }
    }
}

/// MACD trend-following oscillator.
pub struct Macd {
    config: MacdConfig,
}

impl Indicator for Macd {
    type Config = MacdConfig;
    type Output = MacdOutput;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    /// Output length is `bars.len() - (slow - 1 + signal)`; no output when
    /// the bar count does not reach the warm-up span.
    fn calculate(&self, bars: &[Bar]) -> MacdOutput {
        let MacdConfig {
            fast_period,
            slow_period,
            signal_period,
        } = self.config;
        if fast_period == 0 || slow_period == 0 || signal_period == 0 {
            return MacdOutput::empty();
        }

        let start = slow_period - 1 + signal_period;
        if bars.len() <= start {
            return MacdOutput::empty();
        }

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let ema_fast = ema_full(&closes, fast_period);
        let ema_slow = ema_full(&closes, slow_period);

        let diff_full: Vec<f64> = (0..closes.len())
            .map(|i| {
                if i >= slow_period - 1 {
                    ema_fast[i] - ema_slow[i]
                } else {
                    f64::NAN
                }
            })
            .collect();

        // The signal EMA runs over the full-length DIFF array with warm-up
        // slots substituted by zero. The zeros bias the seed average; the
        // upstream platform has always rendered it this way, so the bias is
        // replicated rather than corrected.
        let padded: Vec<f64> = diff_full
            .iter()
            .map(|d| if d.is_finite() { *d } else { 0.0 })
            .collect();
        let dea_full = ema_full(&padded, signal_period);

        let count = closes.len() - start;
        let mut diff = Vec::with_capacity(count);
        let mut dea = Vec::with_capacity(count);
        let mut histogram = Vec::with_capacity(count);

        for i in start..closes.len() {
            let d = diff_full[i];
            let s = dea_full[i];
            diff.push(d);
            dea.push(s);
            histogram.push(2.0 * (d - s));
        }

        MacdOutput {
            diff: SuffixSeries::from_values(diff, start),
            dea: SuffixSeries::from_values(dea, start),
            histogram: SuffixSeries::from_values(histogram, start),
        }
    }

    fn min_periods(&self) -> usize {
        self.config.slow_period + self.config.signal_period - 1
    }

    fn is_overlay(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

/// Exponential moving average over the full input length.
///
/// Positions before `period - 1` are NaN. The value at `period - 1` is the
/// simple average of the first `period` inputs; later values follow
/// `alpha * x[i] + (1 - alpha) * prev` with `alpha = 2 / (period + 1)`.
pub fn ema_full(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return vec![f64::NAN; values.len()];
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = 0.0;

    for (i, &value) in values.iter().enumerate() {
        if i < period - 1 {
            out.push(f64::NAN);
            continue;
        }
        if i == period - 1 {
            prev = values[..period].iter().sum::<f64>() / period as f64;
        } else {
            prev = alpha * value + (1.0 - alpha) * prev;
        }
        out.push(prev);
    }

    out
}
