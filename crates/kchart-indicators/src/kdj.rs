//! KDJ stochastic oscillator (3-line: K, D, J).

use kchart_core::{Bar, SuffixSeries};

use crate::indicator::{Indicator, IndicatorConfig};

/// KDJ configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdjConfig {
    /// Lookback window for the raw stochastic value (default: 9).
    pub n: usize,
    /// Smoothing factor for K (default: 3).
    pub m1: usize,
    /// Smoothing factor for D (default: 3).
    pub m2: usize,
}

impl Default for KdjConfig {
    fn default() -> Self {
        Self { n: 9, m1: 3, m2: 3 }
    }
}

impl IndicatorConfig for KdjConfig {}

/// KDJ output. All three series share the same suffix alignment: one point
/// per bar from index `n - 1` onward.
#[derive(Debug, Clone, PartialEq)]
pub struct KdjOutput {
    pub k: SuffixSeries<f64>,
    pub d: SuffixSeries<f64>,
    pub j: SuffixSeries<f64>,
}

impl KdjOutput {
    fn empty() -> Self {
        Self {
            k: SuffixSeries::new(),
            d: SuffixSeries::new(),
            j: SuffixSeries::new(),
        }
    }
}

/// KDJ stochastic oscillator.
pub struct Kdj {
    config: KdjConfig,
}

impl Indicator for Kdj {
    type Config = KdjConfig;
    type Output = KdjOutput;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    /// Output length is `bars.len() - n + 1`; no output when `bars.len() < n`.
    fn calculate(&self, bars: &[Bar]) -> KdjOutput {
        let KdjConfig { n, m1, m2 } = self.config;
        if n == 0 || m1 == 0 || m2 == 0 || bars.len() < n {
            return KdjOutput::empty();
        }

        let start = n - 1;
        let count = bars.len() - start;
        let mut k_values = Vec::with_capacity(count);
        let mut d_values = Vec::with_capacity(count);
        let mut j_values = Vec::with_capacity(count);

        // Recurrence seeded at the midpoint before the first window.
        let mut k = 50.0;
        let mut d = 50.0;

        for i in start..bars.len() {
            let window = &bars[i + 1 - n..=i];
            let low_n = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
            let high_n = window
                .iter()
                .map(|b| b.high)
                .fold(f64::NEG_INFINITY, f64::max);

            // A flat window has no range to normalize against; the raw
            // stochastic value defaults to the midpoint.
            let rsv = if high_n > low_n {
                (bars[i].close - low_n) / (high_n - low_n) * 100.0
            } else {
                50.0
            };

            k = (k * (m1 as f64 - 1.0) + rsv) / m1 as f64;
            d = (d * (m2 as f64 - 1.0) + k) / m2 as f64;

            k_values.push(k);
            d_values.push(d);
            j_values.push(3.0 * k - 2.0 * d);
        }

        KdjOutput {
            k: SuffixSeries::from_values(k_values, start),
            d: SuffixSeries::from_values(d_values, start),
            j: SuffixSeries::from_values(j_values, start),
        }
    }

    fn min_periods(&self) -> usize {
        self.config.n
    }

    fn is_overlay(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "KDJ"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_bars(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                Bar::new(
                    format!("2024-01-{:02}", i + 1),
                    close,
                    close + 1.0,
                    close - 1.0,
                    close,
                )
            })
            .collect()
    }

    #[test]
    fn output_length_and_alignment() {
        let bars = make_bars(&(0..20).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let output = Kdj::new(KdjConfig::default()).calculate(&bars);

        assert_eq!(output.k.len(), 12); // 20 - 9 + 1
        assert_eq!(output.k.start_index(), 8);
        assert_eq!(output.d.start_index(), 8);
        assert_eq!(output.j.start_index(), 8);
    }

    #[test]
    fn too_few_bars_yields_empty_output() {
        let bars = make_bars(&[1.0, 2.0, 3.0]);
        let output = Kdj::new(KdjConfig::default()).calculate(&bars);
        assert!(output.k.is_empty());
        assert!(output.d.is_empty());
        assert!(output.j.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let output = Kdj::new(KdjConfig::default()).calculate(&[]);
        assert!(output.k.is_empty());
    }

    #[test]
    fn j_identity_holds_exactly() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let bars = make_bars(&closes);
        let output = Kdj::new(KdjConfig::default()).calculate(&bars);

        assert!(!output.j.is_empty());
        for i in 0..output.j.len() {
            let k = output.k.values()[i];
            let d = output.d.values()[i];
            let j = output.j.values()[i];
            assert_eq!(j, 3.0 * k - 2.0 * d);
        }
    }

    #[test]
    fn flat_windows_pin_kdj_at_midpoint() {
        // Constant price, and high == low on every bar: every window is
        // degenerate, RSV defaults to 50, and the recurrence never moves.
        let bars: Vec<Bar> = (0..20)
            .map(|i| Bar::new(format!("2024-01-{:02}", i + 1), 100.0, 100.0, 100.0, 100.0))
            .collect();
        let output = Kdj::new(KdjConfig::default()).calculate(&bars);

        assert_eq!(output.k.len(), 12);
        for i in 0..output.k.len() {
            assert_eq!(output.k.values()[i], 50.0);
            assert_eq!(output.d.values()[i], 50.0);
            assert_eq!(output.j.values()[i], 50.0);
        }
    }

    #[test]
    fn determinism() {
        let closes: Vec<f64> = (0..30).map(|i| 50.0 + (i as f64 * 1.3).cos() * 3.0).collect();
        let bars = make_bars(&closes);
        let kdj = Kdj::new(KdjConfig::default());
        let a = kdj.calculate(&bars);
        let b = kdj.calculate(&bars);
        assert_eq!(a, b);
    }

    #[test]
    fn min_periods_is_window_size() {
        assert_eq!(Kdj::new(KdjConfig::default()).min_periods(), 9);
        assert!(!Kdj::new(KdjConfig::default()).is_overlay());
    }
}
