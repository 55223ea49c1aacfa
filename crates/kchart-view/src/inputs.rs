//! Input snapshot a chart view renders from.

use kchart_config::{Config, MaSet};
use kchart_core::{Bar, MaPoint, Period, Signal, Trade};
use kchart_indicators::{Indicator, Sma, SmaConfig};

/// Precomputed moving-average lines, one array per period.
#[derive(Debug, Clone, Default)]
pub struct MaLines {
    pub ma5: Vec<MaPoint>,
    pub ma10: Vec<MaPoint>,
    pub ma20: Vec<MaPoint>,
    pub ma30: Vec<MaPoint>,
    pub ma60: Vec<MaPoint>,
}

impl MaLines {
    /// Computes all five lines locally, for feeds that omit them.
    pub fn from_bars(bars: &[Bar]) -> Self {
        let line = |period: usize| -> Vec<MaPoint> {
            Sma::new(SmaConfig { period })
                .calculate(bars)
                .iter_indexed()
                .filter_map(|(bar_index, &value)| {
                    bars.get(bar_index).map(|b| MaPoint {
                        time: b.time.clone(),
                        value,
                    })
                })
                .collect()
        };
        Self {
            ma5: line(5),
            ma10: line(10),
            ma20: line(20),
            ma30: line(30),
            ma60: line(60),
        }
    }
}

/// Display options for a chart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Primary pane height in pixels.
    pub height: u32,
    /// Height of each oscillator sub-pane.
    pub sub_pane_height: u32,
    /// Which MA lines the primary pane carries.
    pub ma_set: MaSet,
    pub show_kdj: bool,
    pub show_macd: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            height: 380,
            sub_pane_height: 140,
            ma_set: MaSet::Full,
            show_kdj: true,
            show_macd: true,
        }
    }
}

impl From<&Config> for ViewOptions {
    fn from(config: &Config) -> Self {
        Self {
            height: config.chart.height,
            sub_pane_height: config.chart.sub_pane_height,
            ma_set: config.chart.ma_set,
            show_kdj: config.chart.show_kdj,
            show_macd: config.chart.show_macd,
        }
    }
}

/// Everything a view needs to build its panes. Replaced wholesale on every
/// change; panes never mutate it.
#[derive(Debug, Clone, Default)]
pub struct ChartInputs {
    pub bars: Vec<Bar>,
    /// Granularity the bars were fetched at.
    pub period: Period,
    pub signals: Vec<Signal>,
    pub trades: Vec<Trade>,
    pub ma: MaLines,
    pub options: ViewOptions,
}
