//! Legend text shown above the primary pane.

use kchart_config::MaSet;
use kchart_indicators::{Indicator, Kdj, KdjConfig, Macd, MacdConfig};

use crate::inputs::ChartInputs;

/// Latest-sample summary of everything the view draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    /// Short label of the bar granularity, e.g. `1d`.
    pub period: &'static str,
    /// Close of the last bar.
    pub close: Option<f64>,
    /// Latest value of each active, non-empty MA line, in display order.
    pub ma: Vec<(String, f64)>,
    /// Latest (K, D, J) sample, when the KDJ pane is active.
    pub kdj: Option<(f64, f64, f64)>,
    /// Latest (DIFF, DEA, histogram) sample, when the MACD pane is active.
    pub macd: Option<(f64, f64, f64)>,
}

impl Legend {
    /// Summarizes an input snapshot with the default indicator parameters.
    pub fn from_inputs(inputs: &ChartInputs) -> Self {
        Self::from_inputs_with(inputs, &KdjConfig::default(), &MacdConfig::default())
    }

    pub fn from_inputs_with(
        inputs: &ChartInputs,
        kdj_config: &KdjConfig,
        macd_config: &MacdConfig,
    ) -> Self {
        let close = inputs.bars.last().map(|b| b.close);

        let mut ma = Vec::new();
        let mut push = |title: &str, points: &[kchart_core::MaPoint]| {
            if let Some(last) = points.last() {
                ma.push((title.to_string(), last.value));
            }
        };
        push("MA5", &inputs.ma.ma5);
        push("MA10", &inputs.ma.ma10);
        push("MA20", &inputs.ma.ma20);
        if inputs.options.ma_set == MaSet::Full {
            push("MA30", &inputs.ma.ma30);
            push("MA60", &inputs.ma.ma60);
        }

        let kdj = if inputs.options.show_kdj {
            let out = Kdj::new(kdj_config.clone()).calculate(&inputs.bars);
            match (out.k.last(), out.d.last(), out.j.last()) {
                (Some(&k), Some(&d), Some(&j)) => Some((k, d, j)),
                _ => None,
            }
        } else {
            None
        };

        let macd = if inputs.options.show_macd {
            let out = Macd::new(macd_config.clone()).calculate(&inputs.bars);
            match (out.diff.last(), out.dea.last(), out.histogram.last()) {
                (Some(&diff), Some(&dea), Some(&hist)) => Some((diff, dea, hist)),
                _ => None,
            }
        } else {
            None
        };

        Self {
            period: inputs.period.label(),
            close,
            ma,
            kdj,
            macd,
        }
    }
}
