//! The chart view: pane composition, synchronization, and lifecycle.
//!
//! A [`ChartView`] owns its display region and every pane built on it. All
//! panes are siblings derived from one input snapshot; any change disposes
//! the whole set and rebuilds it from the latest snapshot, so the panes can
//! never disagree about what they show.

use log::{debug, warn};

use kchart_config::MaSet;
use kchart_indicators::{Indicator, Kdj, KdjConfig, Macd, MacdConfig};
use kchart_surface::{
    bind_signal_markers, bind_trade_markers, candle_points, indicator_line_points, ma_line_points,
    signed_histogram_points, theme, volume_points, CandleSeriesId, DisplayRegion, Pane,
    PaneOptions, ScaleMargins,
};

use crate::events::{ViewEvent, ViewEventBus};
use crate::inputs::ChartInputs;
use crate::resize::{ResizeHub, ResizeToken};

/// Lifecycle phase of a view. One-way: a disposed view never remounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Unmounted,
    Mounted,
    Disposed,
}

/// One pane plus its resize subscription.
struct ChartInstance {
    pane: Pane,
    candle_series: Option<CandleSeriesId>,
    token: Option<ResizeToken>,
}

struct MountedView {
    primary: ChartInstance,
    kdj: Option<ChartInstance>,
    macd: Option<ChartInstance>,
}

impl MountedView {
    fn into_instances(self) -> impl Iterator<Item = ChartInstance> {
        std::iter::once(self.primary)
            .chain(self.kdj)
            .chain(self.macd)
    }

    fn instances_mut(&mut self) -> impl Iterator<Item = &mut ChartInstance> {
        std::iter::once(&mut self.primary)
            .chain(self.kdj.as_mut())
            .chain(self.macd.as_mut())
    }

    fn pane_count(&self) -> usize {
        1 + usize::from(self.kdj.is_some()) + usize::from(self.macd.is_some())
    }
}

/// A multi-pane chart bound to one display region.
pub struct ChartView<R: DisplayRegion> {
    region: R,
    bus: ViewEventBus,
    hub: ResizeHub,
    inputs: ChartInputs,
    kdj_config: KdjConfig,
    macd_config: MacdConfig,
    mounted: Option<MountedView>,
    phase: ViewPhase,
}

impl<R: DisplayRegion> ChartView<R> {
    /// Creates an unmounted view over `region` with default indicator
    /// parameters.
    pub fn new(region: R) -> Self {
        Self::with_configs(region, KdjConfig::default(), MacdConfig::default())
    }

    pub fn with_configs(region: R, kdj_config: KdjConfig, macd_config: MacdConfig) -> Self {
        Self {
            region,
            bus: ViewEventBus::new(),
            hub: ResizeHub::new(),
            inputs: ChartInputs::default(),
            kdj_config,
            macd_config,
            mounted: None,
            phase: ViewPhase::Unmounted,
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn inputs(&self) -> &ChartInputs {
        &self.inputs
    }

    pub fn region_mut(&mut self) -> &mut R {
        &mut self.region
    }

    /// Number of live panes.
    pub fn pane_count(&self) -> usize {
        self.mounted.as_ref().map_or(0, MountedView::pane_count)
    }

    pub fn primary_pane(&self) -> Option<&Pane> {
        self.mounted.as_ref().map(|m| &m.primary.pane)
    }

    pub fn primary_candle_series(&self) -> Option<CandleSeriesId> {
        self.mounted.as_ref().and_then(|m| m.primary.candle_series)
    }

    pub fn kdj_pane(&self) -> Option<&Pane> {
        self.mounted.as_ref().and_then(|m| m.kdj.as_ref()).map(|i| &i.pane)
    }

    pub fn macd_pane(&self) -> Option<&Pane> {
        self.mounted
            .as_ref()
            .and_then(|m| m.macd.as_ref())
            .map(|i| &i.pane)
    }

    /// Live resize subscriptions. Zero after dispose.
    pub fn resize_subscriptions(&self) -> usize {
        self.hub.active_count()
    }

    /// Mounts the view with an initial snapshot. Empty bars leave the view
    /// mounted but pane-less.
    pub fn mount(&mut self, inputs: ChartInputs) {
        match self.phase {
            ViewPhase::Disposed => {
                warn!("mount on a disposed view, ignoring");
            }
            ViewPhase::Unmounted | ViewPhase::Mounted => {
                self.inputs = inputs;
                self.phase = ViewPhase::Mounted;
                self.rebuild();
            }
        }
    }

    /// Replaces the input snapshot, rebuilding all panes.
    pub fn set_inputs(&mut self, inputs: ChartInputs) {
        self.enqueue(ViewEvent::InputsChanged(inputs));
        self.pump();
    }

    /// Notifies the view that the region's width changed.
    pub fn handle_viewport_resize(&mut self) {
        self.enqueue(ViewEvent::ViewportResized);
        self.pump();
    }

    /// Queues an event without processing it. Call [`pump`](Self::pump) to
    /// apply the whole batch at once; consecutive snapshots coalesce so only
    /// the latest is built.
    pub fn enqueue(&mut self, event: ViewEvent) {
        self.bus.emit(event);
    }

    /// Drains and applies all queued events.
    pub fn pump(&mut self) {
        let batch = self.bus.drain();
        if self.phase == ViewPhase::Disposed {
            debug!("events after dispose, dropping batch");
            return;
        }
        if batch.unmount {
            if let Some(inputs) = batch.inputs {
                self.inputs = inputs;
            }
            self.unmount();
            return;
        }
        if let Some(inputs) = batch.inputs {
            self.inputs = inputs;
            if self.phase == ViewPhase::Mounted {
                self.rebuild();
            }
        }
        if batch.resized && self.phase == ViewPhase::Mounted {
            self.apply_resize();
        }
    }

    /// Tears down every pane and retires the view. Idempotent.
    pub fn unmount(&mut self) {
        self.dispose_mounted();
        self.bus.clear();
        self.phase = ViewPhase::Disposed;
    }

    fn rebuild(&mut self) {
        self.dispose_mounted();
        if self.inputs.bars.is_empty() {
            debug!("no bars in snapshot, skipping pane creation");
            return;
        }
        let primary = self.build_primary();
        let kdj = if self.inputs.options.show_kdj {
            self.build_kdj()
        } else {
            None
        };
        let macd = if self.inputs.options.show_macd {
            self.build_macd()
        } else {
            None
        };
        let mounted = MountedView { primary, kdj, macd };
        debug!("view rebuilt with {} pane(s)", mounted.pane_count());
        self.mounted = Some(mounted);
    }

    fn build_primary(&mut self) -> ChartInstance {
        let options = PaneOptions::primary(self.inputs.options.height);
        let mut pane = Pane::create(&self.region, &options);

        let candles = pane.add_candlestick_series();
        pane.set_candles(candles, candle_points(&self.inputs.bars));

        if self.inputs.bars.iter().any(|b| b.volume.is_some()) {
            let volume =
                pane.add_histogram_series(theme::UP_TRANSLUCENT, ScaleMargins::new(0.75, 0.0));
            pane.set_histogram_data(volume, volume_points(&self.inputs.bars));
        }

        for (points, color, title) in self.selected_ma_lines() {
            if !points.is_empty() {
                let id = pane.add_line_series(color, title);
                pane.set_line_data(id, ma_line_points(points));
            }
        }

        bind_signal_markers(&mut pane, candles, &self.inputs.signals);
        bind_trade_markers(&mut pane, candles, &self.inputs.trades);

        ChartInstance {
            pane,
            candle_series: Some(candles),
            token: Some(self.hub.register()),
        }
    }

    fn selected_ma_lines(&self) -> Vec<(&[kchart_core::MaPoint], &'static str, &'static str)> {
        let ma = &self.inputs.ma;
        let mut lines = vec![
            (ma.ma5.as_slice(), theme::MA5, "MA5"),
            (ma.ma10.as_slice(), theme::MA10, "MA10"),
            (ma.ma20.as_slice(), theme::MA20, "MA20"),
        ];
        if self.inputs.options.ma_set == MaSet::Full {
            lines.push((ma.ma30.as_slice(), theme::MA30, "MA30"));
            lines.push((ma.ma60.as_slice(), theme::MA60, "MA60"));
        }
        lines
    }

    fn build_kdj(&mut self) -> Option<ChartInstance> {
        let output = Kdj::new(self.kdj_config.clone()).calculate(&self.inputs.bars);
        if output.k.is_empty() {
            return None;
        }
        let options = PaneOptions::sub_pane(self.inputs.options.sub_pane_height);
        let mut pane = Pane::create(&self.region, &options);
        for (series, color, title) in [
            (&output.k, theme::KDJ_K, "K"),
            (&output.d, theme::KDJ_D, "D"),
            (&output.j, theme::KDJ_J, "J"),
        ] {
            let id = pane.add_line_series(color, title);
            pane.set_line_data(id, indicator_line_points(series, &self.inputs.bars));
        }
        Some(ChartInstance {
            pane,
            candle_series: None,
            token: Some(self.hub.register()),
        })
    }

    fn build_macd(&mut self) -> Option<ChartInstance> {
        let output = Macd::new(self.macd_config.clone()).calculate(&self.inputs.bars);
        if output.diff.is_empty() {
            return None;
        }
        let options = PaneOptions::sub_pane(self.inputs.options.sub_pane_height);
        let mut pane = Pane::create(&self.region, &options);

        let diff = pane.add_line_series(theme::MACD_DIFF, "DIFF");
        pane.set_line_data(diff, indicator_line_points(&output.diff, &self.inputs.bars));
        let dea = pane.add_line_series(theme::MACD_DEA, "DEA");
        pane.set_line_data(dea, indicator_line_points(&output.dea, &self.inputs.bars));

        let histogram =
            pane.add_histogram_series(theme::UP_TRANSLUCENT, ScaleMargins::new(0.6, 0.0));
        pane.set_histogram_data(
            histogram,
            signed_histogram_points(&output.histogram, &self.inputs.bars),
        );

        Some(ChartInstance {
            pane,
            candle_series: None,
            token: Some(self.hub.register()),
        })
    }

    fn apply_resize(&mut self) {
        let width = self.region.width();
        if let Some(mounted) = self.mounted.as_mut() {
            for instance in mounted.instances_mut() {
                instance.pane.apply_width(width);
            }
        }
    }

    fn dispose_mounted(&mut self) {
        let Some(mounted) = self.mounted.take() else {
            return;
        };
        let attached = self.region.is_attached();
        for instance in mounted.into_instances() {
            if let Some(token) = instance.token {
                self.hub.release(token);
            }
            if attached {
                instance.pane.remove();
            } else {
                debug!("region detached, dropping pane without display teardown");
            }
        }
    }
}

impl<R: DisplayRegion> Drop for ChartView<R> {
    fn drop(&mut self) {
        self.dispose_mounted();
    }
}
