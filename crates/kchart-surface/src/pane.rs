//! A pane is one drawable chart surface with typed series slots.

use std::sync::atomic::{AtomicUsize, Ordering};

use kchart_core::normalize_date;
use log::{debug, warn};

use crate::marker::Marker;
use crate::options::{PaneOptions, ScaleMargins};
use crate::region::DisplayRegion;
use crate::series::{CandlePoint, HistogramPoint, LinePoint};
use crate::theme;

static NEXT_PANE_ID: AtomicUsize = AtomicUsize::new(0);

/// Handle to a candlestick series on a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandleSeriesId {
    pane: usize,
    series: usize,
}

/// Handle to a line series on a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSeriesId {
    pane: usize,
    series: usize,
}

/// Handle to a histogram series on a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistogramSeriesId {
    pane: usize,
    series: usize,
}

#[derive(Debug)]
struct CandleSeries {
    id: usize,
    data: Vec<CandlePoint>,
    markers: Vec<Marker>,
}

#[derive(Debug)]
struct LineSeries {
    id: usize,
    color: String,
    title: String,
    data: Vec<LinePoint>,
}

#[derive(Debug)]
struct HistogramSeries {
    id: usize,
    base_color: String,
    scale_margins: ScaleMargins,
    data: Vec<HistogramPoint>,
}

/// One chart surface. Series are attached with typed handles and loaded
/// with full-replace semantics. Every handle carries the id of the pane
/// that issued it; a handle used against another pane is rejected with a
/// warning rather than an error.
#[derive(Debug)]
pub struct Pane {
    pane_id: usize,
    width: u32,
    height: u32,
    options: PaneOptions,
    next_id: usize,
    candles: Vec<CandleSeries>,
    lines: Vec<LineSeries>,
    histograms: Vec<HistogramSeries>,
}

impl Pane {
    /// Creates a pane bound to `region`. An explicit width in `options`
    /// wins; otherwise the region's current width is sampled once.
    pub fn create<R: DisplayRegion>(region: &R, options: &PaneOptions) -> Self {
        let width = options.width.unwrap_or_else(|| region.width());
        debug!(
            "pane created: {}x{} background {}",
            width, options.height, options.background
        );
        Self {
            pane_id: NEXT_PANE_ID.fetch_add(1, Ordering::Relaxed),
            width,
            height: options.height,
            options: options.clone(),
            next_id: 0,
            candles: Vec::new(),
            lines: Vec::new(),
            histograms: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn options(&self) -> &PaneOptions {
        &self.options
    }

    /// Resizes the pane to a new width, keeping its height.
    pub fn apply_width(&mut self, width: u32) {
        self.width = width;
    }

    fn take_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Attaches a candlestick series in the fixed up/down palette.
    pub fn add_candlestick_series(&mut self) -> CandleSeriesId {
        let id = self.take_id();
        self.candles.push(CandleSeries {
            id,
            data: Vec::new(),
            markers: Vec::new(),
        });
        CandleSeriesId {
            pane: self.pane_id,
            series: id,
        }
    }

    /// Attaches a line series with the given color and legend title.
    pub fn add_line_series(&mut self, color: &str, title: &str) -> LineSeriesId {
        let id = self.take_id();
        self.lines.push(LineSeries {
            id,
            color: color.to_string(),
            title: title.to_string(),
            data: Vec::new(),
        });
        LineSeriesId {
            pane: self.pane_id,
            series: id,
        }
    }

    /// Attaches a histogram series on its own scale.
    pub fn add_histogram_series(
        &mut self,
        base_color: &str,
        scale_margins: ScaleMargins,
    ) -> HistogramSeriesId {
        let id = self.take_id();
        self.histograms.push(HistogramSeries {
            id,
            base_color: base_color.to_string(),
            scale_margins,
            data: Vec::new(),
        });
        HistogramSeriesId {
            pane: self.pane_id,
            series: id,
        }
    }

    fn candle_slot_mut(&mut self, id: CandleSeriesId, op: &str) -> Option<&mut CandleSeries> {
        if id.pane != self.pane_id {
            warn!("{op}: handle from another pane, ignoring");
            return None;
        }
        let slot = self.candles.iter_mut().find(|s| s.id == id.series);
        if slot.is_none() {
            warn!("{op}: unknown series handle, ignoring");
        }
        slot
    }

    fn line_slot_mut(&mut self, id: LineSeriesId, op: &str) -> Option<&mut LineSeries> {
        if id.pane != self.pane_id {
            warn!("{op}: handle from another pane, ignoring");
            return None;
        }
        let slot = self.lines.iter_mut().find(|s| s.id == id.series);
        if slot.is_none() {
            warn!("{op}: unknown series handle, ignoring");
        }
        slot
    }

    fn histogram_slot_mut(
        &mut self,
        id: HistogramSeriesId,
        op: &str,
    ) -> Option<&mut HistogramSeries> {
        if id.pane != self.pane_id {
            warn!("{op}: handle from another pane, ignoring");
            return None;
        }
        let slot = self.histograms.iter_mut().find(|s| s.id == id.series);
        if slot.is_none() {
            warn!("{op}: unknown series handle, ignoring");
        }
        slot
    }

    fn candle_slot(&self, id: CandleSeriesId) -> Option<&CandleSeries> {
        if id.pane != self.pane_id {
            return None;
        }
        self.candles.iter().find(|s| s.id == id.series)
    }

    fn line_slot(&self, id: LineSeriesId) -> Option<&LineSeries> {
        if id.pane != self.pane_id {
            return None;
        }
        self.lines.iter().find(|s| s.id == id.series)
    }

    fn histogram_slot(&self, id: HistogramSeriesId) -> Option<&HistogramSeries> {
        if id.pane != self.pane_id {
            return None;
        }
        self.histograms.iter().find(|s| s.id == id.series)
    }

    /// Replaces the candle data. Times are normalized to day granularity
    /// and points with a non-finite price are dropped.
    pub fn set_candles(&mut self, id: CandleSeriesId, points: Vec<CandlePoint>) {
        let Some(series) = self.candle_slot_mut(id, "set_candles") else {
            return;
        };
        series.data = points
            .into_iter()
            .filter(|p| {
                p.open.is_finite() && p.high.is_finite() && p.low.is_finite() && p.close.is_finite()
            })
            .map(|mut p| {
                p.time = normalize_date(&p.time).to_string();
                p
            })
            .collect();
    }

    /// Replaces the line data, normalizing times and dropping non-finite
    /// values.
    pub fn set_line_data(&mut self, id: LineSeriesId, points: Vec<LinePoint>) {
        let Some(series) = self.line_slot_mut(id, "set_line_data") else {
            return;
        };
        series.data = points
            .into_iter()
            .filter(|p| p.value.is_finite())
            .map(|mut p| {
                p.time = normalize_date(&p.time).to_string();
                p
            })
            .collect();
    }

    /// Replaces the histogram data, normalizing times and dropping
    /// non-finite values.
    pub fn set_histogram_data(&mut self, id: HistogramSeriesId, points: Vec<HistogramPoint>) {
        let Some(series) = self.histogram_slot_mut(id, "set_histogram_data") else {
            return;
        };
        series.data = points
            .into_iter()
            .filter(|p| p.value.is_finite())
            .map(|mut p| {
                p.time = normalize_date(&p.time).to_string();
                p
            })
            .collect();
    }

    /// Replaces the markers attached to a candlestick series.
    pub fn set_markers(&mut self, id: CandleSeriesId, markers: Vec<Marker>) {
        let Some(series) = self.candle_slot_mut(id, "set_markers") else {
            return;
        };
        series.markers = markers
            .into_iter()
            .map(|mut m| {
                m.time = normalize_date(&m.time).to_string();
                m
            })
            .collect();
    }

    pub fn candle_data(&self, id: CandleSeriesId) -> Option<&[CandlePoint]> {
        self.candle_slot(id).map(|s| s.data.as_slice())
    }

    pub fn line_data(&self, id: LineSeriesId) -> Option<&[LinePoint]> {
        self.line_slot(id).map(|s| s.data.as_slice())
    }

    pub fn line_color(&self, id: LineSeriesId) -> Option<&str> {
        self.line_slot(id).map(|s| s.color.as_str())
    }

    pub fn line_title(&self, id: LineSeriesId) -> Option<&str> {
        self.line_slot(id).map(|s| s.title.as_str())
    }

    pub fn histogram_data(&self, id: HistogramSeriesId) -> Option<&[HistogramPoint]> {
        self.histogram_slot(id).map(|s| s.data.as_slice())
    }

    pub fn histogram_base_color(&self, id: HistogramSeriesId) -> Option<&str> {
        self.histogram_slot(id).map(|s| s.base_color.as_str())
    }

    pub fn histogram_scale_margins(&self, id: HistogramSeriesId) -> Option<ScaleMargins> {
        self.histogram_slot(id).map(|s| s.scale_margins)
    }

    pub fn markers(&self, id: CandleSeriesId) -> Option<&[Marker]> {
        self.candle_slot(id).map(|s| s.markers.as_slice())
    }

    pub fn line_series_count(&self) -> usize {
        self.lines.len()
    }

    pub fn histogram_series_count(&self) -> usize {
        self.histograms.len()
    }

    /// Candle up/down palette is fixed.
    pub fn candle_up_color(&self) -> &'static str {
        theme::UP
    }

    pub fn candle_down_color(&self) -> &'static str {
        theme::DOWN
    }

    pub fn grid_color(&self) -> &'static str {
        theme::GRID_LINE
    }

    /// Time-axis labels are day-granularity; intraday components are never
    /// shown.
    pub fn seconds_visible(&self) -> bool {
        false
    }

    /// Tears the pane down, releasing its series and markers.
    pub fn remove(self) {
        debug!(
            "pane removed: {} candle, {} line, {} histogram series",
            self.candles.len(),
            self.lines.len(),
            self.histograms.len()
        );
    }
}
