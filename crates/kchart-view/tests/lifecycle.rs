//! Lifecycle scenarios for the multi-pane chart view.

use kchart_core::{Bar, MaPoint, Signal, SignalKind};
use kchart_surface::{FixedRegion, MarkerPosition, MarkerShape};
use kchart_view::{ChartInputs, ChartView, MaLines, ViewEvent, ViewOptions, ViewPhase};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn make_bars(n: usize) -> Vec<Bar> {
    (0..n)
        .map(|i| {
            let base = 100.0 + (i as f64) * 0.5 + ((i % 7) as f64) * 0.2;
            Bar::new(
                format!("2024-{:02}-{:02}", i / 28 + 1, i % 28 + 1),
                base,
                base + 1.0,
                base - 1.0,
                base + 0.4,
            )
            .with_volume(1000.0 + i as f64)
        })
        .collect()
}

fn ma_from_bars(bars: &[Bar], period: usize) -> Vec<MaPoint> {
    bars.windows(period)
        .map(|w| MaPoint {
            time: w[period - 1].time.clone(),
            value: w.iter().map(|b| b.close).sum::<f64>() / period as f64,
        })
        .collect()
}

fn full_inputs(n: usize) -> ChartInputs {
    let bars = make_bars(n);
    let ma = MaLines {
        ma5: ma_from_bars(&bars, 5),
        ma10: ma_from_bars(&bars, 10),
        ma20: ma_from_bars(&bars, 20),
        ma30: ma_from_bars(&bars, 30),
        ma60: ma_from_bars(&bars, 60),
    };
    ChartInputs {
        bars,
        ma,
        ..ChartInputs::default()
    }
}

#[test]
fn mount_with_empty_bars_creates_no_panes() {
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    view.mount(ChartInputs::default());
    assert_eq!(view.phase(), ViewPhase::Mounted);
    assert_eq!(view.pane_count(), 0);
    assert_eq!(view.resize_subscriptions(), 0);
}

#[test]
fn full_history_mounts_three_panes() {
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    view.mount(full_inputs(80));

    assert_eq!(view.pane_count(), 3);
    assert!(view.kdj_pane().is_some());
    assert!(view.macd_pane().is_some());
    assert_eq!(view.resize_subscriptions(), 3);

    let primary = view.primary_pane().unwrap();
    // Volume histogram on the primary pane; five MA lines (full set, all
    // arrays long enough to be non-empty at 80 bars).
    assert_eq!(primary.histogram_series_count(), 1);
    assert_eq!(primary.line_series_count(), 5);

    // KDJ pane carries K, D, J; MACD pane carries DIFF, DEA plus the
    // histogram.
    assert_eq!(view.kdj_pane().unwrap().line_series_count(), 3);
    assert_eq!(view.macd_pane().unwrap().line_series_count(), 2);
    assert_eq!(view.macd_pane().unwrap().histogram_series_count(), 1);
}

#[test]
fn bars_without_volume_create_no_histogram() {
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    let bars: Vec<Bar> = (0..80)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.5;
            Bar::new(
                format!("2024-{:02}-{:02}", i / 28 + 1, i % 28 + 1),
                base,
                base + 1.0,
                base - 1.0,
                base + 0.4,
            )
        })
        .collect();
    view.mount(ChartInputs {
        bars,
        ..ChartInputs::default()
    });

    let primary = view.primary_pane().unwrap();
    assert_eq!(primary.histogram_series_count(), 0);
    // The sub-panes are unaffected by missing volume.
    assert_eq!(view.pane_count(), 3);
}

#[test]
fn show_flags_suppress_sub_panes() {
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    let mut inputs = full_inputs(80);
    inputs.options = ViewOptions {
        show_kdj: false,
        show_macd: false,
        ..ViewOptions::default()
    };
    view.mount(inputs);
    assert_eq!(view.pane_count(), 1);
    assert_eq!(view.resize_subscriptions(), 1);
}

#[test]
fn short_history_skips_macd_but_keeps_kdj() {
    // 20 bars clear the 9-bar stochastic warm-up but not the 35 bars the
    // trend oscillator needs.
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    view.mount(full_inputs(20));
    assert_eq!(view.pane_count(), 2);
    assert!(view.kdj_pane().is_some());
    assert!(view.macd_pane().is_none());
}

#[test]
fn set_inputs_rebuilds_from_new_snapshot() {
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    view.mount(full_inputs(80));
    let candles = view.primary_candle_series().unwrap();
    let before = view.primary_pane().unwrap().candle_data(candles).unwrap().len();
    assert_eq!(before, 80);

    view.set_inputs(full_inputs(40));
    let candles = view.primary_candle_series().unwrap();
    let after = view.primary_pane().unwrap().candle_data(candles).unwrap().len();
    assert_eq!(after, 40);
    // Subscriptions match the live pane count after the rebuild.
    assert_eq!(view.resize_subscriptions(), view.pane_count());
}

#[test]
fn queued_snapshots_coalesce_to_the_latest() {
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    view.mount(full_inputs(80));

    view.enqueue(ViewEvent::InputsChanged(full_inputs(10)));
    view.enqueue(ViewEvent::InputsChanged(full_inputs(50)));
    view.pump();

    let candles = view.primary_candle_series().unwrap();
    let len = view.primary_pane().unwrap().candle_data(candles).unwrap().len();
    assert_eq!(len, 50);
}

#[test]
fn resize_applies_region_width_to_all_panes() {
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    view.mount(full_inputs(80));
    assert_eq!(view.primary_pane().unwrap().width(), 800);

    view.region_mut().width = 1200;
    view.handle_viewport_resize();

    assert_eq!(view.primary_pane().unwrap().width(), 1200);
    assert_eq!(view.kdj_pane().unwrap().width(), 1200);
    assert_eq!(view.macd_pane().unwrap().width(), 1200);
}

#[test]
fn unmount_is_idempotent_and_releases_tokens() {
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    view.mount(full_inputs(80));
    assert_eq!(view.resize_subscriptions(), 3);

    view.unmount();
    assert_eq!(view.phase(), ViewPhase::Disposed);
    assert_eq!(view.pane_count(), 0);
    assert_eq!(view.resize_subscriptions(), 0);

    view.unmount();
    assert_eq!(view.phase(), ViewPhase::Disposed);
    assert_eq!(view.resize_subscriptions(), 0);
}

#[test]
fn disposed_view_ignores_further_events() {
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    view.mount(full_inputs(80));
    view.unmount();

    view.set_inputs(full_inputs(40));
    assert_eq!(view.pane_count(), 0);
    assert_eq!(view.phase(), ViewPhase::Disposed);
}

#[test]
fn detached_region_teardown_is_silent() {
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    view.mount(full_inputs(80));

    view.region_mut().attached = false;
    view.unmount();
    assert_eq!(view.resize_subscriptions(), 0);
    assert_eq!(view.pane_count(), 0);
}

#[test]
fn single_buy_signal_becomes_one_marker() {
    init_logs();
    let mut view = ChartView::new(FixedRegion::new(800));
    let mut inputs = full_inputs(80);
    inputs.signals = vec![Signal {
        date: "2024-02-10".into(),
        kind: SignalKind::Buy,
        price: Some(105.0),
    }];
    view.mount(inputs);

    let candles = view.primary_candle_series().unwrap();
    let markers = view.primary_pane().unwrap().markers(candles).unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].time, "2024-02-10");
    assert_eq!(markers[0].position, MarkerPosition::BelowBar);
    assert_eq!(markers[0].shape, MarkerShape::ArrowUp);
    assert_eq!(markers[0].text, "BUY");
}
