//! Candlestick markers derived from signal and trade events.

use kchart_core::{normalize_date, Signal, SignalKind, Trade, TradeSide};

use crate::pane::{CandleSeriesId, Pane};
use crate::theme;

/// Vertical placement of a marker relative to its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPosition {
    AboveBar,
    BelowBar,
}

/// Glyph drawn for a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    ArrowUp,
    ArrowDown,
    Circle,
}

/// A marker anchored to one bar of a candlestick series.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub time: String,
    pub position: MarkerPosition,
    pub color: String,
    pub shape: MarkerShape,
    pub text: String,
}

/// Markers for advisory signals. BUY points up from below the bar, SELL
/// points down from above, HOLD is a circle above.
pub fn signal_markers(signals: &[Signal]) -> Vec<Marker> {
    signals
        .iter()
        .map(|s| {
            let (position, shape, color) = match s.kind {
                SignalKind::Buy => (MarkerPosition::BelowBar, MarkerShape::ArrowUp, theme::UP),
                SignalKind::Sell => (MarkerPosition::AboveBar, MarkerShape::ArrowDown, theme::DOWN),
                SignalKind::Hold => (MarkerPosition::AboveBar, MarkerShape::Circle, theme::HOLD),
            };
            Marker {
                time: normalize_date(&s.date).to_string(),
                position,
                color: color.to_string(),
                shape,
                text: s.kind.as_str().to_string(),
            }
        })
        .collect()
}

/// Markers for executed trades. The label carries the quantity when known.
pub fn trade_markers(trades: &[Trade]) -> Vec<Marker> {
    trades
        .iter()
        .map(|t| {
            let (position, shape, color) = match t.side {
                TradeSide::Buy => (MarkerPosition::BelowBar, MarkerShape::ArrowUp, theme::UP),
                TradeSide::Sell => (MarkerPosition::AboveBar, MarkerShape::ArrowDown, theme::DOWN),
            };
            let text = match t.qty {
                Some(qty) => format!("{} {}", t.side.as_str(), qty),
                None => t.side.as_str().to_string(),
            };
            Marker {
                time: normalize_date(&t.time).to_string(),
                position,
                color: color.to_string(),
                shape,
                text,
            }
        })
        .collect()
}

/// Derives signal markers and attaches them, leaving existing markers
/// untouched when `signals` is empty.
pub fn bind_signal_markers(pane: &mut Pane, id: CandleSeriesId, signals: &[Signal]) {
    let markers = signal_markers(signals);
    if !markers.is_empty() {
        pane.set_markers(id, markers);
    }
}

/// Derives trade markers and attaches them, leaving existing markers
/// untouched when `trades` is empty.
pub fn bind_trade_markers(pane: &mut Pane, id: CandleSeriesId, trades: &[Trade]) {
    let markers = trade_markers(trades);
    if !markers.is_empty() {
        pane.set_markers(id, markers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PaneOptions;
    use crate::region::FixedRegion;

    fn signal(date: &str, kind: SignalKind) -> Signal {
        Signal {
            date: date.to_string(),
            kind,
            price: None,
        }
    }

    #[test]
    fn buy_signal_marker_shape_and_color() {
        let markers = signal_markers(&[signal("2024-03-05T00:00:00Z", SignalKind::Buy)]);
        assert_eq!(markers.len(), 1);
        let m = &markers[0];
        assert_eq!(m.time, "2024-03-05");
        assert_eq!(m.position, MarkerPosition::BelowBar);
        assert_eq!(m.shape, MarkerShape::ArrowUp);
        assert_eq!(m.color, theme::UP);
        assert_eq!(m.text, "BUY");
    }

    #[test]
    fn hold_signal_is_a_circle_above() {
        let markers = signal_markers(&[signal("2024-03-06", SignalKind::Hold)]);
        let m = &markers[0];
        assert_eq!(m.position, MarkerPosition::AboveBar);
        assert_eq!(m.shape, MarkerShape::Circle);
        assert_eq!(m.color, theme::HOLD);
    }

    #[test]
    fn trade_marker_label_includes_quantity() {
        let trades = vec![
            Trade {
                time: "2024-03-05".into(),
                side: TradeSide::Buy,
                price: 10.0,
                qty: Some(100.0),
            },
            Trade {
                time: "2024-03-07".into(),
                side: TradeSide::Sell,
                price: 12.0,
                qty: None,
            },
        ];
        let markers = trade_markers(&trades);
        assert_eq!(markers[0].text, "BUY 100");
        assert_eq!(markers[1].text, "SELL");
        assert_eq!(markers[1].shape, MarkerShape::ArrowDown);
    }

    #[test]
    fn empty_signal_list_keeps_existing_markers() {
        let mut pane = Pane::create(&FixedRegion::new(800), &PaneOptions::primary(380));
        let id = pane.add_candlestick_series();
        bind_signal_markers(&mut pane, id, &[signal("2024-03-05", SignalKind::Buy)]);
        assert_eq!(pane.markers(id).unwrap().len(), 1);
        bind_signal_markers(&mut pane, id, &[]);
        assert_eq!(pane.markers(id).unwrap().len(), 1);
    }
}
