//! Upstream event shapes: precomputed moving averages, strategy signals,
//! and executed trades.
//!
//! These arrive alongside the bar feed and are consumed as-is; the engine
//! derives markers and legend text from them but never mutates them.

use serde::Deserialize;

/// One point of a server-precomputed moving-average line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaPoint {
    pub time: String,
    pub value: f64,
}

/// Strategy signal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalKind {
    Buy,
    Sell,
    Hold,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Buy => "BUY",
            SignalKind::Sell => "SELL",
            SignalKind::Hold => "HOLD",
        }
    }
}

/// One strategy signal event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Signal {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: SignalKind,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Side of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

/// One executed trade event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trade {
    pub time: String,
    pub side: TradeSide,
    pub price: f64,
    #[serde(default)]
    pub qty: Option<f64>,
}
