//! Fixed dark theme.

/// Primary pane background.
pub const BACKGROUND: &str = "#111827";
/// Oscillator sub-pane background.
pub const SUB_PANE_BACKGROUND: &str = "#0f172a";
/// Grid lines and axis borders.
pub const GRID_LINE: &str = "#1f2937";
/// Axis label text.
pub const TEXT: &str = "#9ca3af";

/// Rising candles, BUY markers.
pub const UP: &str = "#10b981";
/// Falling candles, SELL markers.
pub const DOWN: &str = "#ef4444";
/// HOLD markers.
pub const HOLD: &str = "#3b82f6";
/// Rising volume / positive histogram bars.
pub const UP_TRANSLUCENT: &str = "rgba(16,185,129,0.5)";
/// Falling volume / negative histogram bars.
pub const DOWN_TRANSLUCENT: &str = "rgba(239,68,68,0.5)";

// Moving-average palette.
pub const MA5: &str = "#f59e0b";
pub const MA10: &str = "#8b5cf6";
pub const MA20: &str = "#3b82f6";
pub const MA30: &str = "#06b6d4";
pub const MA60: &str = "#ec4899";

// Oscillator lines.
pub const KDJ_K: &str = "#f59e0b";
pub const KDJ_D: &str = "#3b82f6";
pub const KDJ_J: &str = "#10b981";
pub const MACD_DIFF: &str = "#8b5cf6";
pub const MACD_DEA: &str = "#06b6d4";
