//! Pane creation options.

use crate::theme;

/// Fraction of the pane height reserved above and below a price scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMargins {
    pub top: f64,
    pub bottom: f64,
}

impl ScaleMargins {
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Options for creating a pane.
///
/// The visual theme is fixed; only geometry and the layout colors are
/// configurable. `width: None` resolves to the display region's current
/// width at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneOptions {
    pub width: Option<u32>,
    pub height: u32,
    pub background: String,
    pub text_color: String,
    /// Margins of the right-hand price scale. The top and bottom reserve
    /// room for auxiliary series such as volume.
    pub right_scale_margins: ScaleMargins,
}

impl Default for PaneOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: 400,
            background: theme::BACKGROUND.to_string(),
            text_color: theme::TEXT.to_string(),
            right_scale_margins: ScaleMargins::new(0.08, 0.2),
        }
    }
}

impl PaneOptions {
    /// Primary price pane with the given height.
    pub fn primary(height: u32) -> Self {
        Self {
            height,
            right_scale_margins: ScaleMargins::new(0.08, 0.25),
            ..Self::default()
        }
    }

    /// Oscillator sub-pane: darker background, symmetric scale margins.
    pub fn sub_pane(height: u32) -> Self {
        Self {
            height,
            background: theme::SUB_PANE_BACKGROUND.to_string(),
            right_scale_margins: ScaleMargins::new(0.1, 0.1),
            ..Self::default()
        }
    }
}
