//! Multi-pane chart views with synchronized lifecycle.
//!
//! [`ChartView`] binds a primary candlestick pane and optional oscillator
//! sub-panes to one display region, rebuilding everything from scratch on
//! every input change so the panes always reflect a single snapshot.

pub mod events;
pub mod inputs;
pub mod legend;
pub mod resize;
pub mod view;

pub use events::{DrainedBatch, ViewEvent, ViewEventBus};
pub use inputs::{ChartInputs, MaLines, ViewOptions};
pub use legend::Legend;
pub use resize::{ResizeHub, ResizeToken};
pub use view::{ChartView, ViewPhase};
