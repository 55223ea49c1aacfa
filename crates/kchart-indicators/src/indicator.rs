//! Core indicator trait.

use kchart_core::Bar;

/// Trait for indicator configuration.
pub trait IndicatorConfig: Clone + Default {}

/// Trait for technical indicators.
///
/// Indicators are pure: the same bar slice and configuration always produce
/// bit-identical output, and no input (including an empty slice) makes them
/// fail.
pub trait Indicator {
    /// The configuration type for this indicator.
    type Config: IndicatorConfig;

    /// The typed output of one calculation pass.
    type Output;

    /// Create a new indicator with the given configuration.
    fn new(config: Self::Config) -> Self;

    /// Calculate the indicator values for the given bars.
    fn calculate(&self, bars: &[Bar]) -> Self::Output;

    /// Number of bars consumed before the first emitted point.
    fn min_periods(&self) -> usize;

    /// Whether this indicator is overlaid on the price pane (true)
    /// or displayed in a separate sub-pane (false).
    fn is_overlay(&self) -> bool;

    /// Human-readable name of the indicator.
    fn name(&self) -> &str;
}
