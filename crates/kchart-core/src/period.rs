//! Bar bucket granularity.

use serde::Deserialize;

/// Granularity of one bar bucket, as requested from the upstream feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Day,
    Week,
    Month,
}

impl Period {
    /// Short label for axis and legend use.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Day => "1d",
            Period::Week => "1w",
            Period::Month => "1M",
        }
    }

    pub fn all() -> &'static [Period] {
        &[Period::Day, Period::Week, Period::Month]
    }
}
