//! Date-only time normalization.
//!
//! Every time value bound to a series or marker is reduced to day
//! granularity to match the time axis used across the engine.

/// Truncates an ISO-like timestamp to its date part (first 10 characters).
///
/// Strings shorter than 10 characters, or strings whose 10th byte is not a
/// character boundary, are returned unchanged.
pub fn normalize_date(time: &str) -> &str {
    time.get(..10).unwrap_or(time)
}
