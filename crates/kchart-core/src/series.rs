//! Suffix-aligned series container for indicator output.

/// A dense series aligned to the tail of a bar sequence.
///
/// Indicator warm-up drops leading bars only, so every series produced by
/// this engine is a contiguous suffix of the bar domain: `start_index` is
/// the bar index of the first value, and value `i` belongs to bar
/// `start_index + i`.
#[derive(Debug, Clone, PartialEq)]
pub struct SuffixSeries<T> {
    values: Vec<T>,
    start_index: usize,
}

impl<T> SuffixSeries<T> {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            start_index: 0,
        }
    }

    /// Creates a series whose first value belongs to bar `start_index`.
    pub fn from_values(values: Vec<T>, start_index: usize) -> Self {
        Self {
            values,
            start_index,
        }
    }

    /// Bar index of the first value.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value for the given bar index, if the series covers it.
    pub fn get(&self, bar_index: usize) -> Option<&T> {
        bar_index
            .checked_sub(self.start_index)
            .and_then(|local| self.values.get(local))
    }

    /// Last value of the series.
    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    /// Iterates over `(bar_index, value)` pairs.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &T)> {
        self.values
            .iter()
            .enumerate()
            .map(move |(i, v)| (self.start_index + i, v))
    }

    /// The underlying values, oldest first.
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T> Default for SuffixSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}
