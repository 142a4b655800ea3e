#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

/// Specifies location type: an index into the cost matrix.
pub type Location = usize;

/// Specifies a travel cost value.
pub type Cost = u64;

/// Specifies a signed cost change. Positive values represent a cost reduction.
pub type Gain = i64;

/// Represents a timestamp.
pub type Timestamp = u64;

/// Represents a time duration.
pub type Duration = u64;

/// Represents a time window.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeWindow {
    /// Start of the time window.
    pub start: Timestamp,
    /// End of the time window.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        debug_assert!(start <= end);

        Self { start, end }
    }

    /// Returns an unlimited time window.
    pub fn max() -> Self {
        Self { start: 0, end: Timestamp::MAX }
    }

    /// Returns duration of the time window.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
