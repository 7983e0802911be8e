use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Half-open booking interval: `start` is included, `end` is not, so
/// back-to-back bookings can share a boundary instant without conflicting.
///
/// The bounds are taken as-is. No validation happens; the overlap predicate
/// applies mechanically even to zero-length or inverted ranges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Two half-open intervals overlap iff each starts before the other ends.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}
