use serde::{Deserialize, Serialize};

use rental_core::{DomainError, DomainResult};

use crate::reservation::DateRange;

/// A rentable asset and its booking history.
///
/// The reservation list is append-only through `reserve` and kept in
/// insertion order; no merging or sorting happens. A linear scan is fine at
/// the volume of a single vehicle's bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub size: String, // sedan, suv, ...
    pub color: String,
    available: bool,
    reservations: Vec<DateRange>,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self::from_parts(id, make, model, year, size, color, true)
    }

    /// Rebuild from stored fields; the persistence layer maps rows to these.
    pub fn from_parts(
        id: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        size: impl Into<String>,
        color: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            id: id.into(),
            make: make.into(),
            model: model.into(),
            year,
            size: size.into(),
            color: color.into(),
            available,
            reservations: Vec::new(),
        }
    }

    pub fn available(&self) -> bool {
        self.available
    }

    /// Disable or re-enable the vehicle independently of its bookings.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Reserved intervals in insertion order.
    pub fn reservations(&self) -> &[DateRange] {
        &self.reservations
    }

    /// False when the vehicle is disabled, otherwise true iff no stored
    /// interval overlaps `range`.
    pub fn is_available_on(&self, range: &DateRange) -> bool {
        if !self.available {
            return false;
        }
        !self.reservations.iter().any(|r| r.overlaps(range))
    }

    /// Book `range`, or fail with a conflict and leave the list untouched.
    pub fn reserve(&mut self, range: DateRange) -> DomainResult<()> {
        if !self.is_available_on(&range) {
            return Err(DomainError::Conflict(format!(
                "vehicle {} is not available for the requested range",
                self.id
            )));
        }
        tracing::debug!(vehicle = %self.id, start = %range.start, end = %range.end, "reservation added");
        self.reservations.push(range);
        Ok(())
    }

    /// Remove every stored interval whose bounds both match `range` exactly.
    /// A range that matches nothing is silently ignored; this never fails.
    pub fn release(&mut self, range: &DateRange) {
        let before = self.reservations.len();
        self.reservations
            .retain(|r| !(r.start == range.start && r.end == range.end));
        if self.reservations.len() != before {
            tracing::debug!(vehicle = %self.id, start = %range.start, end = %range.end, "reservation released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 0, 0, 0).unwrap()
    }

    fn range(start: u32, end: u32) -> DateRange {
        DateRange::new(day(start), day(end))
    }

    fn compact() -> Vehicle {
        Vehicle::new("veh-1", "Toyota", "Corolla", 2022, "compact", "blue")
    }

    #[test]
    fn availability_follows_the_overlap_predicate() {
        let mut vehicle = compact();
        vehicle.reserve(range(1, 5)).unwrap();

        assert!(!vehicle.is_available_on(&range(4, 8)));
        assert!(!vehicle.is_available_on(&range(2, 3)));
        assert!(vehicle.is_available_on(&range(5, 8)));
        assert!(vehicle.is_available_on(&range(6, 9)));
    }

    #[test]
    fn conflicting_reserve_leaves_the_list_unchanged() {
        let mut vehicle = compact();
        vehicle.reserve(range(1, 5)).unwrap();

        let err = vehicle.reserve(range(4, 8)).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(vehicle.reservations(), &[range(1, 5)]);
    }

    #[test]
    fn the_flag_disables_every_range() {
        let mut vehicle = compact();
        vehicle.set_available(false);
        assert!(!vehicle.is_available_on(&range(1, 2)));
        assert!(vehicle.reserve(range(1, 2)).is_err());
    }

    #[test]
    fn release_then_reserve_round_trips() {
        let mut vehicle = compact();
        vehicle.reserve(range(1, 5)).unwrap();
        vehicle.release(&range(1, 5));

        assert!(vehicle.is_available_on(&range(1, 5)));
        vehicle.reserve(range(1, 5)).unwrap();
    }

    #[test]
    fn release_matches_bounds_exactly() {
        let mut vehicle = compact();
        vehicle.reserve(range(1, 5)).unwrap();

        // Overlapping but not equal: nothing is removed.
        vehicle.release(&range(1, 4));
        assert_eq!(vehicle.reservations().len(), 1);

        // Unknown range: silent no-op.
        vehicle.release(&range(10, 12));
        assert_eq!(vehicle.reservations().len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut vehicle = compact();
        vehicle.reserve(range(10, 12)).unwrap();
        vehicle.reserve(range(1, 3)).unwrap();
        vehicle.reserve(range(5, 7)).unwrap();
        assert_eq!(
            vehicle.reservations(),
            &[range(10, 12), range(1, 3), range(5, 7)]
        );
    }
}
