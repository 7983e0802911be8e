use std::collections::HashMap;

use rental_core::{DomainError, DomainResult};

use crate::reservation::DateRange;
use crate::vehicle::Vehicle;

/// In-memory fleet registry, one `Vehicle` per caller-supplied id.
pub struct FleetManager {
    vehicles: HashMap<String, Vehicle>,
}

impl FleetManager {
    pub fn new() -> Self {
        Self {
            vehicles: HashMap::new(),
        }
    }

    /// Register a vehicle, replacing any previous entry under the same id.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.insert(vehicle.id.clone(), vehicle);
    }

    pub fn get(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.vehicles.get(vehicle_id)
    }

    pub fn reserve(&mut self, vehicle_id: &str, range: DateRange) -> DomainResult<()> {
        self.get_vehicle_mut(vehicle_id)?.reserve(range)
    }

    pub fn release(&mut self, vehicle_id: &str, range: &DateRange) -> DomainResult<()> {
        self.get_vehicle_mut(vehicle_id)?.release(range);
        Ok(())
    }

    /// Vehicles whose flag is on and whose bookings leave `range` free,
    /// sorted by id for stable output.
    pub fn search_available(&self, range: &DateRange) -> Vec<&Vehicle> {
        let mut hits: Vec<&Vehicle> = self
            .vehicles
            .values()
            .filter(|v| v.is_available_on(range))
            .collect();
        hits.sort_by(|a, b| a.id.cmp(&b.id));
        hits
    }

    fn get_vehicle_mut(&mut self, vehicle_id: &str) -> DomainResult<&mut Vehicle> {
        self.vehicles
            .get_mut(vehicle_id)
            .ok_or_else(|| DomainError::Validation(format!("unknown vehicle: {vehicle_id}")))
    }
}

impl Default for FleetManager {
    fn default() -> Self {
        Self::new()
    }
}
