pub mod manager;
pub mod reservation;
pub mod vehicle;

pub use manager::FleetManager;
pub use reservation::DateRange;
pub use vehicle::Vehicle;
