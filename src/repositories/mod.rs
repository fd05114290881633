pub mod memory;
pub mod vehicle_repository;

pub use memory::InMemoryVehicleStore;
pub use vehicle_repository::{VehicleRepository, VehicleStore};
