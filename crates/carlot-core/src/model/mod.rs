pub mod catalog;
pub mod vehicle;

pub use catalog::{Brand, Model};
pub use vehicle::{JoinedVehicle, Vehicle, VehicleProps};
