pub mod join;
pub mod store;
pub mod vehicle_ops;

pub use join::{join_vehicle, resolve, Resolution, UNRESOLVED_LABEL};
pub use store::Store;
