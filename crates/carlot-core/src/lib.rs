//! CarLot Core - In-memory relational kernel for a vehicle inventory
//!
//! This crate provides the data layer behind the inventory view:
//! - Brand, Model and Vehicle records owned by a single [`Store`]
//! - The join engine that denormalizes a Vehicle into a [`JoinedVehicle`]
//! - The [`CarCollection`] facade with list/filter/add/update/delete semantics
//! - A serializable [`Command`] boundary for scripted mutations
//! - Markdown rendering of the joined inventory table
//! - Structured error and logging facilities

pub mod apply;
pub mod collection;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod render;
pub mod shared;

// Re-export commonly used types
pub use apply::{apply, Applied};
pub use collection::CarCollection;
pub use commands::Command;
pub use errors::{CarLotError, ExError, ExErrorKind, Result};
pub use model::{Brand, JoinedVehicle, Model, Vehicle, VehicleProps};
pub use ops::Store;
pub use queries::ALL_BRANDS;
pub use shared::SharedCollection;
