//! Command types for Vehicle mutations
//!
//! Commands are the serializable form of the three write operations. Scripts
//! (YAML or JSON) deserialize into a list of commands, which are executed one
//! at a time through [`crate::apply::apply`] or [`crate::CarCollection::execute`].

use serde::{Deserialize, Serialize};

use crate::model::VehicleProps;

/// A single Vehicle mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Add a new Vehicle
    VehicleAdd {
        #[serde(flatten)]
        props: VehicleProps,
    },

    /// Replace an existing Vehicle's model, price and year
    VehicleUpdate {
        #[serde(rename = "vehicleId", alias = "vehicle_id")]
        vehicle_id: String,
        #[serde(flatten)]
        props: VehicleProps,
    },

    /// Delete a Vehicle (no-op if absent)
    VehicleDelete {
        #[serde(rename = "vehicleId", alias = "vehicle_id")]
        vehicle_id: String,
    },
}

impl Command {
    /// Operation name used in logs and reports
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::VehicleAdd { .. } => "vehicle_add",
            Command::VehicleUpdate { .. } => "vehicle_update",
            Command::VehicleDelete { .. } => "vehicle_delete",
        }
    }
}
