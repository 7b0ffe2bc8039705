//! Command dispatch
//!
//! `apply()` is the single entry point that turns a [`Command`] into a call on
//! the Vehicle operations.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: every operation validates its references before it
//!   touches the Store, so an `Err` leaves the Store exactly as it was
//! - **No panics**: invalid input returns typed errors
//!
//! ## Example
//!
//! ```
//! use carlot_core::{apply, Applied, Brand, Command, Model, Store, VehicleProps};
//!
//! let mut store = Store::new(
//!     vec![Brand::new("b1", "Toyota")],
//!     vec![Model::new("m1", "b1", "Corolla")],
//!     vec![],
//! )
//! .unwrap();
//!
//! let cmd = Command::VehicleAdd {
//!     props: VehicleProps::new("b1", "m1", 15000, 2018),
//! };
//! let applied = apply(&mut store, cmd).unwrap();
//! assert!(matches!(applied, Applied::Added { .. }));
//! assert_eq!(store.list_vehicles().len(), 1);
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{vehicle_ops, Store};

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A Vehicle was created with this ID
    Added { vehicle_id: String },
    /// The Vehicle with this ID was updated in place
    Updated { vehicle_id: String },
    /// A delete ran; `removed` is false when the ID was already absent
    Deleted { vehicle_id: String, removed: bool },
}

impl Applied {
    /// The Vehicle ID the command affected
    pub fn vehicle_id(&self) -> &str {
        match self {
            Applied::Added { vehicle_id }
            | Applied::Updated { vehicle_id }
            | Applied::Deleted { vehicle_id, .. } => vehicle_id,
        }
    }
}

/// Apply a command to a store
///
/// # Errors
///
/// Returns the error of the underlying operation (`InvalidReference` for add;
/// `VehicleNotFound`, `ModelNotFound` or `BrandNotFound` for update). Delete
/// never fails.
pub fn apply(state: &mut Store, cmd: Command) -> Result<Applied> {
    match cmd {
        Command::VehicleAdd { props } => {
            let vehicle_id = vehicle_ops::add_vehicle(state, props)?;
            Ok(Applied::Added { vehicle_id })
        }

        Command::VehicleUpdate { vehicle_id, props } => {
            vehicle_ops::update_vehicle(state, &vehicle_id, props)?;
            Ok(Applied::Updated { vehicle_id })
        }

        Command::VehicleDelete { vehicle_id } => {
            let removed = vehicle_ops::delete_vehicle(state, &vehicle_id);
            Ok(Applied::Deleted {
                vehicle_id,
                removed,
            })
        }
    }
}
