use super::store::Store;
use crate::errors::{CarLotError, Result};
use crate::model::{Vehicle, VehicleProps};

/// Add a new Vehicle to the end of store order
///
/// Both the Model and the Brand named in `props` must exist. `brand_id` is
/// only checked, never stored: the Vehicle's brand is whatever its Model
/// points at.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `props` - Brand/Model references plus price and year
///
/// # Returns
/// The ID of the newly created Vehicle (UUID v7)
///
/// # Errors
/// * `InvalidReference` - If the Model or the Brand does not exist (store unchanged)
pub fn add_vehicle(store: &mut Store, props: VehicleProps) -> Result<String> {
    if store.model(&props.model_id).is_none() || store.brand(&props.brand_id).is_none() {
        return Err(CarLotError::InvalidReference {
            brand_id: props.brand_id,
            model_id: props.model_id,
        });
    }

    let vehicle_id = store.next_vehicle_id();
    store.push_vehicle(Vehicle::new(
        vehicle_id.clone(),
        props.model_id,
        props.price,
        props.year,
    ));

    Ok(vehicle_id)
}

/// Replace the mutable fields of an existing Vehicle in place
///
/// The Vehicle keeps its ID and its position in store order.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `vehicle_id` - The Vehicle ID to update
/// * `props` - New Brand/Model references plus price and year
///
/// # Errors
/// Checked in this order, first failure wins and nothing is mutated:
/// * `VehicleNotFound` - If the Vehicle doesn't exist
/// * `ModelNotFound` - If `props.model_id` names no Model
/// * `BrandNotFound` - If `props.brand_id` names no Brand
pub fn update_vehicle(store: &mut Store, vehicle_id: &str, props: VehicleProps) -> Result<()> {
    let position = store
        .vehicle_position(vehicle_id)
        .ok_or_else(|| CarLotError::VehicleNotFound {
            vehicle_id: vehicle_id.to_string(),
        })?;
    store.get_model(&props.model_id)?;
    store.get_brand(&props.brand_id)?;

    store.replace_vehicle(
        position,
        Vehicle::new(vehicle_id, props.model_id, props.price, props.year),
    );

    Ok(())
}

/// Delete a Vehicle by ID
///
/// Idempotent: deleting an ID that is not present leaves the store unchanged
/// and is not an error.
///
/// # Returns
/// `true` if a Vehicle was removed
pub fn delete_vehicle(store: &mut Store, vehicle_id: &str) -> bool {
    match store.vehicle_position(vehicle_id) {
        Some(position) => {
            store.remove_vehicle(position);
            true
        }
        None => false,
    }
}
