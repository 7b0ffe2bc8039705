//! Collection facade
//!
//! [`CarCollection`] is the public API the presentation layer talks to. It owns
//! the [`Store`] and is the only thing allowed to mutate Vehicles.
//!
//! ## Logging Ownership
//!
//! The facade owns lifecycle logging for write operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (ops, queries) use only `tracing::debug!()` for internal details.

use std::time::Instant;

use crate::apply::{apply, Applied};
use crate::commands::Command;
use crate::errors::Result;
use crate::model::{Brand, JoinedVehicle, Model, Vehicle, VehicleProps};
use crate::ops::{vehicle_ops, Store};
use crate::queries::vehicle_queries;
use crate::{log_op_end, log_op_error, log_op_start};

/// The vehicle inventory: joined reads and validated writes over one Store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarCollection {
    store: Store,
}

impl CarCollection {
    /// Wrap an existing Store
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Build the Store from its three relations and wrap it
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if an id repeats within a relation.
    pub fn from_parts(brands: Vec<Brand>, models: Vec<Model>, vehicles: Vec<Vehicle>) -> Result<Self> {
        Ok(Self::new(Store::new(brands, models, vehicles)?))
    }

    /// Read access to the underlying Store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Give back the underlying Store
    pub fn into_store(self) -> Store {
        self.store
    }

    // ===== Reads =====

    /// Every Vehicle joined, in store order
    pub fn list_all(&self) -> Vec<JoinedVehicle> {
        let rows = vehicle_queries::list_all(&self.store);
        tracing::debug!(row_count = rows.len(), "list_all");
        rows
    }

    /// Vehicles of one brand joined, in store order
    ///
    /// `"0"` ([`crate::ALL_BRANDS`]) means no filter. Unknown brands give an
    /// empty list.
    pub fn list_by_brand(&self, brand_id: &str) -> Vec<JoinedVehicle> {
        let rows = vehicle_queries::list_by_brand(&self.store, brand_id);
        tracing::debug!(brand_id, row_count = rows.len(), "list_by_brand");
        rows
    }

    /// All Brands, for a brand selector
    pub fn brands(&self) -> &[Brand] {
        self.store.list_brands()
    }

    /// Title of a Brand, if it exists
    pub fn brand_title(&self, brand_id: &str) -> Option<&str> {
        self.store.brand(brand_id).map(|b| b.title.as_str())
    }

    /// Models of one Brand, for a model selector that follows the brand choice
    pub fn models_for_brand(&self, brand_id: &str) -> Vec<&Model> {
        vehicle_queries::models_for_brand(&self.store, brand_id)
    }

    /// A stored Vehicle, for pre-filling an edit form
    pub fn get_vehicle(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.store.vehicle(vehicle_id)
    }

    // ===== Writes =====

    /// Add a Vehicle and return its new ID
    ///
    /// # Errors
    ///
    /// `InvalidReference` if the Model or Brand does not exist; the collection
    /// is unchanged.
    pub fn add(&mut self, props: VehicleProps) -> Result<String> {
        let applied = self.execute(Command::VehicleAdd { props })?;
        Ok(applied.vehicle_id().to_string())
    }

    /// Update a Vehicle in place
    ///
    /// # Errors
    ///
    /// `VehicleNotFound`, then `ModelNotFound`, then `BrandNotFound`; the first
    /// failing check wins and the collection is unchanged.
    pub fn update(&mut self, car_id: &str, props: VehicleProps) -> Result<()> {
        self.execute(Command::VehicleUpdate {
            vehicle_id: car_id.to_string(),
            props,
        })?;
        Ok(())
    }

    /// Delete a Vehicle; returns whether anything was removed
    ///
    /// Deleting an unknown ID is a no-op, not an error, so this path has no
    /// `end_error` event.
    pub fn delete_car_by_id(&mut self, car_id: &str) -> bool {
        let op = "vehicle_delete";
        log_op_start!(op, vehicle_id = car_id);
        let start = Instant::now();

        let removed = vehicle_ops::delete_vehicle(&mut self.store, car_id);

        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            vehicle_id = car_id,
            removed = removed
        );
        removed
    }

    /// Run one command with lifecycle logging
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation unchanged.
    pub fn execute(&mut self, cmd: Command) -> Result<Applied> {
        let op = cmd.op_name();
        log_op_start!(op);
        let start = Instant::now();

        let applied = apply(&mut self.store, cmd).map_err(|e| {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            vehicle_id = applied.vehicle_id()
        );

        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CarLotError;

    fn toyota_collection() -> CarCollection {
        CarCollection::from_parts(
            vec![Brand::new("b1", "Toyota")],
            vec![Model::new("m1", "b1", "Corolla")],
            vec![Vehicle::new("v1", "m1", 20000, 2020)],
        )
        .unwrap()
    }

    #[test]
    fn test_example_scenario() {
        let mut cars = toyota_collection();

        assert_eq!(
            cars.list_all(),
            vec![JoinedVehicle {
                id: "v1".to_string(),
                price: 20000,
                year: 2020,
                brand: "Toyota".to_string(),
                model: "Corolla".to_string(),
            }]
        );

        let new_id = cars.add(VehicleProps::new("b1", "m1", 15000, 2018)).unwrap();
        assert_eq!(cars.list_all().len(), 2);

        assert!(cars.delete_car_by_id("v1"));
        let remaining = cars.list_all();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, new_id);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut cars = toyota_collection();
        let before = cars.clone();

        assert!(!cars.delete_car_by_id("nope"));
        assert_eq!(cars, before);
    }

    #[test]
    fn test_update_missing_vehicle() {
        let mut cars = toyota_collection();
        let result = cars.update("nope", VehicleProps::new("b1", "m1", 1, 2000));
        assert!(matches!(result, Err(CarLotError::VehicleNotFound { .. })));
    }

    #[test]
    fn test_lookups_for_forms() {
        let cars = toyota_collection();

        assert_eq!(cars.brand_title("b1"), Some("Toyota"));
        assert_eq!(cars.brand_title("b2"), None);
        assert_eq!(cars.models_for_brand("b1").len(), 1);
        assert_eq!(cars.get_vehicle("v1").map(|v| v.year), Some(2020));
    }
}
