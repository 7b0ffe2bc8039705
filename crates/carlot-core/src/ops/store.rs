use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::errors::{CarLotError, Result};
use crate::model::{Brand, Model, Vehicle};

/// In-memory store for Brands, Models and Vehicles
///
/// Owns all three relations. Brands and Models are fixed at construction and
/// indexed by id; Vehicles keep insertion order, which is also display order.
/// Not thread-safe (no Arc/RwLock) - see `SharedCollection` for shared use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub(crate) brands: Vec<Brand>,
    pub(crate) models: Vec<Model>,
    pub(crate) vehicles: Vec<Vehicle>,
    /// Brand ID -> position in `brands`
    brand_index: HashMap<String, usize>,
    /// Model ID -> position in `models`
    model_index: HashMap<String, usize>,
}

impl Store {
    /// Build a Store from the three initial relations
    ///
    /// References between relations are not checked; dangling `brand_id` and
    /// `model_id` values are allowed and resolved leniently by joins.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if an id appears twice within the same relation.
    pub fn new(brands: Vec<Brand>, models: Vec<Model>, vehicles: Vec<Vehicle>) -> Result<Self> {
        let brand_index = index_by_id("brand", brands.iter().map(|b| b.id.as_str()))?;
        let model_index = index_by_id("model", models.iter().map(|m| m.id.as_str()))?;

        let mut seen = HashSet::new();
        for vehicle in &vehicles {
            if !seen.insert(vehicle.id.as_str()) {
                return Err(CarLotError::DuplicateId {
                    relation: "vehicle",
                    id: vehicle.id.clone(),
                });
            }
        }

        Ok(Self {
            brands,
            models,
            vehicles,
            brand_index,
            model_index,
        })
    }

    /// Look up a Brand by ID
    pub fn brand(&self, id: &str) -> Option<&Brand> {
        self.brand_index.get(id).map(|&pos| &self.brands[pos])
    }

    /// Look up a Model by ID
    pub fn model(&self, id: &str) -> Option<&Model> {
        self.model_index.get(id).map(|&pos| &self.models[pos])
    }

    /// Look up a Vehicle by ID
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Get a Brand by ID
    ///
    /// # Errors
    ///
    /// Returns `BrandNotFound` if the brand doesn't exist.
    pub fn get_brand(&self, id: &str) -> Result<&Brand> {
        self.brand(id).ok_or_else(|| CarLotError::BrandNotFound {
            brand_id: id.to_string(),
        })
    }

    /// Get a Model by ID
    ///
    /// # Errors
    ///
    /// Returns `ModelNotFound` if the model doesn't exist.
    pub fn get_model(&self, id: &str) -> Result<&Model> {
        self.model(id).ok_or_else(|| CarLotError::ModelNotFound {
            model_id: id.to_string(),
        })
    }

    /// Get a Vehicle by ID
    ///
    /// # Errors
    ///
    /// Returns `VehicleNotFound` if the vehicle doesn't exist.
    pub fn get_vehicle(&self, id: &str) -> Result<&Vehicle> {
        self.vehicle(id).ok_or_else(|| CarLotError::VehicleNotFound {
            vehicle_id: id.to_string(),
        })
    }

    /// Position of a Vehicle in store order
    pub fn vehicle_position(&self, id: &str) -> Option<usize> {
        self.vehicles.iter().position(|v| v.id == id)
    }

    /// All Brands in construction order
    pub fn list_brands(&self) -> &[Brand] {
        &self.brands
    }

    /// All Models in construction order
    pub fn list_models(&self) -> &[Model] {
        &self.models
    }

    /// All Vehicles in store order
    pub fn list_vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Append a Vehicle at the end of store order
    pub(crate) fn push_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    /// Replace the Vehicle at `position`, keeping its slot
    pub(crate) fn replace_vehicle(&mut self, position: usize, vehicle: Vehicle) {
        self.vehicles[position] = vehicle;
    }

    /// Remove the Vehicle at `position`; later rows shift up by one
    pub(crate) fn remove_vehicle(&mut self, position: usize) -> Vehicle {
        self.vehicles.remove(position)
    }

    /// Generate a Vehicle ID not used by any current Vehicle
    ///
    /// UUID v7 (time-ordered); redrawn in the vanishingly unlikely case it is
    /// already taken.
    pub(crate) fn next_vehicle_id(&self) -> String {
        loop {
            let id = Uuid::now_v7().to_string();
            if self.vehicle(&id).is_none() {
                return id;
            }
        }
    }
}

fn index_by_id<'a>(
    relation: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::new();
    for (pos, id) in ids.enumerate() {
        if index.insert(id.to_string(), pos).is_some() {
            return Err(CarLotError::DuplicateId {
                relation,
                id: id.to_string(),
            });
        }
    }
    Ok(index)
}
