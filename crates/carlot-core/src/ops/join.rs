use crate::model::{Brand, JoinedVehicle, Model, Vehicle};
use crate::ops::Store;

/// Label substituted for a Model or Brand that cannot be resolved
pub const UNRESOLVED_LABEL: &str = "undefined";

/// Outcome of resolving a Vehicle's `model_id -> Model -> brand_id -> Brand` chain
///
/// Every dangling reference has its own variant so callers never reach for a
/// nullable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Both the Model and its Brand exist
    Resolved { model: &'a Model, brand: &'a Brand },
    /// The Model exists but its `brand_id` names no Brand
    BrandMissing { model: &'a Model },
    /// The Vehicle's `model_id` names no Model
    ModelMissing,
}

impl<'a> Resolution<'a> {
    /// Brand title, or the sentinel label when unresolved
    pub fn brand_label(&self) -> &'a str {
        match *self {
            Resolution::Resolved { brand, .. } => &brand.title,
            Resolution::BrandMissing { .. } | Resolution::ModelMissing => UNRESOLVED_LABEL,
        }
    }

    /// Model title, or the sentinel label when unresolved
    pub fn model_label(&self) -> &'a str {
        match *self {
            Resolution::Resolved { model, .. } | Resolution::BrandMissing { model } => &model.title,
            Resolution::ModelMissing => UNRESOLVED_LABEL,
        }
    }

    /// The resolved Model, if any
    pub fn model(&self) -> Option<&'a Model> {
        match *self {
            Resolution::Resolved { model, .. } | Resolution::BrandMissing { model } => Some(model),
            Resolution::ModelMissing => None,
        }
    }
}

/// Resolve the Model and Brand a Vehicle points at
///
/// Uses the Store's id indices, so each lookup is O(1).
pub fn resolve<'a>(store: &'a Store, vehicle: &Vehicle) -> Resolution<'a> {
    let Some(model) = store.model(&vehicle.model_id) else {
        tracing::debug!(
            vehicle_id = %vehicle.id,
            model_id = %vehicle.model_id,
            "dangling model reference"
        );
        return Resolution::ModelMissing;
    };

    match store.brand(&model.brand_id) {
        Some(brand) => Resolution::Resolved { model, brand },
        None => {
            tracing::debug!(
                vehicle_id = %vehicle.id,
                model_id = %model.id,
                brand_id = %model.brand_id,
                "dangling brand reference"
            );
            Resolution::BrandMissing { model }
        }
    }
}

/// Denormalize a Vehicle into its display view
///
/// Pure: reads the Store, never fails. Unresolvable references are rendered as
/// [`UNRESOLVED_LABEL`].
pub fn join_vehicle(store: &Store, vehicle: &Vehicle) -> JoinedVehicle {
    let resolution = resolve(store, vehicle);

    JoinedVehicle {
        id: vehicle.id.clone(),
        price: vehicle.price,
        year: vehicle.year,
        brand: resolution.brand_label().to_string(),
        model: resolution.model_label().to_string(),
    }
}
