use crate::model::{JoinedVehicle, Model};
use crate::ops::{join_vehicle, Store};

/// Reserved brand filter meaning "no filter"
pub const ALL_BRANDS: &str = "0";

/// Every Vehicle joined, in store order
pub fn list_all(store: &Store) -> Vec<JoinedVehicle> {
    store
        .list_vehicles()
        .iter()
        .map(|vehicle| join_vehicle(store, vehicle))
        .collect()
}

/// Vehicles whose Model belongs to `brand_id`, joined, in store order
///
/// [`ALL_BRANDS`] returns the same result as [`list_all`]. A brand id that no
/// Model references yields an empty list. Vehicles with a dangling `model_id`
/// belong to no brand and only appear in the unfiltered listing.
pub fn list_by_brand(store: &Store, brand_id: &str) -> Vec<JoinedVehicle> {
    if brand_id == ALL_BRANDS {
        return list_all(store);
    }

    store
        .list_vehicles()
        .iter()
        .filter(|vehicle| {
            store
                .model(&vehicle.model_id)
                .is_some_and(|model| model.belongs_to(brand_id))
        })
        .map(|vehicle| join_vehicle(store, vehicle))
        .collect()
}

/// Models belonging to `brand_id`, in construction order
pub fn models_for_brand<'a>(store: &'a Store, brand_id: &str) -> Vec<&'a Model> {
    store
        .list_models()
        .iter()
        .filter(|model| model.belongs_to(brand_id))
        .collect()
}
