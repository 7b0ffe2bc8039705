use carlot_core::{Brand, CarCollection, Model, Store, Vehicle, VehicleProps};

/// Toyota/Corolla store with a single vehicle `v1`
#[allow(dead_code)]
pub fn toyota_store() -> Store {
    Store::new(
        vec![Brand::new("b1", "Toyota")],
        vec![Model::new("m1", "b1", "Corolla")],
        vec![Vehicle::new("v1", "m1", 20000, 2020)],
    )
    .unwrap()
}

/// Two brands, three models, four vehicles (the last with a dangling model)
///
/// | vehicle | model | brand  |
/// |---------|-------|--------|
/// | v1      | m1    | b1     |
/// | v2      | m2    | b2     |
/// | v3      | m3    | b1     |
/// | v4      | ghost | -      |
#[allow(dead_code)]
pub fn mixed_collection() -> CarCollection {
    CarCollection::from_parts(
        vec![Brand::new("b1", "Toyota"), Brand::new("b2", "Honda")],
        vec![
            Model::new("m1", "b1", "Corolla"),
            Model::new("m2", "b2", "Civic"),
            Model::new("m3", "b1", "Yaris"),
            Model::new("m4", "ghost-brand", "Orphan"),
        ],
        vec![
            Vehicle::new("v1", "m1", 20000, 2020),
            Vehicle::new("v2", "m2", 18000, 2019),
            Vehicle::new("v3", "m3", 12000, 2017),
            Vehicle::new("v4", "ghost", 500, 1990),
        ],
    )
    .unwrap()
}

/// Valid props pointing at Toyota/Corolla
#[allow(dead_code)]
pub fn corolla_props(price: u64, year: u32) -> VehicleProps {
    VehicleProps::new("b1", "m1", price, year)
}
