//! Seed loader
//!
//! Turns a parsed [`SeedV0`] into the core [`Store`] / [`CarCollection`].

use crate::errors::{seed_load, Result};
use crate::seed::format_v0::SeedV0;
use crate::seed::parser::{parse_seed_file, parse_seed_str};
use carlot_core::{CarCollection, Store};
use std::path::Path;

const DEFAULT_SEED: &str = include_str!("../../fixtures/default_inventory.yaml");

/// Build a Store from a parsed seed
///
/// Relations keep the order they have in the seed file. A repeated id within
/// one relation fails with `ERR_INVALID_INPUT` (from `Store::new`).
pub fn load_store(seed: SeedV0) -> Result<Store> {
    let counts = (seed.brands.len(), seed.models.len(), seed.vehicles.len());
    let store = Store::new(seed.brands, seed.models, seed.vehicles).map_err(seed_load)?;

    tracing::debug!(
        brands = counts.0,
        models = counts.1,
        vehicles = counts.2,
        "seed loaded"
    );

    Ok(store)
}

/// Parse a seed string and wrap the resulting Store in a collection
pub fn load_collection(content: &str) -> Result<CarCollection> {
    let seed = parse_seed_str(content)?;
    Ok(CarCollection::new(load_store(seed)?))
}

/// Parse a seed file and wrap the resulting Store in a collection
pub fn load_collection_file(path: &Path) -> Result<CarCollection> {
    let seed = parse_seed_file(path)?;
    Ok(CarCollection::new(load_store(seed)?))
}

/// The inventory compiled into the binary
pub fn default_seed() -> Result<SeedV0> {
    parse_seed_str(DEFAULT_SEED)
}
