//! Seed Format v0 schema
//!
//! Defines the YAML structure for the initial inventory. Records use the same
//! field names as the core model (`brandId`, `modelId`).

use carlot_core::{Brand, Model, Vehicle};
use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Brand reference data
    #[serde(default)]
    pub brands: Vec<Brand>,

    /// Model reference data
    #[serde(default)]
    pub models: Vec<Model>,

    /// Initial vehicles, in display order
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}
