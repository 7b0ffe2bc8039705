//! CarLot Store - Seed loading for the in-memory inventory
//!
//! Provides:
//! - Seed Format v0 schema (brands, models, vehicles)
//! - YAML parser with validation
//! - Loaders that build a `Store` / `CarCollection` from a seed
//! - The embedded default inventory

pub mod errors;
pub mod seed;

// Re-export key types
pub use errors::Result;
