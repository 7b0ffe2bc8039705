//! Read-only queries over the Store
//!
//! Queries never fail: dangling references are rendered with the sentinel
//! label rather than surfaced as errors.

pub mod vehicle_queries;

pub use vehicle_queries::{list_all, list_by_brand, models_for_brand, ALL_BRANDS};
