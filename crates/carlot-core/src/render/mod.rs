//! Rendering of the joined inventory for display
//!
//! The inventory view is a titled table of stringified [`crate::JoinedVehicle`]
//! rows, rendered to Markdown, plus the option list for a brand selector.

pub mod inventory_render;

pub use inventory_render::{
    brand_options, inventory_view, render_inventory, BrandOption, InventoryView, ALL_BRANDS_TITLE,
    COLUMNS, UNFILTERED_TITLE,
};
