//! Seed import system
//!
//! Provides:
//! - Seed Format v0 schema
//! - YAML parser with validation
//! - Loader into the core Store

pub mod format_v0;
pub mod loader;
pub mod parser;

pub use format_v0::SeedV0;
pub use loader::{default_seed, load_collection, load_collection_file, load_store};
pub use parser::{parse_seed_file, parse_seed_str};
