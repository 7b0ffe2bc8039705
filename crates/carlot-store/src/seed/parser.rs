//! Seed parser with validation
//!
//! Parses YAML and validates the schema version. Id uniqueness is enforced
//! when the seed is loaded into a `Store`. Dangling `brandId`/`modelId` values
//! are allowed and rendered with the sentinel label.

use crate::errors::{io_error, seed_syntax, seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read seed file");

    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content).map_err(seed_syntax)?;

    validate_seed(&seed)?;

    Ok(seed)
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    Ok(())
}
