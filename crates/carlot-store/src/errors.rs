//! Error handling for carlot-store
//!
//! Wraps carlot-core ExError with store-specific helpers

use carlot_core::errors::{CarLotError, ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create a seed deserialization error
pub fn seed_syntax(err: serde_yaml::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("seed_parse")
        .with_message(format!("YAML parse error: {}", err))
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Wrap a core error raised while building the store from a seed
pub fn seed_load(err: CarLotError) -> ExError {
    let source: ExError = err.into();
    ExError::new(source.kind())
        .with_op("seed_load")
        .with_message("Seed could not be loaded into the store")
        .with_source(source)
}
