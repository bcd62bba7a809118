//! Error handling for petshop-store
//!
//! Wraps petshop-core PsError with store-specific helpers

use petshop_core::errors::{PsError, PsErrorKind};

/// Result type alias using PsError
pub type Result<T> = std::result::Result<T, PsError>;

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> PsError {
    PsError::new(PsErrorKind::InvalidSeed)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create a seed validation error about one record
pub fn seed_duplicate(kind: &str, id: &str) -> PsError {
    seed_validation(&format!("Duplicate {} id '{}'", kind, id)).with_entity_id(id)
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> PsError {
    PsError::new(PsErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
