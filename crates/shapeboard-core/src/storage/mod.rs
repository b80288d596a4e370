//! Storage abstraction for design persistence.
//!
//! The editor only needs two calls from a backend: "get the last saved
//! shapes, if any" and "save the current shapes". Both are synchronous.
//! Payloads are validated here, before they can reach the reducer.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::shapes::Shape;
use std::collections::HashSet;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid design: {0}")]
    Invalid(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for design storage backends.
///
/// Implementations can keep designs in memory or on the filesystem.
pub trait Storage: Send + Sync {
    /// Save the shape list under `key`, replacing any previous value.
    fn save(&self, key: &str, shapes: &[Shape]) -> StorageResult<()>;

    /// Load the shape list saved under `key`, or None if nothing was saved.
    fn load(&self, key: &str) -> StorageResult<Option<Vec<Shape>>>;
}

/// Check that a restored payload is well formed: numeric fields finite and
/// ids unique.
pub fn validate_shapes(shapes: &[Shape]) -> StorageResult<()> {
    let mut seen = HashSet::new();
    for shape in shapes {
        if !shape.is_finite() {
            return Err(StorageError::Invalid(format!(
                "shape {} has a non-finite coordinate",
                shape.id()
            )));
        }
        if !seen.insert(shape.id()) {
            return Err(StorageError::Invalid(format!(
                "duplicate shape id {}",
                shape.id()
            )));
        }
    }
    Ok(())
}

/// Serialize a shape list to the persisted JSON form.
pub fn shapes_to_json(shapes: &[Shape]) -> StorageResult<String> {
    serde_json::to_string(shapes).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parse and validate a persisted JSON shape list.
pub fn shapes_from_json(json: &str) -> StorageResult<Vec<Shape>> {
    let shapes: Vec<Shape> =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;
    validate_shapes(&shapes)?;
    Ok(shapes)
}
