//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::shapes::Shape;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    designs: RwLock<HashMap<String, Vec<Shape>>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, shapes: &[Shape]) -> StorageResult<()> {
        let mut designs = self.designs.write().map_err(lock_error)?;
        designs.insert(key.to_string(), shapes.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> StorageResult<Option<Vec<Shape>>> {
        let designs = self.designs.read().map_err(lock_error)?;
        Ok(designs.get(key).cloned())
    }
}
