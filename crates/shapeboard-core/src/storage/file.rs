//! File-based storage implementation.

use super::{Storage, StorageError, StorageResult, shapes_from_json, shapes_to_json};
use crate::shapes::Shape;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based storage.
///
/// Stores each design as a JSON array of shapes in `<base>/<key>.json`.
pub struct FileStorage {
    /// Base directory for design storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/shapeboard/designs/`
    /// On Windows: `%LOCALAPPDATA%\shapeboard\designs\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("shapeboard").join("designs"))
    }

    /// Get the file path for a key.
    fn design_path(&self, key: &str) -> PathBuf {
        // Keys become file names
        let safe_key: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe_key))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for FileStorage {
    fn save(&self, key: &str, shapes: &[Shape]) -> StorageResult<()> {
        let path = self.design_path(key);
        let json = shapes_to_json(shapes)?;
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn load(&self, key: &str) -> StorageResult<Option<Vec<Shape>>> {
        let path = self.design_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        shapes_from_json(&json).map(Some).map_err(|e| match e {
            StorageError::Serialization(msg) => {
                StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;
    use kurbo::Point;
    use tempfile::tempdir;

    fn design() -> Vec<Shape> {
        vec![
            Shape::with_id("a", ShapeKind::Rectangle, Point::new(50.0, 50.0), 100.0, 100.0),
            Shape::with_id("b", ShapeKind::Circle, Point::new(10.0, 10.0), 50.0, 50.0),
        ]
    }

    #[test]
    fn test_file_storage_save_load() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.save("design", &design()).unwrap();
        let loaded = storage.load("design").unwrap();

        assert_eq!(loaded, Some(design()));
    }

    #[test]
    fn test_file_storage_not_found() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(storage.load("nonexistent").unwrap(), None);
    }

    #[test]
    fn test_file_storage_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(nested.clone()).unwrap();
        assert!(nested.exists());
        assert_eq!(storage.base_path(), nested.as_path());
    }

    #[test]
    fn test_file_storage_overwrites() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.save("design", &design()).unwrap();
        storage.save("design", &design()[..1]).unwrap();

        let loaded = storage.load("design").unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(dir.path().join("design.json").exists());
    }

    #[test]
    fn test_file_storage_sanitizes_key() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        // Key with special characters should be sanitized
        storage.save("test/doc:with*special", &design()).unwrap();

        // Should still be loadable with the same key
        let loaded = storage.load("test/doc:with*special").unwrap();
        assert_eq!(loaded, Some(design()));
    }

    #[test]
    fn test_file_storage_rejects_corrupt_file() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        fs::write(dir.path().join("design.json"), "{ not json").unwrap();

        let result = storage.load("design");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_file_storage_rejects_invalid_design() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let json = r#"[
            {"id": "a", "type": "rectangle", "x": 0, "y": 0, "width": 10, "height": 10},
            {"id": "a", "type": "circle", "x": 5, "y": 5, "width": 10, "height": 10}
        ]"#;
        fs::write(dir.path().join("design.json"), json).unwrap();

        let result = storage.load("design");
        assert!(matches!(result, Err(StorageError::Invalid(_))));
    }
}
