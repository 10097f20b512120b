//! Record store backed by a single JSON file.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::{RecordStore, decode, encode};
use crate::error::HabResult;
use crate::record::RecordCollection;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> RecordCollection {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Error reading appointments");
                return Vec::new();
            }
        };

        decode(&content).unwrap_or_else(|e| {
            error!(path = %self.path.display(), error = %e, "Error parsing appointments");
            Vec::new()
        })
    }

    fn save(&self, records: &RecordCollection) -> bool {
        let result = encode(records)
            .map_err(|e| e.to_string())
            .and_then(|content| std::fs::write(&self.path, content).map_err(|e| e.to_string()));

        match result {
            Ok(()) => true,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Error writing appointments");
                false
            }
        }
    }

    fn ensure_initialized(&self) -> HabResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, encode(&Vec::new())?)?;
        info!(path = %self.path.display(), "Created new appointments data file");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_initialized_creates_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("appointments.json");
        let store = JsonFileStore::new(&path);

        store.ensure_initialized().unwrap();

        assert_eq!(store.path(), path.as_path());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_ensure_initialized_leaves_existing_document_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        store.ensure_initialized().unwrap();
        store.ensure_initialized().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        std::fs::write(&path, "[{\"id\": ").unwrap();

        assert!(JsonFileStore::new(&path).load().is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("no-such-dir").join("appointments.json"));
        assert!(!store.save(&Vec::new()));
    }
}
