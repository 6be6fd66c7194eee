use crate::core::KeyValueStore;
use crate::utils::error::{RaffleError, Result};
use crate::utils::validation::validate_storage_key;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// In-process store, mostly for tests and one-off sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|e| RaffleError::StorageError {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|e| RaffleError::StorageError {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each key as `<base_path>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_storage_key("storage key", key).map_err(|e| RaffleError::StorageError {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let full_path = self.path_for(key)?;
        match fs::read_to_string(&full_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes to a temporary file next to the target and renames it into place,
    /// so readers see either the old value or the new one.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let full_path = self.path_for(key)?;
        let dir = full_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(value.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&full_path).map_err(|e| e.error)?;

        tracing::debug!("Wrote {} bytes to {}", value.len(), full_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("examWinners").unwrap(), None);

        store.set("examWinners", "[]").unwrap();
        assert_eq!(store.get("examWinners").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("nested").join("data"));

        assert_eq!(store.get("examWinners").unwrap(), None);
        store.set("examWinners", r#"[{"name":"Ana"}]"#).unwrap();

        let on_disk = temp_dir.path().join("nested/data/examWinners.json");
        assert!(on_disk.exists());
        assert_eq!(
            store.get("examWinners").unwrap().as_deref(),
            Some(r#"[{"name":"Ana"}]"#)
        );
    }

    #[test]
    fn test_file_store_overwrite_leaves_no_staging_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        store.set("examWinners", r#"[{"name":"Ana"}]"#).unwrap();
        store.set("examWinners", "[]").unwrap();

        assert_eq!(store.get("examWinners").unwrap().as_deref(), Some("[]"));
        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("examWinners.json")]);
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        let err = store.set("../outside", "[]").unwrap_err();
        assert!(matches!(err, RaffleError::StorageError { .. }));
        assert!(store.get("").is_err());
    }
}
