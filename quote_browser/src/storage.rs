//! Durable key-value storage for small string values.
//!
//! `KeyValueStorage` is the slot the favorites store persists into. Two backends are
//! provided:
//!
//! - `MemoryStorage` — a plain `HashMap`, used by tests and throwaway sessions.
//! - `FileStorage` — a JSON object on disk (`{"key": "value", ...}`). Every `set`
//!   rewrites the whole file immediately, so the file always reflects the last write.
//!
//! Values are opaque strings; encoding them (JSON lists, etc.) is the caller's job.
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use quote_common::Result;

/// String key to string value storage.
pub trait KeyValueStorage {
    /// Reads the value stored under `key`, `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage that forgets everything on drop.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a single JSON file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    /// Open the storage file at `path`.
    ///
    /// A missing file is treated as empty storage; it is created on the first `set`.
    /// A file that exists but is not a JSON object of strings is an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.is_file() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            HashMap::new()
        };
        debug!("Opened storage {} with {} keys", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)?;
        self.entries = entries;
        debug!("Stored key {} in {}", key, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::QuoteError;

    #[test]
    fn test_memory_storage_get_set() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "[1,2]").unwrap();
        storage.set("k", "[3]").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("[3]"));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(storage.get("anything").unwrap(), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set("qutera_favorites", "[5]").unwrap();
        assert!(path.is_file());

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(
            reopened.get("qutera_favorites").unwrap().as_deref(),
            Some("[5]")
        );
    }

    #[test]
    fn test_file_storage_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStorage::open(&path).unwrap_err();
        assert!(matches!(err, QuoteError::Json(_)));
    }

    #[test]
    fn test_file_storage_failed_write_keeps_entries() {
        let dir = tempfile::tempdir().unwrap();
        // The target path is a directory, so writing the file fails.
        let path = dir.path().join("store.json");
        let mut storage = FileStorage::open(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(matches!(storage.set("k", "v"), Err(QuoteError::Io(_))));
        assert_eq!(storage.get("k").unwrap(), None);
    }
}
