//! Key-value blob storage backing the catalog.
//!
//! The catalog only needs two operations: read a string stored under a key and
//! replace it. [`MemoryStorage`] keeps everything in process; [`FileStorage`]
//! mirrors the whole key space into a single JSON object file on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::CatalogError;

pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), CatalogError>;
}

/// Storage that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a single key already populated.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.into(), value.into());
        MemoryStorage { entries }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), CatalogError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Storage persisted as a JSON object (`{"key": "value", ...}`) in one file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the storage file at `path`.
    ///
    /// A missing file is an empty store. A file that is not a JSON object of
    /// strings is treated as empty too and gets replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(content) => match serde_json::from_slice(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(
                        "Ignoring unreadable storage file {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No storage file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(FileStorage { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), CatalogError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write next to the target and rename so a crash never leaves half a file
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_string_pretty(&self.entries)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Wrote storage file {}", self.path.display());
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), CatalogError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_get_set() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("recipes").unwrap(), None);

        storage.set("recipes", "[]".to_string()).unwrap();
        assert_eq!(storage.get("recipes").unwrap().as_deref(), Some("[]"));

        storage.set("recipes", "[1]".to_string()).unwrap();
        assert_eq!(storage.get("recipes").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("store.json")).unwrap();
        assert_eq!(storage.get("recipes").unwrap(), None);
    }

    #[test]
    fn test_file_storage_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set("recipes", "[]".to_string()).unwrap();
        storage.set("other", "x".to_string()).unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("recipes").unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_storage_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let mut storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("recipes").unwrap(), None);

        storage.set("recipes", "[]".to_string()).unwrap();
        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("recipes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_storage_non_utf8_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("recipes").unwrap(), None);
    }
}
