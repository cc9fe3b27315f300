//! File-backed [`KvStore`] for the demo binary.
//!
//! One JSON object per state file, rewritten in full after every mutation.
//! The state is tiny (three keys at most) so write-through is fine.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use mainmarket_core::{KvStore, StorageError};

const STATE_FILE: &str = "state.json";

/// Key-value store persisted as a single JSON object on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open (or create) the state file under `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing state file cannot be read or is not
    /// a JSON string map.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        let path = dir.join(STATE_FILE);
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(backend)?;
            serde_json::from_str(&raw)
                .map_err(|e| StorageError::Backend(format!("corrupt state file: {e}")))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Where the state file lives.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(backend)?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        fs::write(&self.path, raw).map_err(backend)
    }
}

fn backend(err: std::io::Error) -> StorageError {
    StorageError::Backend(err.to_string())
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = JsonFileStore::open(dir.path()).unwrap();
        store.set("theme", "dark").unwrap();
        store.set("currentUser", r#"{"id":1}"#).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(
            reopened.get("currentUser").unwrap().as_deref(),
            Some(r#"{"id":1}"#)
        );
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = JsonFileStore::open(dir.path()).unwrap();
        store.set("theme", "dark").unwrap();
        store.remove("theme").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert!(reopened.get("theme").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_state_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STATE_FILE), "not-json").unwrap();

        let result = JsonFileStore::open(dir.path());
        assert!(matches!(result, Err(StorageError::Backend(_))));
    }

    #[test]
    fn test_missing_dir_is_created_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("state");

        let mut store = JsonFileStore::open(&nested).unwrap();
        store.set("theme", "light").unwrap();
        assert!(nested.join(STATE_FILE).exists());
    }
}
