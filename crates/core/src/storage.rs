//! Key-value storage abstraction.
//!
//! The browser original keeps all persistent state in origin-scoped local
//! storage. Controllers here depend on the [`KvStore`] trait instead, so
//! they can run against the in-memory backend in tests and a file-backed
//! backend in the CLI demo.
//!
//! Writes are synchronous and last-writer-wins; there is exactly one
//! logical writer per store, so no locking discipline is needed.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Well-known storage keys.
pub mod keys {
    /// Serialized OTP history (newest-first, at most 10 records).
    pub const OTP_HISTORY: &str = "otpHistory";

    /// Serialized logged-in user blob, absent when logged out.
    pub const CURRENT_USER: &str = "currentUser";

    /// Theme preference ("dark" or "light").
    pub const THEME: &str = "theme";
}

/// Errors that can occur when reading or writing a store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store failed (I/O, quota, ...).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A value could not be serialized for storage.
    #[error("failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    /// A stored value could not be deserialized.
    #[error("failed to deserialize value for key {key}: {source}")]
    Deserialize {
        key: String,
        source: serde_json::Error,
    },
}

/// String key-value store with the surface of browser local storage.
pub trait KvStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`; removing a missing key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Read and deserialize a JSON value from a store.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the stored value is not
/// valid JSON for `T`.
pub fn get_json<T: DeserializeOwned>(
    store: &impl KvStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    store
        .get(key)?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|source| StorageError::Deserialize {
                key: key.to_owned(),
                source,
            })
        })
        .transpose()
}

/// Serialize a value to JSON and store it.
///
/// # Errors
///
/// Returns an error if serialization fails or the store cannot be written.
pub fn set_json<T: Serialize>(
    store: &mut impl KvStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_owned(),
        source,
    })?;
    store.set(key, &raw)
}

/// In-memory [`KvStore`] used in tests and as a throwaway session store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
