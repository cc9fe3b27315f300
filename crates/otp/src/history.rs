//! Bounded, persisted OTP history.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mainmarket_core::storage::{self, keys};
use mainmarket_core::{KvStore, OtpCode, StorageError};

/// Maximum number of records kept; older records are evicted.
pub const HISTORY_LIMIT: usize = 10;

/// Which entry path produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpSource {
    /// Detected by the platform credential API.
    Automatic,
    /// Typed into the manual entry field.
    Manual,
    /// Generated by the synthetic test path.
    Test,
}

impl OtpSource {
    /// Human-readable label used in status text and the history list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Automatic => "automatic detection",
            Self::Manual => "manual input",
            Self::Test => "test generator",
        }
    }
}

impl fmt::Display for OtpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One detected code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// The validated code.
    pub code: OtpCode,
    /// Capture instant.
    pub timestamp: DateTime<Utc>,
    /// Entry path that produced the code.
    pub source: OtpSource,
}

impl OtpRecord {
    /// Create a record captured now.
    #[must_use]
    pub fn captured_now(code: OtpCode, source: OtpSource) -> Self {
        Self {
            code,
            timestamp: Utc::now(),
            source,
        }
    }
}

/// Newest-first sequence of at most [`HISTORY_LIMIT`] records.
///
/// Records are never individually deleted - only evicted off the tail by
/// the cap, or destroyed wholesale by clearing the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OtpHistory(Vec<OtpRecord>);

impl OtpHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load persisted history from a store.
    ///
    /// A missing key yields an empty history. A corrupt blob is logged and
    /// treated as empty rather than wedging the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn load(store: &impl KvStore) -> Result<Self, StorageError> {
        match storage::get_json(store, keys::OTP_HISTORY) {
            Ok(history) => Ok(history.unwrap_or_default()),
            Err(StorageError::Deserialize { key, source }) => {
                tracing::warn!(key, error = %source, "discarding corrupt OTP history");
                Ok(Self::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Persist the history. Called after every insertion.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails.
    pub fn persist(&self, store: &mut impl KvStore) -> Result<(), StorageError> {
        storage::set_json(store, keys::OTP_HISTORY, self)
    }

    /// Prepend a record and truncate to the cap.
    pub fn record(&mut self, record: OtpRecord) {
        self.0.insert(0, record);
        self.0.truncate(HISTORY_LIMIT);
    }

    /// Records, newest first.
    #[must_use]
    pub fn records(&self) -> &[OtpRecord] {
        &self.0
    }

    /// The most recent record.
    #[must_use]
    pub fn latest(&self) -> Option<&OtpRecord> {
        self.0.first()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the history holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mainmarket_core::MemoryStore;

    fn record(code: &str) -> OtpRecord {
        OtpRecord::captured_now(OtpCode::parse(code).unwrap(), OtpSource::Test)
    }

    #[test]
    fn test_newest_first_and_capped() {
        let mut history = OtpHistory::new();
        for i in 0..11 {
            history.record(record(&format!("{:04}", 1000 + i)));
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        // Newest at index 0, the very first insert evicted.
        assert_eq!(history.latest().unwrap().code.as_str(), "1010");
        assert!(
            history
                .records()
                .iter()
                .all(|r| r.code.as_str() != "1000")
        );
    }

    #[test]
    fn test_persist_roundtrip() {
        let mut store = MemoryStore::new();
        let mut history = OtpHistory::new();
        history.record(record("1234"));
        history.record(record("5678"));
        history.persist(&mut store).unwrap();

        let loaded = OtpHistory::load(&store).unwrap();
        assert_eq!(loaded, history);
        assert_eq!(loaded.latest().unwrap().code.as_str(), "5678");
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(OtpHistory::load(&store).unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupt_blob_is_empty() {
        let mut store = MemoryStore::new();
        store.set(keys::OTP_HISTORY, "{not json").unwrap();
        assert!(OtpHistory::load(&store).unwrap().is_empty());
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(OtpSource::Automatic.label(), "automatic detection");
        assert_eq!(OtpSource::Manual.to_string(), "manual input");
        assert_eq!(
            serde_json::to_string(&OtpSource::Automatic).unwrap(),
            "\"automatic\""
        );
    }
}
