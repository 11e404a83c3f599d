//! In-memory storage backend.

use crate::core::HistoryLog;
use crate::storage::error::PersistenceError;
use crate::storage::snapshot;
use crate::storage::HistoryStorage;

/// Keeps the serialized snapshot in memory.
///
/// The raw JSON text is stored rather than the log itself, so the
/// round trip through the snapshot format is the same as on disk.
///
/// # Example
///
/// ```rust
/// use calcore::storage::{HistoryStorage, MemoryStorage};
///
/// let storage = MemoryStorage::with_snapshot("not json");
/// assert!(storage.load().is_err());
///
/// let storage = MemoryStorage::new();
/// assert!(storage.load().unwrap().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    snapshot: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self { snapshot: None }
    }

    /// Start from an existing raw snapshot, valid or not.
    pub fn with_snapshot(raw: impl Into<String>) -> Self {
        Self {
            snapshot: Some(raw.into()),
        }
    }

    /// The stored snapshot text, if any.
    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl HistoryStorage for MemoryStorage {
    fn load(&self) -> Result<Option<HistoryLog>, PersistenceError> {
        self.snapshot.as_deref().map(snapshot::decode).transpose()
    }

    fn save(&mut self, log: &HistoryLog) -> Result<(), PersistenceError> {
        self.snapshot = Some(snapshot::encode(log)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        self.snapshot = None;
        Ok(())
    }
}
