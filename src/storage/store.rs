//! The history store: in-memory log plus write-through persistence.

use crate::core::{HistoryEntry, HistoryLog};
use crate::storage::HistoryStorage;
use tracing::{debug, info, warn};

/// Owns the history log and keeps the persisted snapshot in step with it.
///
/// Every `append` and `clear` updates the backend before returning.
/// Backend failures are logged and otherwise ignored: the in-memory log
/// stays authoritative for the session.
///
/// # Example
///
/// ```rust
/// use calcore::core::HistoryEntry;
/// use calcore::storage::{HistoryStore, MemoryStorage};
///
/// let mut store = HistoryStore::open(MemoryStorage::new());
/// store.append(HistoryEntry::new("2 + 3", "5"));
/// store.append(HistoryEntry::new("sqrt(16)", "4"));
///
/// assert_eq!(store.entries()[0].expression, "sqrt(16)");
///
/// // Simulate a restart
/// let store = HistoryStore::open(store.into_storage());
/// assert_eq!(store.entries().len(), 2);
/// ```
#[derive(Debug)]
pub struct HistoryStore<S: HistoryStorage> {
    log: HistoryLog,
    storage: S,
}

impl<S: HistoryStorage> HistoryStore<S> {
    /// Open a store, loading whatever the backend has persisted.
    pub fn open(storage: S) -> Self {
        let log = load_or_empty(&storage);
        debug!(entries = log.len(), "opened history store");
        Self { log, storage }
    }

    /// Prepend an entry and persist the whole log.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.log = self.log.record(entry);
        if let Err(err) = self.storage.save(&self.log) {
            warn!(error = %err, "failed to persist calculation history");
        }
    }

    /// Read the persisted log from the backend.
    ///
    /// Missing or corrupt snapshots read as an empty log. The in-memory log
    /// is not touched; see [`reload`](Self::reload).
    pub fn load_all(&self) -> HistoryLog {
        load_or_empty(&self.storage)
    }

    /// Replace the in-memory log with the persisted one.
    pub fn reload(&mut self) {
        self.log = self.load_all();
    }

    /// Empty the log and remove the persisted snapshot.
    pub fn clear(&mut self) {
        self.log = HistoryLog::new();
        match self.storage.clear() {
            Ok(()) => info!("cleared calculation history"),
            Err(err) => warn!(error = %err, "failed to remove persisted history"),
        }
    }

    pub fn log(&self) -> &HistoryLog {
        &self.log
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        self.log.entries()
    }

    pub fn find(&self, id: &str) -> Option<&HistoryEntry> {
        self.log.find(id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn load_or_empty<S: HistoryStorage>(storage: &S) -> HistoryLog {
    match storage.load() {
        Ok(Some(log)) => log,
        Ok(None) => HistoryLog::new(),
        Err(err) => {
            warn!(error = %err, "discarding unreadable history snapshot");
            HistoryLog::new()
        }
    }
}
