//! History persistence.
//!
//! The history log survives process restarts as a JSON snapshot stored
//! under a single well-known key. Backends implement [`HistoryStorage`];
//! [`HistoryStore`] layers the in-memory log and write-through saving on
//! top of any backend.

use crate::core::HistoryLog;

pub mod error;
mod file;
mod memory;
mod snapshot;
mod store;

pub use error::PersistenceError;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use snapshot::HISTORY_KEY;
pub use store::HistoryStore;

/// A place the history snapshot can be kept.
pub trait HistoryStorage {
    /// Read the snapshot. `Ok(None)` when nothing has been stored.
    fn load(&self) -> Result<Option<HistoryLog>, PersistenceError>;

    /// Replace the snapshot with `log`.
    fn save(&mut self, log: &HistoryLog) -> Result<(), PersistenceError>;

    /// Remove the snapshot entirely.
    fn clear(&mut self) -> Result<(), PersistenceError>;
}

impl<S: HistoryStorage + ?Sized> HistoryStorage for Box<S> {
    fn load(&self) -> Result<Option<HistoryLog>, PersistenceError> {
        (**self).load()
    }

    fn save(&mut self, log: &HistoryLog) -> Result<(), PersistenceError> {
        (**self).save(log)
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        (**self).clear()
    }
}
