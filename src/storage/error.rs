//! Persistence error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the history snapshot
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading, writing or removing the snapshot file failed
    #[error("Storage I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The stored snapshot is not a valid history log
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
