//! JSON file storage backend.

use crate::core::HistoryLog;
use crate::storage::error::PersistenceError;
use crate::storage::snapshot::{self, HISTORY_KEY};
use crate::storage::HistoryStorage;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores the snapshot as a JSON file.
///
/// A missing file means "no history". Writes go to a `.tmp` sibling first
/// and are renamed into place, so a crash mid-write never leaves a
/// truncated snapshot behind.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at `<dir>/calculator-history.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{HISTORY_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl HistoryStorage for FileStorage {
    fn load(&self) -> Result<Option<HistoryLog>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => snapshot::decode(&raw).map(Some),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::io(&self.path, err)),
        }
    }

    fn save(&mut self, log: &HistoryLog) -> Result<(), PersistenceError> {
        let json = snapshot::encode(log)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|e| PersistenceError::io(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| PersistenceError::io(&self.path, e))
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(PersistenceError::io(&self.path, err)),
        }
    }
}
