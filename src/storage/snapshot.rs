//! JSON snapshot format of the history log.

use crate::core::HistoryLog;
use crate::storage::error::PersistenceError;

/// Well-known key the snapshot is stored under.
pub const HISTORY_KEY: &str = "calculator-history";

pub fn encode(log: &HistoryLog) -> Result<String, PersistenceError> {
    serde_json::to_string(log).map_err(|e| PersistenceError::SerializationFailed(e.to_string()))
}

pub fn decode(raw: &str) -> Result<HistoryLog, PersistenceError> {
    serde_json::from_str(raw).map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))
}
