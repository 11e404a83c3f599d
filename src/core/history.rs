//! Calculation history tracking.
//!
//! Provides immutable records of completed calculations and an ordered,
//! newest-first log of them, following functional programming principles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of a single completed calculation.
///
/// Entries are immutable values. They are created only when an evaluation
/// or a unary function succeeds.
///
/// # Example
///
/// ```rust
/// use calcore::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("2 + 3", "5");
/// assert_eq!(entry.expression, "2 + 3");
/// assert_eq!(entry.result, "5");
/// assert!(!entry.id.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique, time-ordered identifier
    pub id: String,
    /// Human-readable input that produced the result
    pub expression: String,
    /// Stringified numeric result
    pub result: String,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    ///
    /// Identifiers are UUID v7 values, so entries created later in the same
    /// process always compare greater.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered log of completed calculations, newest first.
///
/// The log is immutable - `record` returns a new log with the entry
/// prepended. It serializes as a bare array of entries.
///
/// # Example
///
/// ```rust
/// use calcore::core::{HistoryEntry, HistoryLog};
///
/// let log = HistoryLog::new();
/// let log = log.record(HistoryEntry::new("2 + 3", "5"));
/// let log = log.record(HistoryEntry::new("sqrt(16)", "4"));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.entries()[0].expression, "sqrt(16)");
/// assert_eq!(log.entries()[1].expression, "2 + 3");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create a new empty log.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcore::core::HistoryLog;
    ///
    /// let log = HistoryLog::new();
    /// assert!(log.is_empty());
    /// assert!(log.latest().is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new log with it at the front.
    ///
    /// This is a pure function - the existing log is left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcore::core::{HistoryEntry, HistoryLog};
    ///
    /// let log = HistoryLog::new();
    /// let new_log = log.record(HistoryEntry::new("1 + 1", "2"));
    ///
    /// assert_eq!(new_log.len(), 1);
    /// assert_eq!(log.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        Self { entries }
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Look up an entry by id.
    ///
    /// ```rust
    /// use calcore::core::{HistoryEntry, HistoryLog};
    ///
    /// let entry = HistoryEntry::new("6 / 3", "2");
    /// let id = entry.id.clone();
    /// let log = HistoryLog::new().record(entry);
    ///
    /// assert_eq!(log.find(&id).map(|e| e.result.as_str()), Some("2"));
    /// assert!(log.find("missing").is_none());
    /// ```
    pub fn find(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time elapsed between the oldest and the newest entry.
    ///
    /// Returns `None` for an empty log, or when the newest entry is stamped
    /// before the oldest (a clock step backwards).
    pub fn span(&self) -> Option<Duration> {
        let (newest, oldest) = (self.entries.first()?, self.entries.last()?);
        newest
            .timestamp
            .signed_duration_since(oldest.timestamp)
            .to_std()
            .ok()
    }
}
