//! Input parsing errors.

use thiserror::Error;

/// Errors that can occur when reading presentation-layer input labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("Unknown key label '{0}'")]
    UnknownKey(String),

    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    #[error("History key requires an entry id")]
    MissingHistoryId,
}
