//! Configuration error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A single configuration rule that failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("decimal_places must be at most {max} (found {found})")]
    DecimalPlacesTooLarge { found: u32, max: u32 },

    #[error("history_dir must not be empty")]
    EmptyHistoryDir,

    #[error("history_dir must be a directory, not a .json file: {0}")]
    HistoryDirIsFile(PathBuf),
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// Every violated rule, not just the first
    #[error("Invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
