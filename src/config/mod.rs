//! Calculator configuration.
//!
//! Configuration is a small TOML document; every field has a default, so an
//! empty file is valid:
//!
//! ```toml
//! decimal_places = 8
//! history_dir = "/home/me/.local/share/calcore"
//! ```

use crate::eval::DEFAULT_DECIMAL_PLACES;
use crate::storage::FileStorage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use stillwater::validation::Validation;

pub mod error;
pub mod rules;

pub use error::{ConfigError, ConfigViolation};

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "calcore";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Decimal places results are rounded to
    pub decimal_places: u32,
    /// Directory holding the history snapshot
    pub history_dir: PathBuf,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            history_dir: default_history_dir(),
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a TOML document.
    ///
    /// ```rust
    /// use calcore::config::CalculatorConfig;
    ///
    /// let config = CalculatorConfig::from_toml_str("decimal_places = 4").unwrap();
    /// assert_eq!(config.decimal_places, 4);
    ///
    /// assert!(CalculatorConfig::from_toml_str("decimal_places = 40").is_err());
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Like [`load`](Self::load), falling back to defaults when the file is
    /// missing or invalid.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring config at {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    /// Check every rule, reporting all violations together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match rules::check(self) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Storage backend for the configured history directory.
    pub fn history_storage(&self) -> FileStorage {
        FileStorage::in_dir(&self.history_dir)
    }
}

fn default_history_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
