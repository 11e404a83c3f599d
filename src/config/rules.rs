//! Validation rules for calculator configuration.
//!
//! Uses Stillwater's `Validation` so that a bad config file reports every
//! problem in one pass.

use crate::config::error::ConfigViolation;
use crate::config::CalculatorConfig;
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub use crate::eval::MAX_DECIMAL_PLACES;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Run every rule, accumulating ALL violations.
pub fn check(config: &CalculatorConfig) -> Check {
    let checks = vec![
        check_decimal_places(config.decimal_places),
        check_history_dir(&config.history_dir),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn check_decimal_places(places: u32) -> Check {
    if places > MAX_DECIMAL_PLACES {
        Validation::fail(ConfigViolation::DecimalPlacesTooLarge {
            found: places,
            max: MAX_DECIMAL_PLACES,
        })
    } else {
        Validation::success(())
    }
}

fn check_history_dir(dir: &Path) -> Check {
    if dir.as_os_str().is_empty() {
        Validation::fail(ConfigViolation::EmptyHistoryDir)
    } else if dir.extension().is_some_and(|ext| ext == "json") {
        Validation::fail(ConfigViolation::HistoryDirIsFile(dir.to_path_buf()))
    } else {
        Validation::success(())
    }
}
