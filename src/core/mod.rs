//! Core calculator value types.
//!
//! This module contains the pure data model of the calculator:
//! - Engine input state (`EngineState`)
//! - Immutable history records (`HistoryEntry`)
//! - The newest-first history log (`HistoryLog`)
//!
//! Nothing in this module performs I/O.

mod history;
mod state;

pub use history::{HistoryEntry, HistoryLog};
pub use state::{EngineState, ERROR_DISPLAY, ZERO_DISPLAY};
