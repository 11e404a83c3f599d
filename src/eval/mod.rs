//! Arithmetic evaluation without dynamic code execution.
//!
//! The engine builds expression strings such as `2 + 3 * 4` or `2 ** 8`.
//! This module tokenizes and evaluates them over `f64` with a fixed
//! precedence table, and renders results for the display.

pub mod error;
mod format;
mod lexer;
mod parser;

pub use error::{EvalResult, EvaluationError};
pub use format::{
    format_number, parse_leading_number, round_to, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES,
};
pub use lexer::{Lexer, Spanned, Token};
pub use parser::{evaluate, Precedence};
