//! The expression engine and its input vocabulary.
//!
//! # Key Concepts
//!
//! - **Engine**: mutates [`EngineState`](crate::core::EngineState) one
//!   keystroke at a time and returns history entries for completed
//!   calculations
//! - **Operators and functions**: typed forms of the calculator buttons
//! - **Keys**: the full input surface, parseable from button labels

pub mod error;
mod expression;
mod key;
mod operator;

pub use error::KeyParseError;
pub use expression::ExpressionEngine;
pub use key::{Key, HISTORY_KEY_PREFIX};
pub use operator::{BinaryOperator, UnaryFunction};
