//! The calculator's input surface.

use crate::engine::error::KeyParseError;
use crate::engine::operator::{BinaryOperator, UnaryFunction};
use std::str::FromStr;

/// Prefix of the label form of [`Key::LoadHistory`], e.g. `history:<id>`.
pub const HISTORY_KEY_PREFIX: &str = "history:";

/// One user action. The presentation layer sends exactly one key per
/// button activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit `0`-`9`
    Digit(char),
    /// The decimal point
    Point,
    Operator(BinaryOperator),
    /// The `x^y` shortcut
    Power,
    Function(UnaryFunction),
    /// All-clear (`AC`)
    Clear,
    /// Backspace
    Delete,
    /// `+/−`
    ToggleSign,
    Equals,
    /// Put a history entry's result back on the display
    LoadHistory(String),
    ClearHistory,
}

impl FromStr for Key {
    type Err = KeyParseError;

    /// Parse a button label.
    ///
    /// ```rust
    /// use calcore::engine::{BinaryOperator, Key, UnaryFunction};
    ///
    /// assert_eq!("7".parse(), Ok(Key::Digit('7')));
    /// assert_eq!("×".parse(), Ok(Key::Operator(BinaryOperator::Multiply)));
    /// assert_eq!("√".parse(), Ok(Key::Function(UnaryFunction::Sqrt)));
    /// assert_eq!("AC".parse(), Ok(Key::Clear));
    /// assert!("%".parse::<Key>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Ok(Key::Digit(c));
            }
        }

        if let Some(id) = s.strip_prefix(HISTORY_KEY_PREFIX) {
            if id.is_empty() {
                return Err(KeyParseError::MissingHistoryId);
            }
            return Ok(Key::LoadHistory(id.to_string()));
        }

        match s {
            "." => return Ok(Key::Point),
            "=" | "Enter" => return Ok(Key::Equals),
            "AC" | "C" | "Escape" => return Ok(Key::Clear),
            "⌫" | "DEL" | "Backspace" => return Ok(Key::Delete),
            "+/−" | "+/-" | "±" => return Ok(Key::ToggleSign),
            "x^y" | "xʸ" | "pow" | "**" | "^" => return Ok(Key::Power),
            "clear-history" => return Ok(Key::ClearHistory),
            _ => {}
        }

        if let Ok(op) = s.parse::<BinaryOperator>() {
            return Ok(Key::Operator(op));
        }
        if let Ok(function) = s.parse::<UnaryFunction>() {
            return Ok(Key::Function(function));
        }

        Err(KeyParseError::UnknownKey(s.to_string()))
    }
}
