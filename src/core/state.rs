//! In-progress input state of the calculator engine.
//!
//! The state is a plain value: the engine mutates it, the presentation layer
//! only reads it.

use serde::{Deserialize, Serialize};

/// Display value shown after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

/// Display value of a freshly cleared engine.
pub const ZERO_DISPLAY: &str = "0";

/// The mutable triple describing in-progress calculator input.
///
/// `display` is never empty. `expression` holds the accumulated left-hand
/// side plus the pending operator, and is empty when nothing is pending.
///
/// # Example
///
/// ```rust
/// use calcore::core::EngineState;
///
/// let state = EngineState::new();
/// assert_eq!(state.display(), "0");
/// assert_eq!(state.expression(), "");
/// assert!(state.is_awaiting_new_number());
/// assert!(!state.is_error());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    pub(crate) display: String,
    pub(crate) expression: String,
    pub(crate) awaiting_new_number: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// Create the cleared state: display `"0"`, no pending expression.
    pub fn new() -> Self {
        Self {
            display: ZERO_DISPLAY.to_string(),
            expression: String::new(),
            awaiting_new_number: true,
        }
    }

    /// Primary display line.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Preview line: the pending left-hand side and operator.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Whether the next digit replaces the display instead of extending it.
    pub fn is_awaiting_new_number(&self) -> bool {
        self.awaiting_new_number
    }

    /// Whether the display shows the error marker.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// The complete input as it would be evaluated: pending expression
    /// followed by the current display.
    ///
    /// ```rust
    /// use calcore::core::EngineState;
    ///
    /// let state = EngineState::new();
    /// assert_eq!(state.full_expression(), "0");
    /// ```
    pub fn full_expression(&self) -> String {
        format!("{}{}", self.expression, self.display)
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn show(&mut self, display: String) {
        self.display = display;
        self.awaiting_new_number = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_cleared() {
        let state = EngineState::new();
        assert_eq!(state.display(), "0");
        assert!(state.expression().is_empty());
        assert!(state.is_awaiting_new_number());
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(EngineState::default(), EngineState::new());
    }

    #[test]
    fn is_error_detects_marker() {
        let mut state = EngineState::new();
        assert!(!state.is_error());

        state.show(ERROR_DISPLAY.to_string());
        assert!(state.is_error());
        assert!(state.is_awaiting_new_number());
    }

    #[test]
    fn full_expression_joins_pending_and_display() {
        let state = EngineState {
            display: "3".to_string(),
            expression: "2 + ".to_string(),
            awaiting_new_number: false,
        };
        assert_eq!(state.full_expression(), "2 + 3");
    }

    #[test]
    fn reset_restores_cleared_state() {
        let mut state = EngineState {
            display: "42".to_string(),
            expression: "1 * ".to_string(),
            awaiting_new_number: false,
        };
        state.reset();
        assert_eq!(state, EngineState::new());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = EngineState {
            display: "7.5".to_string(),
            expression: "2 ** ".to_string(),
            awaiting_new_number: false,
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
