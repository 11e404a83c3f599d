//! Keystroke-driven expression engine.

use crate::core::{EngineState, HistoryEntry, ERROR_DISPLAY, ZERO_DISPLAY};
use crate::engine::operator::{BinaryOperator, UnaryFunction};
use crate::eval::{
    self, format_number, parse_leading_number, round_to, EvaluationError,
    DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES,
};
use tracing::debug;

/// Builds expressions from keystrokes and evaluates them.
///
/// Operations that complete a calculation return the [`HistoryEntry`] they
/// produced; recording it is up to the caller. Failures never escape: they
/// show `"Error"` on the display.
///
/// # Example
///
/// ```rust
/// use calcore::engine::{BinaryOperator, ExpressionEngine};
///
/// let mut engine = ExpressionEngine::new();
/// engine.input_digit_or_point('2');
/// engine.apply_binary_operator(BinaryOperator::Add);
/// engine.input_digit_or_point('3');
/// assert_eq!(engine.expression(), "2 + ");
///
/// let entry = engine.evaluate().unwrap();
/// assert_eq!(entry.expression, "2 + 3");
/// assert_eq!(entry.result, "5");
/// assert_eq!(engine.display(), "5");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionEngine {
    state: EngineState,
    decimal_places: u32,
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine {
    /// Create an engine that rounds results to eight decimal places.
    pub fn new() -> Self {
        Self::with_decimal_places(DEFAULT_DECIMAL_PLACES)
    }

    /// Create an engine with the given precision, capped at
    /// [`MAX_DECIMAL_PLACES`].
    ///
    /// ```rust
    /// use calcore::engine::ExpressionEngine;
    /// use calcore::eval::MAX_DECIMAL_PLACES;
    ///
    /// assert_eq!(ExpressionEngine::with_decimal_places(4).decimal_places(), 4);
    /// assert_eq!(
    ///     ExpressionEngine::with_decimal_places(400).decimal_places(),
    ///     MAX_DECIMAL_PLACES
    /// );
    /// ```
    pub fn with_decimal_places(decimal_places: u32) -> Self {
        if decimal_places > MAX_DECIMAL_PLACES {
            debug!(
                requested = decimal_places,
                max = MAX_DECIMAL_PLACES,
                "capping decimal places"
            );
        }
        Self {
            state: EngineState::new(),
            decimal_places: decimal_places.min(MAX_DECIMAL_PLACES),
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn expression(&self) -> &str {
        self.state.expression()
    }

    pub fn is_awaiting_new_number(&self) -> bool {
        self.state.is_awaiting_new_number()
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Type a digit or the decimal point.
    ///
    /// Right after an operator, result or clear, the token replaces the
    /// display. Otherwise it is appended, except that a second point is
    /// ignored and a digit replaces a lone `"0"`. Other characters are
    /// ignored.
    pub fn input_digit_or_point(&mut self, token: char) {
        if !(token.is_ascii_digit() || token == '.') {
            return;
        }

        let state = &mut self.state;
        if state.awaiting_new_number {
            state.display = token.to_string();
            state.awaiting_new_number = false;
            return;
        }

        if token == '.' && state.display.contains('.') {
            return;
        }

        if token != '.' && state.display == ZERO_DISPLAY {
            state.display = token.to_string();
        } else {
            state.display.push(token);
        }
    }

    /// Queue the display value and `op`. Nothing is evaluated yet.
    pub fn apply_binary_operator(&mut self, op: BinaryOperator) {
        self.push_operator(op.symbol());
    }

    /// Queue the display value as the base of an exponentiation.
    pub fn apply_power(&mut self) {
        self.push_operator("**");
    }

    fn push_operator(&mut self, symbol: &str) {
        let state = &mut self.state;
        state.expression.push_str(&state.display);
        state.expression.push(' ');
        state.expression.push_str(symbol);
        state.expression.push(' ');
        state.awaiting_new_number = true;
    }

    /// Evaluate the pending expression followed by the display value.
    ///
    /// On success the rounded result replaces the display and an entry is
    /// returned. On failure the display shows `"Error"`. Both outcomes clear
    /// the pending expression.
    ///
    /// ```rust
    /// use calcore::engine::{BinaryOperator, ExpressionEngine};
    ///
    /// let mut engine = ExpressionEngine::new();
    /// engine.input_digit_or_point('5');
    /// engine.apply_binary_operator(BinaryOperator::Divide);
    /// engine.input_digit_or_point('0');
    ///
    /// let entry = engine.evaluate().unwrap();
    /// assert_eq!(entry.result, "Infinity");
    /// ```
    pub fn evaluate(&mut self) -> Option<HistoryEntry> {
        let full_expression = self.state.full_expression();
        let outcome = eval::evaluate(&full_expression);
        self.state.expression.clear();

        match outcome {
            Ok(value) => {
                let result = format_number(round_to(value, self.decimal_places));
                debug!(expression = %full_expression, %result, "evaluated expression");
                self.state.show(result.clone());
                Some(HistoryEntry::new(full_expression, result))
            }
            Err(err) => {
                debug!(expression = %full_expression, error = %err, "evaluation failed");
                self.state.show(ERROR_DISPLAY.to_string());
                None
            }
        }
    }

    /// Apply a scientific function to the display value.
    ///
    /// A finite result replaces the display and yields an entry such as
    /// `sqrt(2) = 1.41421356`. An unreadable display or a non-finite result
    /// shows `"Error"` and leaves the pending expression in place.
    ///
    /// ```rust
    /// use calcore::engine::{ExpressionEngine, UnaryFunction};
    ///
    /// let mut engine = ExpressionEngine::new();
    /// engine.input_digit_or_point('2');
    ///
    /// let entry = engine.apply_unary_function(UnaryFunction::Sqrt).unwrap();
    /// assert_eq!(entry.expression, "sqrt(2)");
    /// assert_eq!(engine.display(), "1.41421356");
    /// ```
    pub fn apply_unary_function(&mut self, function: UnaryFunction) -> Option<HistoryEntry> {
        match self.compute_unary(function) {
            Ok((operand, value)) => {
                let expression = format!("{}({})", function.label(), format_number(operand));
                let result = format_number(value);
                debug!(%expression, %result, "applied function");
                self.state.show(result.clone());
                Some(HistoryEntry::new(expression, result))
            }
            Err(err) => {
                debug!(display = %self.state.display, error = %err, "function failed");
                self.state.show(ERROR_DISPLAY.to_string());
                None
            }
        }
    }

    fn compute_unary(&self, function: UnaryFunction) -> Result<(f64, f64), EvaluationError> {
        let display = &self.state.display;
        let operand = parse_leading_number(display)
            .ok_or_else(|| EvaluationError::NotANumber(display.clone()))?;

        let value = round_to(function.apply(operand), self.decimal_places);
        if value.is_finite() {
            Ok((operand, value))
        } else {
            Err(EvaluationError::NonFinite {
                function: function.label().to_string(),
                operand: format_number(operand),
            })
        }
    }

    /// Reset to display `"0"` with nothing pending.
    pub fn clear_all(&mut self) {
        self.state.reset();
    }

    /// Backspace. A single remaining character becomes `"0"`.
    pub fn delete_last_char(&mut self) {
        let state = &mut self.state;
        if state.display.chars().count() <= 1 {
            state.show(ZERO_DISPLAY.to_string());
        } else {
            state.display.pop();
        }
    }

    /// Add or strip a leading minus sign. Does nothing on `"0"`.
    ///
    /// Stripping the sign from a lone `"-"` resets the display to `"0"`.
    pub fn toggle_sign(&mut self) {
        let state = &mut self.state;
        if state.display == ZERO_DISPLAY {
            return;
        }
        match state.display.strip_prefix('-') {
            Some("") => state.show(ZERO_DISPLAY.to_string()),
            Some(positive) => state.display = positive.to_string(),
            None => state.display = format!("-{}", state.display),
        }
    }

    /// Show a previous result. Nothing is recomputed.
    pub fn load_result(&mut self, entry: &HistoryEntry) {
        self.state.expression.clear();
        self.state.show(entry.result.clone());
    }
}
