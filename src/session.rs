//! A calculator session: one engine plus its history.

use crate::config::CalculatorConfig;
use crate::core::HistoryEntry;
use crate::engine::{ExpressionEngine, Key, KeyParseError};
use crate::storage::{FileStorage, HistoryStorage, HistoryStore};

/// Owns all mutable state of one calculator.
///
/// The presentation layer calls [`press`](Self::press) once per user
/// action and then re-renders from [`display`](Self::display),
/// [`expression`](Self::expression) and [`history`](Self::history).
///
/// # Example
///
/// ```rust
/// use calcore::storage::MemoryStorage;
/// use calcore::Calculator;
///
/// let mut calc = Calculator::new(MemoryStorage::new());
/// for label in ["2", "+", "3", "×", "4", "="] {
///     calc.press_label(label).unwrap();
/// }
///
/// assert_eq!(calc.display(), "14");
/// assert_eq!(calc.history()[0].expression, "2 + 3 * 4");
/// ```
#[derive(Debug)]
pub struct Calculator<S: HistoryStorage> {
    engine: ExpressionEngine,
    history: HistoryStore<S>,
}

impl<S: HistoryStorage> Calculator<S> {
    /// Start a session with default precision, loading persisted history.
    pub fn new(storage: S) -> Self {
        Self::with_engine(ExpressionEngine::new(), storage)
    }

    pub fn with_engine(engine: ExpressionEngine, storage: S) -> Self {
        Self {
            engine,
            history: HistoryStore::open(storage),
        }
    }

    /// Handle one user action.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.engine.input_digit_or_point(digit),
            Key::Point => self.engine.input_digit_or_point('.'),
            Key::Operator(op) => self.engine.apply_binary_operator(op),
            Key::Power => self.engine.apply_power(),
            Key::Function(function) => {
                if let Some(entry) = self.engine.apply_unary_function(function) {
                    self.history.append(entry);
                }
            }
            Key::Equals => {
                if let Some(entry) = self.engine.evaluate() {
                    self.history.append(entry);
                }
            }
            Key::Clear => self.engine.clear_all(),
            Key::Delete => self.engine.delete_last_char(),
            Key::ToggleSign => self.engine.toggle_sign(),
            Key::LoadHistory(id) => self.load_from_history(&id),
            Key::ClearHistory => self.clear_history(),
        }
    }

    /// Parse a button label and handle it.
    pub fn press_label(&mut self, label: &str) -> Result<(), KeyParseError> {
        let key = label.parse()?;
        self.press(key);
        Ok(())
    }

    /// Show the result of a history entry. Unknown ids are ignored.
    pub fn load_from_history(&mut self, id: &str) {
        if let Some(entry) = self.history.find(id) {
            self.engine.load_result(entry);
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn display(&self) -> &str {
        self.engine.display()
    }

    pub fn expression(&self) -> &str {
        self.engine.expression()
    }

    /// History entries, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }

    pub fn history_store(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// End the session, handing back the storage backend.
    pub fn into_storage(self) -> S {
        self.history.into_storage()
    }
}

impl Calculator<FileStorage> {
    /// Start a session with file-backed history, as configured.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::with_engine(
            ExpressionEngine::with_decimal_places(config.decimal_places),
            config.history_storage(),
        )
    }
}
