//! Calcore: the engine behind a keypad calculator
//!
//! Calcore keeps the interaction model of a scientific calculator free of
//! any user interface. A front end forwards button presses and renders
//! whatever the engine reports; calculation history is persisted as a
//! JSON snapshot so it survives restarts.
//!
//! # Core Concepts
//!
//! - **Engine**: builds an infix expression from keystrokes and evaluates
//!   it with ordinary precedence, without dynamic code execution
//! - **History**: an immutable, newest-first log of completed calculations
//! - **Storage**: pluggable backends holding the history snapshot
//!
//! # Example
//!
//! ```rust
//! use calcore::engine::{BinaryOperator, UnaryFunction};
//! use calcore::storage::MemoryStorage;
//! use calcore::{Calculator, Key};
//!
//! let mut calc = Calculator::new(MemoryStorage::new());
//! calc.press(Key::Digit('2'));
//! calc.press(Key::Operator(BinaryOperator::Add));
//! calc.press(Key::Digit('3'));
//! calc.press(Key::Equals);
//! assert_eq!(calc.display(), "5");
//!
//! calc.press(Key::Function(UnaryFunction::Square));
//! assert_eq!(calc.display(), "25");
//!
//! let history = calc.history();
//! assert_eq!(history[0].expression, "square(5)");
//! assert_eq!(history[1].expression, "2 + 3");
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod eval;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use core::{EngineState, HistoryEntry, HistoryLog};
pub use engine::{BinaryOperator, ExpressionEngine, Key, UnaryFunction};
pub use eval::EvaluationError;
pub use session::Calculator;
pub use storage::{FileStorage, HistoryStorage, HistoryStore, MemoryStorage, PersistenceError};
