//! Evaluation error types.

use thiserror::Error;

/// Errors that can occur while evaluating calculator input.
///
/// The engine collapses every variant into the `"Error"` display value; the
/// detail only reaches logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// Input contained no tokens at all
    #[error("Empty expression")]
    EmptyExpression,

    /// A character that starts no token
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    /// A token in a position the grammar does not allow
    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    /// Input ended where an operand was required
    #[error("Expression ended where an operand was expected")]
    UnexpectedEnd,

    /// A numeric literal that does not parse as a float
    #[error("Invalid number literal '{0}'")]
    InvalidNumber(String),

    /// A name other than `Infinity` or `NaN`
    #[error("Unknown identifier '{0}'")]
    UnknownIdentifier(String),

    /// The display value of a unary function is not a number
    #[error("Cannot read '{0}' as a number")]
    NotANumber(String),

    /// A unary function produced infinity or NaN
    #[error("{function}({operand}) is not a finite number")]
    NonFinite { function: String, operand: String },
}

pub type EvalResult<T> = Result<T, EvaluationError>;
