//! Binary operators and unary scientific functions.

use crate::engine::error::KeyParseError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// One of the four arithmetic infix operators.
///
/// Parsed from either ASCII (`+ - * /`) or button glyphs (`+ − × ÷`);
/// always written into expressions as ASCII.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// ASCII form used inside expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Glyph shown on the calculator button.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOperator {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "*" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            other => Err(KeyParseError::UnknownOperator(other.to_string())),
        }
    }
}

/// A single-operand scientific transform applied to the display value.
///
/// Trigonometric functions take their argument in degrees.
///
/// # Example
///
/// ```rust
/// use calcore::engine::UnaryFunction;
///
/// assert_eq!(UnaryFunction::Square.apply(3.0), 9.0);
/// assert_eq!(UnaryFunction::Log10.apply(100.0), 2.0);
/// assert_eq!(UnaryFunction::Reciprocal.label(), "1/x");
/// assert_eq!("√".parse::<UnaryFunction>(), Ok(UnaryFunction::Sqrt));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Square,
    Log10,
    Ln,
    Reciprocal,
    Exp,
}

impl UnaryFunction {
    pub const ALL: [Self; 9] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Square,
        Self::Log10,
        Self::Ln,
        Self::Reciprocal,
        Self::Exp,
    ];

    /// Name recorded in history expressions, e.g. `log(100)`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Reciprocal => "1/x",
            Self::Exp => "exp",
        }
    }

    /// Apply the function. No rounding, no finiteness check.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => to_radians(x).sin(),
            Self::Cos => to_radians(x).cos(),
            Self::Tan => to_radians(x).tan(),
            Self::Sqrt => x.sqrt(),
            Self::Square => x * x,
            Self::Log10 => x.log10(),
            Self::Ln => x.ln(),
            Self::Reciprocal => 1.0 / x,
            Self::Exp => x.exp(),
        }
    }
}

// `x * PI / 180` rather than `f64::to_radians`, whose folded constant rounds differently.
fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnaryFunction {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "sqrt" | "√" => Ok(Self::Sqrt),
            "square" | "x²" => Ok(Self::Square),
            "log" | "log10" => Ok(Self::Log10),
            "ln" => Ok(Self::Ln),
            "1/x" | "reciprocal" => Ok(Self::Reciprocal),
            "exp" | "eˣ" => Ok(Self::Exp),
            other => Err(KeyParseError::UnknownFunction(other.to_string())),
        }
    }
}
