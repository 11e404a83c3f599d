//! Precedence-climbing evaluator for the calculator grammar.
//!
//! ```text
//! expression := operand (operator operand)*
//! operand    := ('+' | '-')* number
//! operator   := '+' | '-' | '*' | '/' | '**'
//! ```
//!
//! `**` binds tighter than `*` and `/`, which bind tighter than `+` and `-`.
//! Every level is left-associative. Arithmetic is plain IEEE-754 `f64`, so
//! division by zero yields an infinity rather than an error.

use super::error::{EvalResult, EvaluationError};
use super::lexer::{Lexer, Spanned, Token};

/// Operator precedence levels (higher = tighter binding)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Additive operators (+, -)
    Additive = 1,
    /// Multiplicative operators (*, /)
    Multiplicative = 2,
    /// Exponentiation (**)
    Power = 3,
    /// Above every binary operator; stops the climb at an operand
    Operand = 4,
}

impl Precedence {
    /// The next higher level, used for the right operand of a
    /// left-associative operator.
    pub const fn next_level(self) -> Self {
        match self {
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Power,
            Precedence::Power | Precedence::Operand => Precedence::Operand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Subtract),
            Token::Star => Some(Self::Multiply),
            Token::Slash => Some(Self::Divide),
            Token::Power => Some(Self::Power),
            Token::Number(_) => None,
        }
    }

    fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Subtract => Precedence::Additive,
            Self::Multiply | Self::Divide => Precedence::Multiplicative,
            Self::Power => Precedence::Power,
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Power => power(lhs, rhs),
        }
    }
}

/// `powf`, except that a NaN exponent and `±1 ** ±Infinity` give NaN.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

struct Parser {
    tokens: Vec<Spanned>,
    position: usize,
}

impl Parser {
    fn new(tokens: Vec<Spanned>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.position).copied();
        if spanned.is_some() {
            self.position += 1;
        }
        spanned
    }

    fn expression(&mut self, min: Precedence) -> EvalResult<f64> {
        let mut lhs = self.operand()?;

        while let Some(op) = self.peek().and_then(|s| BinaryOp::from_token(&s.token)) {
            if op.precedence() < min {
                break;
            }
            self.advance();
            let rhs = self.expression(op.precedence().next_level())?;
            lhs = op.apply(lhs, rhs);
        }

        Ok(lhs)
    }

    fn operand(&mut self) -> EvalResult<f64> {
        let mut negative = false;
        loop {
            let spanned = self.advance().ok_or(EvaluationError::UnexpectedEnd)?;
            match spanned.token {
                Token::Number(value) => return Ok(if negative { -value } else { value }),
                Token::Minus => negative = !negative,
                Token::Plus => {}
                token => {
                    return Err(EvaluationError::UnexpectedToken {
                        token: token.to_string(),
                        position: spanned.position,
                    })
                }
            }
        }
    }
}

/// Evaluate a calculator expression.
///
/// # Example
///
/// ```rust
/// use calcore::eval::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("2 ** 10"), Ok(1024.0));
/// assert_eq!(evaluate("5 / 0"), Ok(f64::INFINITY));
/// assert!(evaluate("2 +").is_err());
/// ```
pub fn evaluate(input: &str) -> EvalResult<f64> {
    let tokens = Lexer::new(input).tokenize()?;
    if tokens.is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }

    let mut parser = Parser::new(tokens);
    let value = parser.expression(Precedence::Additive)?;

    match parser.peek() {
        None => Ok(value),
        Some(trailing) => Err(EvaluationError::UnexpectedToken {
            token: trailing.token.to_string(),
            position: trailing.position,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_number_evaluates_to_itself() {
        assert_eq!(evaluate("42"), Ok(42.0));
        assert_eq!(evaluate("0.5"), Ok(0.5));
    }

    #[test]
    fn addition_and_subtraction() {
        assert_eq!(evaluate("2 + 3"), Ok(5.0));
        assert_eq!(evaluate("10 - 4 - 3"), Ok(3.0));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
        assert_eq!(evaluate("2 * 3 + 4"), Ok(10.0));
        assert_eq!(evaluate("20 - 8 / 4"), Ok(18.0));
    }

    #[test]
    fn same_level_is_left_associative() {
        assert_eq!(evaluate("8 / 4 / 2"), Ok(1.0));
        assert_eq!(evaluate("2 ** 3 ** 2"), Ok(64.0));
    }

    #[test]
    fn power_binds_tighter_than_multiplication() {
        assert_eq!(evaluate("3 * 2 ** 3"), Ok(24.0));
        assert_eq!(evaluate("2 ** 3 * 3"), Ok(24.0));
    }

    #[test]
    fn signed_operands() {
        assert_eq!(evaluate("2 - -5"), Ok(7.0));
        assert_eq!(evaluate("-5 * 2"), Ok(-10.0));
        assert_eq!(evaluate("2 ** -1"), Ok(0.5));
    }

    #[test]
    fn long_sign_prefix_evaluates() {
        let odd = format!("{}1", "-".repeat(200_001));
        assert_eq!(evaluate(&odd), Ok(-1.0));

        let mixed = format!("2 * {}3", "+-".repeat(100_000));
        assert_eq!(evaluate(&mixed), Ok(6.0));
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert_eq!(evaluate("5 / 0"), Ok(f64::INFINITY));
        assert_eq!(evaluate("-5 / 0"), Ok(f64::NEG_INFINITY));
        assert!(evaluate("0 / 0").unwrap().is_nan());
    }

    #[test]
    fn special_value_operands() {
        assert_eq!(evaluate("Infinity + 1"), Ok(f64::INFINITY));
        assert!(evaluate("NaN * 2").unwrap().is_nan());
    }

    #[test]
    fn power_edge_cases_are_nan() {
        assert!(evaluate("1 ** Infinity").unwrap().is_nan());
        assert!(evaluate("2 ** NaN").unwrap().is_nan());
        assert_eq!(evaluate("NaN ** 0"), Ok(1.0));
    }

    #[test]
    fn trailing_operator_is_an_error() {
        assert_eq!(evaluate("2 +"), Err(EvaluationError::UnexpectedEnd));
        assert_eq!(evaluate("2 ** "), Err(EvaluationError::UnexpectedEnd));
    }

    #[test]
    fn doubled_operator_is_an_error() {
        assert_eq!(
            evaluate("2 * / 3"),
            Err(EvaluationError::UnexpectedToken {
                token: "/".to_string(),
                position: 4
            })
        );
    }

    #[test]
    fn adjacent_numbers_are_an_error() {
        assert!(matches!(
            evaluate("1.2.3"),
            Err(EvaluationError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(evaluate(""), Err(EvaluationError::EmptyExpression));
        assert_eq!(evaluate("   "), Err(EvaluationError::EmptyExpression));
    }

    #[test]
    fn error_marker_is_unknown_identifier() {
        assert_eq!(
            evaluate("Error"),
            Err(EvaluationError::UnknownIdentifier("Error".to_string()))
        );
    }

    #[test]
    fn precedence_levels_are_ordered() {
        assert!(Precedence::Additive < Precedence::Multiplicative);
        assert!(Precedence::Multiplicative < Precedence::Power);
        assert_eq!(Precedence::Power.next_level(), Precedence::Operand);
    }
}
