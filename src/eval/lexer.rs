//! Tokenizer for calculator expressions.
//!
//! Accepts the ASCII operators the engine writes (`+ - * / **`) as well as
//! the glyphs shown on calculator buttons (`− × ÷`).

use super::error::{EvalResult, EvaluationError};
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// A lexical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal, including `Infinity` and `NaN`
    Number(f64),
    /// Addition operator (+)
    Plus,
    /// Subtraction operator (-, −)
    Minus,
    /// Multiplication operator (*, ×)
    Star,
    /// Division operator (/, ÷)
    Slash,
    /// Exponentiation operator (**)
    Power,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::Power => f.write_str("**"),
        }
    }
}

/// A token with the byte offset it started at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

pub struct Lexer<'input> {
    input: &'input str,
    chars: Peekable<CharIndices<'input>>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Split the whole input into tokens.
    pub fn tokenize(mut self) -> EvalResult<Vec<Spanned>> {
        let mut tokens = Vec::new();
        while let Some(spanned) = self.next_token()? {
            tokens.push(spanned);
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> EvalResult<Option<Spanned>> {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}

        let Some(&(position, ch)) = self.chars.peek() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.number(position)?,
            c if c.is_ascii_alphabetic() => self.identifier(position)?,
            _ => {
                self.chars.next();
                match ch {
                    '+' => Token::Plus,
                    '-' | '−' => Token::Minus,
                    '*' if self.chars.next_if(|(_, c)| *c == '*').is_some() => Token::Power,
                    '*' | '×' => Token::Star,
                    '/' | '÷' => Token::Slash,
                    _ => return Err(EvaluationError::UnexpectedCharacter { ch, position }),
                }
            }
        };

        Ok(Some(Spanned { token, position }))
    }

    fn number(&mut self, start: usize) -> EvalResult<Token> {
        self.eat_digits();
        if self.chars.next_if(|(_, c)| *c == '.').is_some() {
            self.eat_digits();
        }
        self.eat_exponent();

        let input = self.input;
        let literal = &input[start..self.offset()];
        literal
            .parse::<f64>()
            .map(Token::Number)
            .map_err(|_| EvaluationError::InvalidNumber(literal.to_string()))
    }

    fn identifier(&mut self, start: usize) -> EvalResult<Token> {
        while self
            .chars
            .next_if(|(_, c)| c.is_ascii_alphanumeric() || *c == '_')
            .is_some()
        {}

        let input = self.input;
        match &input[start..self.offset()] {
            "Infinity" => Ok(Token::Number(f64::INFINITY)),
            "NaN" => Ok(Token::Number(f64::NAN)),
            name => Err(EvaluationError::UnknownIdentifier(name.to_string())),
        }
    }

    fn eat_digits(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_ascii_digit()).is_some() {}
    }

    // Consumes `e[+-]digits` only when at least one digit follows.
    fn eat_exponent(&mut self) {
        let input = self.input;
        let offset = self.offset();
        let mut probe = input[offset..].chars();
        if !matches!(probe.next(), Some('e' | 'E')) {
            return;
        }
        let after_e = probe.as_str();
        let digits = after_e
            .strip_prefix(['+', '-'])
            .unwrap_or(after_e);
        if !digits.starts_with(|c: char| c.is_ascii_digit()) {
            return;
        }

        self.chars.next();
        self.chars.next_if(|(_, c)| *c == '+' || *c == '-');
        self.eat_digits();
    }

    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(index, _)| *index)
            .unwrap_or(self.input.len())
    }
}
