//! # Actions
//!
//! The closed set of inputs a calculator front end can send to the engine.
//! Each key or button maps to exactly one [`Action`], and
//! [`CalculatorEngine::dispatch`](crate::engine::CalculatorEngine::dispatch)
//! matches on it exhaustively.
//!
//! Actions have stable kebab-case identifiers ("7", "add", "clear-entry",
//! "arcsin", "root-4", "pi", ...) that round-trip through [`FromStr`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::actions::Action;
//! use calc_core::calculations::BinaryOperator;
//!
//! let action: Action = "multiply".parse().unwrap();
//! assert_eq!(action, Action::Operator(BinaryOperator::Multiply));
//! assert_eq!(action.code(), "multiply");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::{AngleMode, BinaryOperator, Constant, UnaryFunction};
use crate::errors::{CalcError, CalcResult};

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// All digits in ascending order
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Create a digit, returning `None` above 9
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Digit::new(value)
            .ok_or_else(|| CalcError::invalid_input("digit", value.to_string(), "Digit must be 0-9"))
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or_else(|| CalcError::invalid_input("digit", c.to_string(), "Not a decimal digit"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Append a digit to the current entry
    Digit(Digit),
    /// Append a decimal point to the current entry
    Decimal,
    /// Choose a binary operator (resolves a pending one first)
    Operator(BinaryOperator),
    /// Resolve the pending binary operation
    Equals,
    /// Reset everything except the angle mode
    Clear,
    /// Reset the current entry only
    ClearEntry,
    /// Apply a function to the displayed value
    Function(UnaryFunction),
    /// Replace the display with a constant
    Constant(Constant),
    SetAngleMode(AngleMode),
    ToggleAngleMode,
}

impl Action {
    /// Stable identifier, parseable with [`FromStr`]
    pub fn code(&self) -> String {
        match self {
            Action::Digit(d) => d.to_string(),
            Action::Decimal => "decimal".to_string(),
            Action::Operator(op) => op.code().to_string(),
            Action::Equals => "equals".to_string(),
            Action::Clear => "clear".to_string(),
            Action::ClearEntry => "clear-entry".to_string(),
            Action::Function(function) => function.code(),
            Action::Constant(constant) => constant.code().to_string(),
            Action::SetAngleMode(mode) => mode.code().to_string(),
            Action::ToggleAngleMode => "angle-mode".to_string(),
        }
    }

    /// Short label for a keypad button
    pub fn label(&self) -> String {
        match self {
            Action::Digit(d) => d.to_string(),
            Action::Decimal => ".".to_string(),
            Action::Operator(op) => op.symbol().to_string(),
            Action::Equals => "=".to_string(),
            Action::Clear => "C".to_string(),
            Action::ClearEntry => "CE".to_string(),
            Action::Function(function) => function.label(),
            Action::Constant(constant) => constant.symbol().to_string(),
            Action::SetAngleMode(mode) => mode.label().to_string(),
            Action::ToggleAngleMode => "RAD/DEG".to_string(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Action {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_lowercase();

        let mut chars = normalized.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Ok(digit) = Digit::try_from(c) {
                return Ok(Action::Digit(digit));
            }
        }

        let action = match normalized.as_str() {
            "decimal" | "." => Action::Decimal,
            "equals" | "=" => Action::Equals,
            "clear" | "c" => Action::Clear,
            "clear-entry" | "ce" => Action::ClearEntry,
            "pi" | "π" => Action::Constant(Constant::Pi),
            "e" => Action::Constant(Constant::E),
            "radians" | "rad" => Action::SetAngleMode(AngleMode::Radians),
            "degrees" | "deg" => Action::SetAngleMode(AngleMode::Degrees),
            "angle-mode" | "toggle-angle-mode" => Action::ToggleAngleMode,
            other => {
                if let Ok(op) = BinaryOperator::from_str_flexible(other) {
                    Action::Operator(op)
                } else if let Ok(function) = UnaryFunction::from_str_flexible(other) {
                    Action::Function(function)
                } else {
                    return Err(CalcError::invalid_input("action", s, "Unknown calculator action"));
                }
            }
        };
        Ok(action)
    }
}
