//! # Binary Operators
//!
//! The five two-operand operations a calculator keypad can leave pending.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::binary::BinaryOperator;
//!
//! assert_eq!(BinaryOperator::Add.resolve(3.0, 4.0), 7.0);
//! assert!(BinaryOperator::Divide.resolve(5.0, 0.0).is_nan());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Pending binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    /// All operators, in keypad order
    pub const ALL: [BinaryOperator; 5] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
        BinaryOperator::Power,
    ];

    /// Apply the operator to `a` (first operand) and `b` (second operand).
    ///
    /// Division by zero yields NaN rather than an error; the sentinel flows
    /// through formatting and shows up as `"NaN"` on the display.
    pub fn resolve(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
            BinaryOperator::Power => a.powf(b),
        }
    }

    /// Symbol used in expression traces
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "−",
            BinaryOperator::Multiply => "×",
            BinaryOperator::Divide => "÷",
            BinaryOperator::Power => "^",
        }
    }

    /// Stable action identifier (e.g., "add", "divide")
    pub fn code(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "add",
            BinaryOperator::Subtract => "subtract",
            BinaryOperator::Multiply => "multiply",
            BinaryOperator::Divide => "divide",
            BinaryOperator::Power => "power",
        }
    }

    /// Parse from an identifier or any common symbol
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" | "plus" => Ok(BinaryOperator::Add),
            "subtract" | "-" | "−" | "minus" => Ok(BinaryOperator::Subtract),
            "multiply" | "*" | "×" | "x" | "times" => Ok(BinaryOperator::Multiply),
            "divide" | "/" | "÷" => Ok(BinaryOperator::Divide),
            "power" | "^" | "pow" => Ok(BinaryOperator::Power),
            _ => Err(CalcError::invalid_input("operator", s, "Unknown binary operator")),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
