//! # Calculations
//!
//! Pure math behind the keypad. Nothing here touches calculator state:
//!
//! - [`binary`] - Two-operand operators (`+ − × ÷ ^`) and their resolution
//! - [`scientific`] - Single-operand functions, constants and angle modes
//!
//! The engine reads the display, calls into these modules and formats the
//! result.

pub mod binary;
pub mod scientific;

// Re-export commonly used types
pub use binary::BinaryOperator;
pub use scientific::{evaluate, AngleMode, Constant, UnaryFunction};
