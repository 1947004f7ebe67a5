//! # Calculator State
//!
//! The single entity the engine owns. It serializes as plain JSON so front
//! ends can dump it (`calc_cli run --json`) or inspect it in tests.
//!
//! ```text
//! CalculatorState
//! ├── display_value               "0", "12.5", "Error", "NaN", "Infinity"
//! ├── expression                  "3 + 4 =", "sin(30) =", ...
//! ├── first_operand               pending left-hand operand
//! ├── waiting_for_second_operand  set right after an operator is chosen
//! ├── operator                    pending binary operator
//! ├── last_action                 advisory, for button highlighting
//! └── angle_mode                  radians | degrees
//! ```

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::calculations::{AngleMode, BinaryOperator};

/// Display text of a freshly created or cleared calculator
pub const INITIAL_DISPLAY: &str = "0";

/// Everything the calculator remembers between inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text currently shown as the primary value (never empty)
    pub display_value: String,

    /// Human-readable trace of the last completed operation
    pub expression: String,

    /// Left-hand operand of a pending binary operation
    pub first_operand: Option<f64>,

    /// True right after an operator is chosen, before the next digit
    pub waiting_for_second_operand: bool,

    /// Pending binary operator
    pub operator: Option<BinaryOperator>,

    /// Most recently dispatched action
    pub last_action: Option<Action>,

    /// Interpretation of trigonometric input/output
    pub angle_mode: AngleMode,
}

impl CalculatorState {
    /// Initial state with the given angle mode
    pub fn new(angle_mode: AngleMode) -> Self {
        CalculatorState {
            display_value: INITIAL_DISPLAY.to_string(),
            expression: String::new(),
            first_operand: None,
            waiting_for_second_operand: false,
            operator: None,
            last_action: None,
            angle_mode,
        }
    }

    /// True if a binary operation is waiting for resolution
    pub fn has_pending_operation(&self) -> bool {
        self.operator.is_some()
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState::new(AngleMode::default())
    }
}
