//! Status Bar (Bottom)
//!
//! Displays:
//! - Pending operation (first operand and operator)
//! - Status messages

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::format::format_result;
use calc_core::CalculatorState;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(state: &CalculatorState, status: &'a str) -> Element<'a, Message> {
    row![
        text(pending_summary(state)).size(10).color([0.6, 0.3, 0.0]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}

/// Short description of the pending binary operation, if any
pub fn pending_summary(state: &CalculatorState) -> String {
    match (state.first_operand, state.operator) {
        (Some(first), Some(op)) => format!("{} {}", format_result(first), op.symbol()),
        (None, Some(op)) => op.symbol().to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::{AngleMode, BinaryOperator};

    #[test]
    fn test_pending_summary() {
        let mut state = CalculatorState::new(AngleMode::Radians);
        assert_eq!(pending_summary(&state), "");

        state.first_operand = Some(12.5);
        state.operator = Some(BinaryOperator::Multiply);
        assert_eq!(pending_summary(&state), "12.5 ×");

        state.first_operand = None;
        assert_eq!(pending_summary(&state), "×");
    }
}
