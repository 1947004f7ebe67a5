//! Keypad
//!
//! Five-column button grid: scientific functions on top, digits and basic
//! operators below. The most recently pressed button is drawn with the
//! primary style.

use iced::widget::{button, text, Column, Row};
use iced::{Element, Length, Padding};

use calc_core::{Action, BinaryOperator, Constant, Digit, UnaryFunction};

use crate::Message;

const fn digit(n: usize) -> Action {
    Action::Digit(Digit::ALL[n])
}

const fn function(f: UnaryFunction) -> Action {
    Action::Function(f)
}

const fn operator(op: BinaryOperator) -> Action {
    Action::Operator(op)
}

/// Button layout, row by row
pub const KEYPAD_ROWS: [[Action; 5]; 8] = [
    [
        function(UnaryFunction::Sin),
        function(UnaryFunction::Cos),
        function(UnaryFunction::Tan),
        function(UnaryFunction::Log),
        function(UnaryFunction::Ln),
    ],
    [
        function(UnaryFunction::Arcsin),
        function(UnaryFunction::Arccos),
        function(UnaryFunction::Arctan),
        function(UnaryFunction::Exp),
        function(UnaryFunction::Pow10),
    ],
    [
        function(UnaryFunction::Square),
        operator(BinaryOperator::Power),
        function(UnaryFunction::Sqrt),
        function(UnaryFunction::Cbrt),
        function(UnaryFunction::Factorial),
    ],
    [
        Action::Constant(Constant::Pi),
        Action::Constant(Constant::E),
        function(UnaryFunction::Percent),
        Action::ClearEntry,
        Action::Clear,
    ],
    [digit(7), digit(8), digit(9), operator(BinaryOperator::Divide), Action::ToggleAngleMode],
    [digit(4), digit(5), digit(6), operator(BinaryOperator::Multiply), function(UnaryFunction::Root(4))],
    [digit(1), digit(2), digit(3), operator(BinaryOperator::Subtract), function(UnaryFunction::Root(5))],
    [digit(0), Action::Decimal, Action::Equals, operator(BinaryOperator::Add), function(UnaryFunction::Root(6))],
];

/// Render the keypad grid
pub fn view_keypad(last_action: Option<Action>) -> Element<'static, Message> {
    let rows = KEYPAD_ROWS.iter().map(|keys| {
        Row::with_children(keys.iter().map(|action| key_button(*action, last_action)))
            .spacing(4)
            .into()
    });

    Column::with_children(rows).spacing(4).into()
}

fn key_button(action: Action, last_action: Option<Action>) -> Element<'static, Message> {
    let style = if last_action == Some(action) {
        button::primary
    } else if action == Action::Equals {
        button::success
    } else {
        button::secondary
    };

    button(text(action.label()).size(16))
        .on_press(Message::Press(action))
        .padding(Padding::from([10, 0]))
        .width(Length::Fill)
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_covers_all_actions() {
        let keys: Vec<Action> = KEYPAD_ROWS.iter().flatten().copied().collect();

        for d in Digit::ALL {
            assert!(keys.contains(&Action::Digit(d)), "missing digit {}", d);
        }
        for op in BinaryOperator::ALL {
            assert!(keys.contains(&Action::Operator(op)), "missing operator {}", op);
        }
        for f in UnaryFunction::KEYPAD {
            assert!(keys.contains(&Action::Function(f)), "missing function {}", f);
        }
        for action in [Action::Decimal, Action::Equals, Action::Clear, Action::ClearEntry] {
            assert!(keys.contains(&action), "missing {}", action);
        }
    }

    #[test]
    fn test_keypad_has_no_duplicates() {
        let keys: Vec<Action> = KEYPAD_ROWS.iter().flatten().copied().collect();
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key), "duplicate {}", key);
        }
    }
}
