//! # Keyboard Mapping
//!
//! Translates keyboard key names into [`Action`]s. Front ends normalize their
//! own key events into the names used here: a printable key is its character
//! (`"7"`, `"+"`, `"c"`) and a named key is its name (`"Enter"`, `"Escape"`,
//! `"Backspace"`).
//!
//! | Key | Action |
//! |---|---|
//! | `0`-`9` | digit |
//! | `.` | decimal point |
//! | `+` `-` `*` `/` | add, subtract, multiply, divide |
//! | `^` | power |
//! | `=` `Enter` | equals |
//! | `Escape` `c` `C` | clear |
//! | `Backspace` | clear entry |
//! | `%` | percent |
//! | `!` | factorial |

use crate::actions::{Action, Digit};
use crate::calculations::{BinaryOperator, UnaryFunction};

/// Map a key name to the action it triggers, if any.
///
/// # Example
///
/// ```rust
/// use calc_core::actions::Action;
/// use calc_core::keymap::action_for_key;
///
/// assert_eq!(action_for_key("Enter"), Some(Action::Equals));
/// assert_eq!(action_for_key("q"), None);
/// ```
pub fn action_for_key(key: &str) -> Option<Action> {
    let action = match key {
        "." => Action::Decimal,
        "+" => Action::Operator(BinaryOperator::Add),
        "-" => Action::Operator(BinaryOperator::Subtract),
        "*" => Action::Operator(BinaryOperator::Multiply),
        "/" => Action::Operator(BinaryOperator::Divide),
        "^" => Action::Operator(BinaryOperator::Power),
        "=" | "Enter" => Action::Equals,
        "Escape" | "c" | "C" => Action::Clear,
        "Backspace" => Action::ClearEntry,
        "%" => Action::Function(UnaryFunction::Percent),
        "!" => Action::Function(UnaryFunction::Factorial),
        _ => return digit_for_key(key).map(Action::Digit),
    };
    Some(action)
}

fn digit_for_key(key: &str) -> Option<Digit> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::try_from(c).ok(),
        _ => None,
    }
}
