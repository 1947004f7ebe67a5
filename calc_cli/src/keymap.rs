//! Terminal key bindings.
//!
//! Keys shared with every front end (digits, operators, `=`/Enter,
//! Esc/`c` clear, Backspace clear entry, `^ % !`) come from
//! [`calc_core::keymap`]. The terminal has no function buttons, so the
//! scientific functions get letter keys here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use calc_core::keymap::action_for_key;
use calc_core::{Action, Constant, UnaryFunction};

/// What a key press asks the TUI to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Send an action to the engine
    Press(Action),
    /// Switch between light and dark colors
    ToggleTheme,
    Quit,
}

/// Letter keys for functions without a symbol key, plus their help labels
pub const FUNCTION_KEYS: [(char, Action); 16] = [
    ('s', Action::Function(UnaryFunction::Sin)),
    ('o', Action::Function(UnaryFunction::Cos)),
    ('t', Action::Function(UnaryFunction::Tan)),
    ('S', Action::Function(UnaryFunction::Arcsin)),
    ('O', Action::Function(UnaryFunction::Arccos)),
    ('T', Action::Function(UnaryFunction::Arctan)),
    ('l', Action::Function(UnaryFunction::Log)),
    ('L', Action::Function(UnaryFunction::Ln)),
    ('x', Action::Function(UnaryFunction::Exp)),
    ('X', Action::Function(UnaryFunction::Pow10)),
    ('q', Action::Function(UnaryFunction::Square)),
    ('r', Action::Function(UnaryFunction::Sqrt)),
    ('R', Action::Function(UnaryFunction::Cbrt)),
    ('p', Action::Constant(Constant::Pi)),
    ('e', Action::Constant(Constant::E)),
    ('m', Action::ToggleAngleMode),
];

/// Translate a terminal key event.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::F(2) => return Some(Command::ToggleTheme),
        KeyCode::Enter => action_for_key("Enter"),
        KeyCode::Esc => action_for_key("Escape"),
        KeyCode::Backspace => action_for_key("Backspace"),
        KeyCode::Char(c) => function_for_char(c).or_else(|| action_for_key(&c.to_string())),
        _ => None,
    };
    action.map(Command::Press)
}

fn function_for_char(c: char) -> Option<Action> {
    FUNCTION_KEYS
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, action)| *action)
}
