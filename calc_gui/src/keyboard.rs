//! Keyboard input for the GUI
//!
//! Translates iced key events into messages through the shared core keymap.

use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key};
use iced::window;

use calc_core::keymap::action_for_key;
use calc_core::Action;

use crate::Message;

/// Event filter for `iced::event::listen_with`
pub fn handle_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }

    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if modifiers.control() || modifiers.command() || modifiers.alt() {
                return None;
            }
            action_for_iced_key(&key).map(Message::Press)
        }
        _ => None,
    }
}

/// Map a logical key to a calculator action
pub fn action_for_iced_key(key: &Key) -> Option<Action> {
    match key {
        Key::Named(Named::Enter) => action_for_key("Enter"),
        Key::Named(Named::Escape) => action_for_key("Escape"),
        Key::Named(Named::Backspace) => action_for_key("Backspace"),
        Key::Character(c) => action_for_key(c.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::{BinaryOperator, Digit};

    #[test]
    fn test_named_keys() {
        assert_eq!(action_for_iced_key(&Key::Named(Named::Enter)), Some(Action::Equals));
        assert_eq!(action_for_iced_key(&Key::Named(Named::Escape)), Some(Action::Clear));
        assert_eq!(
            action_for_iced_key(&Key::Named(Named::Backspace)),
            Some(Action::ClearEntry)
        );
        assert_eq!(action_for_iced_key(&Key::Named(Named::Tab)), None);
    }

    #[test]
    fn test_character_keys() {
        assert_eq!(
            action_for_iced_key(&Key::Character("7".into())),
            Some(Action::Digit(Digit::ALL[7]))
        );
        assert_eq!(
            action_for_iced_key(&Key::Character("*".into())),
            Some(Action::Operator(BinaryOperator::Multiply))
        );
        assert_eq!(action_for_iced_key(&Key::Character("z".into())), None);
    }
}
