// SPDX-License-Identifier: MPL-2.0
//! Window-level Escape listener.
//!
//! The listener only exists while the provider's subscription is part of
//! the application's subscription set, so unmounting the provider also
//! removes it.

use super::provider::Message;
use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key};
use iced::{window, Subscription};

/// Maps every Escape press in the window to [`Message::DismissLast`].
pub fn escape_listener() -> Subscription<Message> {
    event::listen_with(on_event)
}

// Window-level: fires even when a focused widget captured the key.
fn on_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    map_key_event(&event)
}

/// One message per Escape key event, auto-repeat included.
#[must_use]
pub fn map_key_event(event: &Event) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::DismissLast),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_press(named: Named, code: keyboard::key::Code, repeat: bool) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat,
        })
    }

    #[test]
    fn escape_maps_to_dismiss_last() {
        let event = key_press(Named::Escape, keyboard::key::Code::Escape, false);
        assert!(matches!(map_key_event(&event), Some(Message::DismissLast)));
    }

    #[test]
    fn other_keys_are_ignored() {
        let event = key_press(Named::Enter, keyboard::key::Code::Enter, false);
        assert!(map_key_event(&event).is_none());
    }

    #[test]
    fn held_escape_repeats_dismiss() {
        let event = key_press(Named::Escape, keyboard::key::Code::Escape, true);
        assert!(matches!(map_key_event(&event), Some(Message::DismissLast)));
    }

    #[test]
    fn escape_maps_even_when_captured_by_a_widget() {
        let event = key_press(Named::Escape, keyboard::key::Code::Escape, false);
        let message = on_event(event, event::Status::Captured, window::Id::unique());
        assert!(matches!(message, Some(Message::DismissLast)));
    }
}
