// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, window) to top-level messages and drives
//! the periodic ticks used by the flip animation and toasts.

use super::Message;
use crate::ui::design_tokens::motion;
use crate::ui::flipbook;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};

/// Maps an arrow key to the flip it requests.
fn arrow_to_flip(key: &Key) -> Option<flipbook::Message> {
    match key {
        Key::Named(Named::ArrowRight) => Some(flipbook::Message::Next),
        Key::Named(Named::ArrowLeft) => Some(flipbook::Message::Previous),
        _ => None,
    }
}

/// Keyboard navigation, window resize and close requests.
///
/// Keys already captured by a widget are not treated as navigation.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => arrow_to_flip(&key).map(Message::Flipbook),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(motion::TOAST_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Animation frames for the book while a page is turning.
pub fn create_flip_subscription(flipbook: &flipbook::State) -> Subscription<Message> {
    flipbook.subscription().map(Message::Flipbook)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_flips() {
        assert!(matches!(
            arrow_to_flip(&Key::Named(Named::ArrowRight)),
            Some(flipbook::Message::Next)
        ));
        assert!(matches!(
            arrow_to_flip(&Key::Named(Named::ArrowLeft)),
            Some(flipbook::Message::Previous)
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(arrow_to_flip(&Key::Named(Named::ArrowUp)).is_none());
        assert!(arrow_to_flip(&Key::Character("d".into())).is_none());
    }
}
