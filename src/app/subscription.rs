// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events to messages: keyboard input (only when no widget
//! captured it) and files dropped on the window.

use super::Message;
use iced::{event, keyboard, Subscription};

/// Creates the application-wide event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::KeyPressed(key)),
            event::Status::Captured => None,
        },
        _ => None,
    })
}
