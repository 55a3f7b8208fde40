// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are turned into top-level messages.
//! Whether a key actually does something is decided later by
//! [`input::route_key`](super::input::route_key), which knows if the pan
//! view is visible.

use super::Message;
use iced::{event, keyboard, window, Event, Subscription};

/// Forwards uncaptured key presses, window resizes and file drops.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::KeyPressed(key)),
            event::Status::Captured => None,
        },
        _ => None,
    })
}
