// SPDX-License-Identifier: MPL-2.0
//! Keyboard routing.
//!
//! Arrow keys and Escape only act on the pan view, and only while it is
//! visible. They produce the same messages as the on-screen buttons.

use crate::ui::pan_view;
use iced::keyboard::key::Named;
use iced::keyboard::Key;

/// Maps a key press to a pan view message, if any.
#[must_use]
pub fn route_key(key: &Key, pan_visible: bool) -> Option<pan_view::Message> {
    if !pan_visible {
        return None;
    }

    match key {
        Key::Named(Named::ArrowLeft) => Some(pan_view::Message::PanLeft),
        Key::Named(Named::ArrowRight) => Some(pan_view::Message::PanRight),
        Key::Named(Named::Escape) => Some(pan_view::Message::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_escape_route_while_visible() {
        assert_eq!(
            route_key(&Key::Named(Named::ArrowLeft), true),
            Some(pan_view::Message::PanLeft)
        );
        assert_eq!(
            route_key(&Key::Named(Named::ArrowRight), true),
            Some(pan_view::Message::PanRight)
        );
        assert_eq!(
            route_key(&Key::Named(Named::Escape), true),
            Some(pan_view::Message::Close)
        );
    }

    #[test]
    fn keys_are_ignored_while_hidden() {
        for named in [Named::ArrowLeft, Named::ArrowRight, Named::Escape] {
            assert_eq!(route_key(&Key::Named(named), false), None);
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(route_key(&Key::Named(Named::ArrowUp), true), None);
        assert_eq!(route_key(&Key::Character("a".into()), true), None);
    }
}
