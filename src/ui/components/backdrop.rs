// SPDX-License-Identifier: MPL-2.0
//! Full-window backdrop placed under modal layers.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::{container, mouse_area, Container, Space};
use iced::{Background, Color, Element, Length, Theme};

/// Dimmed layer covering the whole window. Clicking it emits `on_press`.
pub fn dimmed<'a, Message: Clone + 'a>(on_press: Message) -> Element<'a, Message> {
    let layer = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            })),
            ..Default::default()
        });

    mouse_area(layer).on_press(on_press).into()
}
