// SPDX-License-Identifier: MPL-2.0
//! Rendering of the pan view: a full-window backdrop with a panel holding the
//! cropped surface and its arrow controls.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::components::backdrop;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::PanSurface;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub image: &'a ImageData,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let pan = state.pan();

    let surface = PanSurface::new(
        ctx.image.handle.clone(),
        ctx.image.natural,
        Message::ViewboxMeasured,
    )
    .translate_x(pan.translate_x())
    .aspect(state.aspect())
    .measured(state.viewbox());

    let surface = Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let left = arrow_button("◀", state.can_pan_left().then_some(Message::PanLeft));
    let right = arrow_button("▶", state.can_pan_right().then_some(Message::PanRight));

    let body = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(left)
        .push(surface)
        .push(right)
        .height(Length::Fill);

    let close = button(Text::new(ctx.i18n.tr("pan-view-close")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Close);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("pan-view-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(close);

    let hint = Text::new(ctx.i18n.tr("pan-view-hint")).size(typography::CAPTION);

    let panel = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(body)
            .push(hint),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::panel);

    Stack::new()
        .push(backdrop::dimmed(Message::Close))
        .push(
            Container::new(opaque(panel))
                .padding(spacing::XL)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn arrow_button<'a>(label: &'a str, on_press: Option<Message>) -> Element<'a, Message> {
    let style = if on_press.is_some() {
        styles::button::overlay(palette::WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER)
    } else {
        styles::button::overlay(palette::GRAY_400, opacity::OVERLAY_SUBTLE, opacity::OVERLAY_SUBTLE)
    };

    button(Text::new(label).size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(style)
        .on_press_maybe(on_press)
        .into()
}
