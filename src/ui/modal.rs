// SPDX-License-Identifier: MPL-2.0
//! Static preview modal showing the whole image, contain-fitted.

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::components::backdrop;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Messages emitted by the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Close,
    /// Switch from the preview to the pannable view.
    OpenPanView,
}

/// Effects the modal asks the application to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the pan view. The modal is already closed when this is returned.
    OpenPanView,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    visible: bool,
}

impl State {
    /// Shows the modal if an image is loaded. Returns whether it is now
    /// visible.
    pub fn open(&mut self, has_image: bool) -> bool {
        if has_image {
            self.visible = true;
        }
        self.visible
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Close => {
                self.close();
                Effect::None
            }
            Message::OpenPanView => {
                self.close();
                Effect::OpenPanView
            }
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub image: &'a ImageData,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let preview = image(ctx.image.handle.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let title = ctx
        .image
        .name
        .clone()
        .unwrap_or_else(|| ctx.i18n.tr("modal-title"));

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("modal-open-pan-view")))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::OpenPanView),
        )
        .push(
            button(Text::new(ctx.i18n.tr("modal-close")))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::unselected)
                .on_press(Message::Close),
        );

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(preview)
            .push(actions),
    )
    .padding(spacing::MD)
    .max_width(sizing::MODAL_MAX_WIDTH)
    .max_height(sizing::MODAL_MAX_HEIGHT)
    .style(|theme| styles::container::card(theme, radius::LG));

    Stack::new()
        .push(backdrop::dimmed(Message::Close))
        .push(
            Container::new(opaque(card))
                .padding(spacing::XL)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .into()
}
