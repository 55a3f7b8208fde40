// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The home screen is always drawn; the preview modal and the pan view are
//! stacked on top of it while visible.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::{home, modal, pan_view};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub image: Option<&'a ImageData>,
    pub modal: &'a modal::State,
    pub pan_view: &'a pan_view::State,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let home = home::view(home::ViewContext {
        i18n: ctx.i18n,
        image: ctx.image,
        notice: ctx.notice,
    })
    .map(Message::Home);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(home);

    if let Some(image) = ctx.image {
        if ctx.modal.is_visible() {
            layers = layers.push(
                modal::view(modal::ViewContext {
                    i18n: ctx.i18n,
                    image,
                })
                .map(Message::Modal),
            );
        }

        if ctx.pan_view.is_visible() {
            layers = layers.push(
                pan_view::view(
                    ctx.pan_view,
                    pan_view::ViewContext {
                        i18n: ctx.i18n,
                        image,
                    },
                )
                .map(Message::PanView),
            );
        }
    }

    layers.into()
}
