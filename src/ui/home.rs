// SPDX-License-Identifier: MPL-2.0
//! Main screen: image picker and the buttons opening the two views.

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open the native file picker.
    ChooseImage,
    OpenPreview,
    OpenPanView,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub image: Option<&'a ImageData>,
    /// i18n key of a startup warning to show under the controls.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let has_image = ctx.image.is_some();

    let details = match ctx.image {
        Some(image) => {
            let width = image.natural.width.to_string();
            let height = image.natural.height.to_string();
            let name = image
                .name
                .clone()
                .unwrap_or_else(|| i18n.tr("home-unnamed-image"));
            i18n.tr_with_args(
                "home-image-details",
                &[("name", &name), ("width", &width), ("height", &height)],
            )
        }
        None => i18n.tr("home-no-image"),
    };

    let choose = button(Text::new(i18n.tr("home-choose-image")))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::ChooseImage);

    let preview = button(Text::new(i18n.tr("home-open-preview")))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected)
        .on_press_maybe(has_image.then_some(Message::OpenPreview));

    let pan_view = button(Text::new(i18n.tr("home-open-pan-view")))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected)
        .on_press_maybe(has_image.then_some(Message::OpenPanView));

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("home-title")).size(typography::TITLE_LG))
        .push(choose)
        .push(Text::new(details).size(typography::BODY))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(preview)
                .push(pan_view),
        )
        .push(Text::new(i18n.tr("home-drop-hint")).size(typography::CAPTION));

    if let Some(key) = ctx.notice {
        content = content.push(Text::new(i18n.tr(key)).size(typography::CAPTION));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
