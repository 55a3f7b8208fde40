// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler runs to completion before the next message is processed.
//! The only asynchronous work is reading and probing image files, which is
//! started here through [`Task::perform`] and comes back as
//! [`Message::ImageLoaded`].

use super::{input, Message};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData, ImageSlot, LoadOutcome, LoadTicket};
use crate::ui::{home, modal, pan_view};
use iced::keyboard::Key;
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a mut ImageSlot,
    pub modal: &'a mut modal::State,
    pub pan_view: &'a mut pan_view::State,
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match message {
        // No ticket is taken here: a cancelled picker must not supersede a
        // load that is still running.
        home::Message::ChooseImage => {
            let title = ctx.i18n.tr("file-dialog-title");
            Task::perform(media::pick_image_path(title), |picked| match picked {
                Some(path) => Message::FileSelected(path),
                None => Message::FileSelectionCancelled,
            })
        }
        home::Message::OpenPreview => {
            ctx.modal.open(ctx.images.has_image());
            Task::none()
        }
        home::Message::OpenPanView => {
            ctx.pan_view.open(ctx.images.current());
            Task::none()
        }
    }
}

pub fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    match ctx.modal.handle(message) {
        modal::Effect::OpenPanView => {
            ctx.pan_view.open(ctx.images.current());
        }
        modal::Effect::None => {}
    }
    Task::none()
}

pub fn handle_pan_view_message(
    ctx: &mut UpdateContext<'_>,
    message: pan_view::Message,
) -> Task<Message> {
    ctx.pan_view.handle(message);
    Task::none()
}

/// Starts reading the file at `path` in the background.
pub fn load_path(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    let ticket = ctx.images.begin_load();
    Task::perform(media::load_image_async(path), move |result| {
        Message::ImageLoaded { ticket, result }
    })
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: LoadTicket,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match ctx.images.finish_load(ticket, result) {
        LoadOutcome::Replaced => {
            if let Some(image) = ctx.images.current() {
                tracing::info!(
                    name = image.name.as_deref().unwrap_or_default(),
                    width = image.natural.width,
                    height = image.natural.height,
                    bytes = image.byte_len,
                    "image loaded"
                );
            }
            // An open pan view starts over with the new image.
            if ctx.pan_view.is_visible() {
                ctx.pan_view.open(ctx.images.current());
            }
        }
        LoadOutcome::Stale => tracing::debug!(?ticket, "dropping result of superseded load"),
        LoadOutcome::Failed(err) => tracing::warn!(error = %err, "failed to load image"),
    }
    Task::none()
}

pub fn handle_key_pressed(ctx: &mut UpdateContext<'_>, key: &Key) -> Task<Message> {
    if let Some(message) = input::route_key(key, ctx.pan_view.is_visible()) {
        ctx.pan_view.handle(message);
    }
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.pan_view.is_visible() {
        ctx.pan_view.handle(pan_view::Message::LayoutInvalidated);
    }
    Task::none()
}
