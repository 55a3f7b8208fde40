// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::{ImageData, LoadTicket};
use crate::ui::{home, modal, pan_view};
use iced::keyboard;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Modal(modal::Message),
    PanView(pan_view::Message),
    /// A load started with `ticket` finished.
    ImageLoaded {
        ticket: LoadTicket,
        result: Result<ImageData, Error>,
    },
    /// The file picker returned a path.
    FileSelected(PathBuf),
    /// The file picker was dismissed without a selection.
    FileSelectionCancelled,
    /// A key press no widget captured.
    KeyPressed(keyboard::Key),
    WindowResized(Size),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PANLENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
