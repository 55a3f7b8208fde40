// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home screen, the
//! preview modal and the pan view.
//!
//! The `App` struct owns the loaded image and the visibility of both views,
//! and translates messages into state changes or image loading tasks.

pub mod config;
pub mod input;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::media::ImageSlot;
use crate::ui::theming::ThemeMode;
use crate::ui::{modal, pan_view};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    images: ImageSlot,
    modal: modal::State,
    pan_view: pan_view::State,
    theme_mode: ThemeMode,
    /// i18n key of a warning raised while loading settings.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_image", &self.images.has_image())
            .field("modal_visible", &self.modal.is_visible())
            .field("pan_view_visible", &self.pan_view.is_visible())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed on the
    // first call and later calls start from defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let pan_view = pan_view::State::new(
            config.pan.step(),
            config.pan.narrow_align,
            config.pan.aspect(),
        );
        Self {
            i18n: I18n::default(),
            theme_mode: config.general.theme_mode,
            config,
            images: ImageSlot::new(),
            modal: modal::State::default(),
            pan_view,
            config_warning: None,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous image
    /// loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, config, config_warning)
    }

    fn with_config(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        tracing::info!(locale = %i18n.current_locale(), "starting");

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            pan_view: pan_view::State::new(
                config.pan.step(),
                config.pan.narrow_align,
                config.pan.aspect(),
            ),
            config,
            config_warning,
            images: ImageSlot::new(),
            modal: modal::State::default(),
        };

        let task = match flags.file_path {
            Some(path) => update::load_path(&mut app.update_context(), PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            images: &mut self.images,
            modal: &mut self.modal,
            pan_view: &mut self.pan_view,
        }
    }

    fn title(&self) -> String {
        match self.images.current().and_then(|image| image.name.as_deref()) {
            Some(name) => self
                .i18n
                .tr_with_args("window-title-with-file", &[("name", name)]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::PanView(pan_message) => {
                update::handle_pan_view_message(&mut ctx, pan_message)
            }
            Message::ImageLoaded { ticket, result } => {
                update::handle_image_loaded(&mut ctx, ticket, result)
            }
            Message::FileSelected(path) => update::load_path(&mut ctx, path),
            Message::FileSelectionCancelled => {
                tracing::debug!("file selection cancelled");
                Task::none()
            }
            Message::KeyPressed(key) => update::handle_key_pressed(&mut ctx, &key),
            Message::WindowResized(_size) => update::handle_window_resized(&mut ctx),
            Message::FileDropped(path) => update::load_path(&mut ctx, path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            image: self.images.current(),
            modal: &self.modal,
            pan_view: &self.pan_view,
            notice: self.config_warning.as_deref(),
        })
    }

    /// Settings the application was started with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
