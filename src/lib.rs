// SPDX-License-Identifier: MPL-2.0
//! `panlens` opens a single image and shows it two ways: a static preview
//! fitted inside a modal, and a fixed 16:9 view that crops the image and
//! lets the user pan horizontally with buttons or arrow keys.
//!
//! The UI is built with Iced, translations use Fluent and user preferences
//! are stored as TOML.

pub mod app;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

pub use app::config;

#[cfg(test)]
mod test_utils;
