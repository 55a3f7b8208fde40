// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Image picker and entry points to the two views
//! - [`modal`] - Static, contain-fitted preview of the whole image
//! - [`pan_view`] - Cropped 16:9 view with horizontal panning
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Pan offset and viewbox geometry
//! - [`components`] - Reusable UI components (backdrop)
//! - [`widgets`] - Custom Iced widgets (pan surface)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod home;
pub mod modal;
pub mod pan_view;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
