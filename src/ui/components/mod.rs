// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`backdrop`] - Dimmed, click-to-dismiss layer under the preview modal
//!   and the pan view

pub mod backdrop;
