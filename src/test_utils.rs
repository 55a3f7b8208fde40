// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! Re-exports the `approx` assertion macro, which handles floating-point
//! precision issues that `assert_eq!` cannot, plus small fixture builders.

pub use approx::assert_abs_diff_eq;

use crate::media::{ImageData, NaturalSize};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-3;

/// Builds an in-memory image with the given natural size without touching disk.
///
/// Only the dimensions matter to the pan logic, so the pixels are a 1x1 stub.
pub fn image_with_size(width: u32, height: u32) -> ImageData {
    ImageData::from_parts(
        iced::widget::image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
        NaturalSize::new(width, height),
        Some(format!("{width}x{height}.png")),
        0,
    )
}
