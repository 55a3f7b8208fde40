// SPDX-License-Identifier: MPL-2.0
//! Fixed-aspect viewbox geometry.
//!
//! The pannable view clips the image to a rectangle of constant aspect ratio
//! (16:9 by default) fitted inside whatever space the layout offers.

use iced::Size;

// Re-export viewbox constants from centralized config
pub use crate::config::{DEFAULT_ASPECT_HEIGHT, DEFAULT_ASPECT_WIDTH};

/// Width-to-height ratio of the viewbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    width: u16,
    height: u16,
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            width: DEFAULT_ASPECT_WIDTH,
            height: DEFAULT_ASPECT_HEIGHT,
        }
    }
}

impl AspectRatio {
    /// Creates a ratio, or `None` if either component is zero.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    #[must_use]
    pub fn value(self) -> f32 {
        f32::from(self.width) / f32::from(self.height)
    }

    /// Largest rectangle with this ratio that fits inside `available`.
    ///
    /// An unbounded dimension is constrained only by the other one; negative
    /// dimensions count as zero.
    #[must_use]
    pub fn fit(self, available: Size) -> Size {
        let ratio = self.value();

        match (bounded(available.width), bounded(available.height)) {
            (Some(w), Some(h)) if w / ratio <= h => Size::new(w, w / ratio),
            (Some(_), Some(h)) | (None, Some(h)) => Size::new(h * ratio, h),
            (Some(w), None) => Size::new(w, w / ratio),
            (None, None) => Size::ZERO,
        }
    }
}

fn bounded(value: f32) -> Option<f32> {
    value.is_finite().then(|| value.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn default_is_sixteen_by_nine() {
        let ratio = AspectRatio::default();
        assert_eq!((ratio.width(), ratio.height()), (16, 9));
    }

    #[test]
    fn zero_components_are_rejected() {
        assert!(AspectRatio::new(0, 9).is_none());
        assert!(AspectRatio::new(16, 0).is_none());
        assert!(AspectRatio::new(4, 3).is_some());
    }

    #[test]
    fn fit_is_width_limited_in_tall_space() {
        let size = AspectRatio::default().fit(Size::new(1600.0, 2000.0));
        assert_abs_diff_eq!(size.width, 1600.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.height, 900.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn fit_is_height_limited_in_wide_space() {
        let size = AspectRatio::default().fit(Size::new(4000.0, 900.0));
        assert_abs_diff_eq!(size.width, 1600.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.height, 900.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn fit_clamps_negative_space_to_zero() {
        let size = AspectRatio::default().fit(Size::new(-10.0, 300.0));
        assert_abs_diff_eq!(size.width, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.height, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn fit_handles_unbounded_space() {
        let size = AspectRatio::default().fit(Size::new(f32::INFINITY, 450.0));
        assert_abs_diff_eq!(size.width, 800.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.height, 450.0, epsilon = F32_EPSILON);
    }
}
