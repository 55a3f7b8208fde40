// SPDX-License-Identifier: MPL-2.0
//! Horizontal pan state for the cropped viewbox.
//!
//! The image is scaled so its height fills the viewbox height. When the
//! scaled width exceeds the viewbox width the user can shift it horizontally
//! within `[min, max]`; otherwise panning is disabled and the offset is
//! pinned to a single value decided by [`NarrowImageAlign`].
//!
//! All geometry is passed in explicitly, so the state can be exercised with
//! synthetic sizes and no renderer.

use crate::media::NaturalSize;
use iced::{Point, Rectangle, Size};
use serde::{Deserialize, Serialize};

// Re-export pan constants from centralized config
pub use crate::config::{DEFAULT_PAN_STEP, MAX_PAN_STEP, MIN_PAN_STEP};

/// Sub-pixel slack allowed before an image counts as wider than the viewbox.
pub const FIT_TOLERANCE: f32 = 0.5;

/// Where an image that fits entirely inside the viewbox is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarrowImageAlign {
    /// Flush with the left edge (offset 0).
    Left,
    /// Horizontally centered.
    #[default]
    Center,
}

/// Legal range of the horizontal offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanBounds {
    pub min: f32,
    pub max: f32,
}

impl PanBounds {
    /// A degenerate range where only `value` is allowed.
    #[must_use]
    pub fn pinned(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.min >= self.max
    }
}

/// Size of the image once scaled to the viewbox height.
///
/// A zero natural height falls back to a denominator of 1.
#[must_use]
pub fn displayed_size(natural: NaturalSize, viewbox: Size) -> Size {
    let denominator = if natural.height == 0 {
        1.0
    } else {
        natural.height as f32
    };
    let scale = viewbox.height / denominator;
    Size::new(natural.width as f32 * scale, natural.height as f32 * scale)
}

/// Computes the offset range for an image inside a viewbox.
#[must_use]
pub fn compute_bounds(natural: NaturalSize, viewbox: Size, align: NarrowImageAlign) -> PanBounds {
    let displayed_width = displayed_size(natural, viewbox).width;

    if displayed_width <= viewbox.width + FIT_TOLERANCE {
        let offset = match align {
            NarrowImageAlign::Left => 0.0,
            NarrowImageAlign::Center => (viewbox.width - displayed_width) / 2.0,
        };
        return PanBounds::pinned(offset);
    }

    PanBounds {
        min: (viewbox.width - displayed_width).min(0.0),
        max: 0.0,
    }
}

/// Rectangle where the image is drawn, relative to the viewbox origin.
///
/// Vertically the image is centered; horizontally it is shifted by
/// `translate_x`.
#[must_use]
pub fn image_rect(natural: NaturalSize, viewbox: Size, translate_x: f32) -> Rectangle {
    let size = displayed_size(natural, viewbox);
    let y = (viewbox.height - size.height) / 2.0;
    Rectangle::new(Point::new(translate_x, y), size)
}

/// Manages the horizontal offset of the pannable image.
#[derive(Debug, Clone)]
pub struct PanState {
    translate_x: f32,
    bounds: PanBounds,
    panning_enabled: bool,
    step: f32,
    align: NarrowImageAlign,
}

impl Default for PanState {
    fn default() -> Self {
        Self::new(DEFAULT_PAN_STEP, NarrowImageAlign::default())
    }
}

impl PanState {
    /// Creates a state with the given step (clamped to the supported range)
    /// and narrow-image policy.
    #[must_use]
    pub fn new(step: f32, align: NarrowImageAlign) -> Self {
        Self {
            translate_x: 0.0,
            bounds: PanBounds::default(),
            panning_enabled: false,
            step: clamp_pan_step(step),
            align,
        }
    }

    /// Moves the offset back to the left edge and forgets the bounds, so
    /// panning stays disabled until the next [`recompute`](Self::recompute).
    pub fn reset(&mut self) {
        self.translate_x = 0.0;
        self.bounds = PanBounds::default();
        self.panning_enabled = false;
    }

    /// Recomputes the bounds from the current geometry and brings the
    /// offset back into range. Returns the new bounds.
    pub fn recompute(&mut self, natural: NaturalSize, viewbox: Size) -> PanBounds {
        self.bounds = compute_bounds(natural, viewbox, self.align);
        self.panning_enabled = !self.bounds.is_pinned();
        self.translate_x = self.bounds.clamp(self.translate_x);
        self.bounds
    }

    /// Reveals more of the left side of the image.
    pub fn pan_left(&mut self) {
        self.translate_x = self.bounds.clamp(self.translate_x + self.step);
    }

    /// Reveals more of the right side of the image.
    pub fn pan_right(&mut self) {
        self.translate_x = self.bounds.clamp(self.translate_x - self.step);
    }

    #[must_use]
    pub fn translate_x(&self) -> f32 {
        self.translate_x
    }

    #[must_use]
    pub fn bounds(&self) -> PanBounds {
        self.bounds
    }

    #[must_use]
    pub fn min_translate_x(&self) -> f32 {
        self.bounds.min
    }

    #[must_use]
    pub fn max_translate_x(&self) -> f32 {
        self.bounds.max
    }

    /// Whether the image is wider than the viewbox.
    #[must_use]
    pub fn can_pan(&self) -> bool {
        self.panning_enabled
    }

    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[must_use]
    pub fn align(&self) -> NarrowImageAlign {
        self.align
    }

    /// Whether the left arrow would move the image.
    #[must_use]
    pub fn can_pan_left(&self) -> bool {
        self.panning_enabled && self.translate_x < self.bounds.max
    }

    /// Whether the right arrow would move the image.
    #[must_use]
    pub fn can_pan_right(&self) -> bool {
        self.panning_enabled && self.translate_x > self.bounds.min
    }
}

/// Keeps configured step values inside the supported range.
#[must_use]
pub fn clamp_pan_step(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_PAN_STEP, MAX_PAN_STEP)
    } else {
        DEFAULT_PAN_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn viewbox() -> Size {
        Size::new(1600.0, 900.0)
    }

    fn wide_image() -> NaturalSize {
        NaturalSize::new(3000, 1000)
    }

    fn opened(natural: NaturalSize, viewbox: Size, align: NarrowImageAlign) -> PanState {
        let mut state = PanState::new(DEFAULT_PAN_STEP, align);
        state.reset();
        state.recompute(natural, viewbox);
        state
    }

    #[test]
    fn displayed_size_scales_to_viewbox_height() {
        let size = displayed_size(wide_image(), viewbox());
        assert_abs_diff_eq!(size.width, 2700.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.height, 900.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn zero_height_uses_unit_denominator() {
        let size = displayed_size(NaturalSize::new(2, 0), Size::new(100.0, 50.0));
        assert_abs_diff_eq!(size.width, 100.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.height, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn wide_image_bounds_span_overflow() {
        let state = opened(wide_image(), viewbox(), NarrowImageAlign::Center);
        assert_abs_diff_eq!(state.min_translate_x(), -1100.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.max_translate_x(), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.translate_x(), 0.0, epsilon = F32_EPSILON);
        assert!(state.can_pan());
    }

    #[test]
    fn narrow_image_is_centered_and_pinned() {
        // 800x600 scaled to 900 high is 1200 wide, which fits in 1600.
        let state = opened(NaturalSize::new(800, 600), viewbox(), NarrowImageAlign::Center);
        assert!(!state.can_pan());
        assert_abs_diff_eq!(state.min_translate_x(), 200.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.max_translate_x(), 200.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.translate_x(), 200.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn narrow_image_left_aligned_policy_pins_to_zero() {
        let state = opened(NaturalSize::new(800, 600), viewbox(), NarrowImageAlign::Left);
        assert!(!state.can_pan());
        assert_abs_diff_eq!(state.min_translate_x(), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.max_translate_x(), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.translate_x(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn overflow_within_tolerance_counts_as_fit() {
        // 1600.4 wide in a 1600 viewbox stays within the half-pixel slack.
        let natural = NaturalSize::new(16004, 9000);
        let state = opened(natural, viewbox(), NarrowImageAlign::Left);
        assert!(!state.can_pan());
    }

    #[test]
    fn overflow_beyond_tolerance_enables_panning() {
        let natural = NaturalSize::new(16010, 9000);
        let state = opened(natural, viewbox(), NarrowImageAlign::Left);
        assert!(state.can_pan());
        assert!(state.min_translate_x() < 0.0);
    }

    #[test]
    fn zero_width_image_fits() {
        let state = opened(NaturalSize::new(0, 100), viewbox(), NarrowImageAlign::Center);
        assert!(!state.can_pan());
        assert_abs_diff_eq!(state.translate_x(), 800.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn pan_right_moves_by_step_and_stops_at_min() {
        let mut state = opened(wide_image(), viewbox(), NarrowImageAlign::Center);
        state.pan_right();
        assert_abs_diff_eq!(state.translate_x(), -60.0, epsilon = F32_EPSILON);

        for _ in 0..100 {
            state.pan_right();
        }
        assert_abs_diff_eq!(state.translate_x(), -1100.0, epsilon = F32_EPSILON);
        assert!(!state.can_pan_right());
        assert!(state.can_pan_left());
    }

    #[test]
    fn seven_left_presses_from_min() {
        let mut state = opened(wide_image(), viewbox(), NarrowImageAlign::Center);
        for _ in 0..100 {
            state.pan_right();
        }

        let mut seen = Vec::new();
        for _ in 0..7 {
            state.pan_left();
            seen.push(state.translate_x());
        }

        let expected = [-1040.0, -980.0, -920.0, -860.0, -800.0, -740.0, -680.0];
        for (actual, expected) in seen.iter().zip(expected) {
            assert_abs_diff_eq!(*actual, expected, epsilon = F32_EPSILON);
        }
    }

    #[test]
    fn pan_left_snaps_to_max() {
        let mut state = opened(wide_image(), viewbox(), NarrowImageAlign::Center);
        state.pan_right(); // -60
        state.pan_left(); // 0
        state.pan_left(); // clamped
        assert_abs_diff_eq!(state.translate_x(), 0.0, epsilon = F32_EPSILON);
        assert!(!state.can_pan_left());
    }

    #[test]
    fn arrows_do_not_move_pinned_image() {
        let mut state = opened(NaturalSize::new(800, 600), viewbox(), NarrowImageAlign::Center);
        state.pan_left();
        assert_abs_diff_eq!(state.translate_x(), 200.0, epsilon = F32_EPSILON);
        state.pan_right();
        assert_abs_diff_eq!(state.translate_x(), 200.0, epsilon = F32_EPSILON);
        assert!(!state.can_pan_left());
        assert!(!state.can_pan_right());
    }

    #[test]
    fn invariant_holds_after_every_press() {
        let mut state = opened(wide_image(), viewbox(), NarrowImageAlign::Center);
        let presses = [true, false, false, true, false, false, false, true, true, true];
        for _ in 0..5 {
            for &left in &presses {
                if left {
                    state.pan_left();
                } else {
                    state.pan_right();
                }
                let b = state.bounds();
                assert!(b.min <= state.translate_x() && state.translate_x() <= b.max);
            }
        }
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut state = opened(wide_image(), viewbox(), NarrowImageAlign::Center);
        state.pan_right();
        state.pan_right();
        state.recompute(wide_image(), viewbox());
        let first = state.translate_x();
        state.recompute(wide_image(), viewbox());
        assert_abs_diff_eq!(state.translate_x(), first, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(first, -120.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn widening_viewbox_reclamps_offset() {
        let mut state = opened(wide_image(), viewbox(), NarrowImageAlign::Center);
        for _ in 0..100 {
            state.pan_right();
        }
        // Wider viewbox: 2400x900 leaves only 300px of overflow.
        state.recompute(wide_image(), Size::new(2400.0, 900.0));
        assert_abs_diff_eq!(state.min_translate_x(), -300.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.translate_x(), -300.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn reset_returns_to_left_edge() {
        let mut state = opened(wide_image(), viewbox(), NarrowImageAlign::Center);
        state.pan_right();
        state.reset();
        assert_abs_diff_eq!(state.translate_x(), 0.0, epsilon = F32_EPSILON);
        assert!(!state.can_pan());
        assert!(state.bounds().is_pinned());
    }

    #[test]
    fn image_rect_is_vertically_centered() {
        let rect = image_rect(wide_image(), viewbox(), -100.0);
        assert_abs_diff_eq!(rect.x, -100.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(rect.y, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(rect.width, 2700.0, epsilon = F32_EPSILON);

        let degenerate = image_rect(NaturalSize::new(10, 0), Size::new(100.0, 50.0), 0.0);
        assert_abs_diff_eq!(degenerate.y, 25.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn step_is_clamped() {
        assert_abs_diff_eq!(clamp_pan_step(0.0), MIN_PAN_STEP, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(clamp_pan_step(5000.0), MAX_PAN_STEP, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(clamp_pan_step(f32::NAN), DEFAULT_PAN_STEP, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(PanState::new(25.0, NarrowImageAlign::Left).step(), 25.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn bounds_before_first_measure_pin_offset_at_zero() {
        let mut state = PanState::default();
        state.pan_left();
        state.pan_right();
        assert_abs_diff_eq!(state.translate_x(), 0.0, epsilon = F32_EPSILON);
        assert!(!state.can_pan());
    }
}
