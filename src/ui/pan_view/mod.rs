// SPDX-License-Identifier: MPL-2.0
//! Pannable 16:9 view controller.
//!
//! Owns visibility and the [`PanState`] of the cropped view. Bounds are only
//! computed once the [`PanSurface`](crate::ui::widgets::PanSurface) has
//! reported its laid-out size; until then the offset stays at zero and the
//! arrows are disabled. A resize drops the measurement, which disables the
//! arrows again until the surface reports its new size.

mod view;

pub use view::{view, ViewContext};

use crate::media::{ImageData, NaturalSize};
use crate::ui::state::{AspectRatio, NarrowImageAlign, PanState};
use iced::Size;

/// Messages handled by the pan view.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Reveal more of the left side of the image.
    PanLeft,
    /// Reveal more of the right side of the image.
    PanRight,
    Close,
    /// The surface reported its settled size.
    ViewboxMeasured(Size),
    /// The window changed size; the surface must be measured again.
    LayoutInvalidated,
}

/// Pan view state.
#[derive(Debug, Clone)]
pub struct State {
    visible: bool,
    pan: PanState,
    natural: Option<NaturalSize>,
    viewbox: Option<Size>,
    aspect: AspectRatio,
}

impl Default for State {
    fn default() -> Self {
        Self {
            visible: false,
            pan: PanState::default(),
            natural: None,
            viewbox: None,
            aspect: AspectRatio::default(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new(step: f32, align: NarrowImageAlign, aspect: AspectRatio) -> Self {
        Self {
            pan: PanState::new(step, align),
            aspect,
            ..Self::default()
        }
    }

    /// Shows the view for `image`. Does nothing and returns `false` when no
    /// image is loaded.
    pub fn open(&mut self, image: Option<&ImageData>) -> bool {
        let Some(image) = image else {
            return false;
        };

        self.visible = true;
        self.natural = Some(image.natural);
        self.pan.reset();
        self.viewbox = None;
        true
    }

    /// Hides the view. The offset is kept until the next [`open`](Self::open).
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) {
        if !self.visible {
            return;
        }

        match message {
            // Bounds from before a resize are stale until the next measure.
            Message::PanLeft if self.viewbox.is_some() => self.pan.pan_left(),
            Message::PanRight if self.viewbox.is_some() => self.pan.pan_right(),
            Message::PanLeft | Message::PanRight => {}
            Message::Close => self.close(),
            Message::ViewboxMeasured(size) => {
                self.viewbox = Some(size);
                if let Some(natural) = self.natural {
                    let bounds = self.pan.recompute(natural, size);
                    tracing::debug!(
                        width = size.width,
                        height = size.height,
                        min = bounds.min,
                        max = bounds.max,
                        "pan bounds recomputed"
                    );
                }
            }
            Message::LayoutInvalidated => self.viewbox = None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn pan(&self) -> &PanState {
        &self.pan
    }

    /// Last size reported by the surface, if it is still current.
    #[must_use]
    pub fn viewbox(&self) -> Option<Size> {
        self.viewbox
    }

    #[must_use]
    pub fn aspect(&self) -> AspectRatio {
        self.aspect
    }

    /// Whether the left arrow is enabled for the current measurement.
    #[must_use]
    pub fn can_pan_left(&self) -> bool {
        self.viewbox.is_some() && self.pan.can_pan_left()
    }

    /// Whether the right arrow is enabled for the current measurement.
    #[must_use]
    pub fn can_pan_right(&self) -> bool {
        self.viewbox.is_some() && self.pan.can_pan_right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, image_with_size, F32_EPSILON};
    use crate::ui::state::pan::DEFAULT_PAN_STEP;

    fn opened(width: u32, height: u32) -> State {
        let mut state = State::default();
        assert!(state.open(Some(&image_with_size(width, height))));
        state.handle(Message::ViewboxMeasured(Size::new(1600.0, 900.0)));
        state
    }

    #[test]
    fn open_without_image_is_noop() {
        let mut state = State::default();
        assert!(!state.open(None));
        assert!(!state.is_visible());
    }

    #[test]
    fn open_waits_for_measurement() {
        let mut state = State::default();
        state.open(Some(&image_with_size(3000, 1000)));
        assert!(state.is_visible());
        assert!(state.viewbox().is_none());
        assert!(!state.pan().can_pan());

        state.handle(Message::PanRight);
        assert_abs_diff_eq!(state.pan().translate_x(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn measurement_enables_panning_for_wide_image() {
        let state = opened(3000, 1000);
        assert!(state.pan().can_pan());
        assert_abs_diff_eq!(state.pan().min_translate_x(), -1100.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.pan().max_translate_x(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn arrow_messages_move_by_step() {
        let mut state = opened(3000, 1000);
        state.handle(Message::PanRight);
        state.handle(Message::PanRight);
        assert_abs_diff_eq!(
            state.pan().translate_x(),
            -2.0 * DEFAULT_PAN_STEP,
            epsilon = F32_EPSILON
        );
        state.handle(Message::PanLeft);
        assert_abs_diff_eq!(
            state.pan().translate_x(),
            -DEFAULT_PAN_STEP,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn close_keeps_offset_until_reopen() {
        let mut state = opened(3000, 1000);
        state.handle(Message::PanRight);
        state.handle(Message::Close);
        assert!(!state.is_visible());
        assert_abs_diff_eq!(state.pan().translate_x(), -60.0, epsilon = F32_EPSILON);

        state.open(Some(&image_with_size(3000, 1000)));
        assert_abs_diff_eq!(state.pan().translate_x(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn hidden_view_ignores_messages() {
        let mut state = opened(3000, 1000);
        state.close();
        state.handle(Message::PanRight);
        state.handle(Message::ViewboxMeasured(Size::new(100.0, 50.0)));
        assert_abs_diff_eq!(state.pan().translate_x(), 0.0, epsilon = F32_EPSILON);
        assert_eq!(state.viewbox(), Some(Size::new(1600.0, 900.0)));
    }

    #[test]
    fn resize_forces_remeasure_and_reclamps() {
        let mut state = opened(3000, 1000);
        for _ in 0..30 {
            state.handle(Message::PanRight);
        }
        assert_abs_diff_eq!(state.pan().translate_x(), -1100.0, epsilon = F32_EPSILON);

        state.handle(Message::LayoutInvalidated);
        assert!(state.viewbox().is_none());

        state.handle(Message::ViewboxMeasured(Size::new(2400.0, 900.0)));
        assert_abs_diff_eq!(state.pan().translate_x(), -300.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn arrows_wait_for_remeasure_after_resize() {
        let mut state = opened(3000, 1000);
        state.handle(Message::PanRight);
        assert!(state.can_pan_left());
        assert!(state.can_pan_right());

        state.handle(Message::LayoutInvalidated);
        assert!(!state.can_pan_left());
        assert!(!state.can_pan_right());

        state.handle(Message::PanRight);
        state.handle(Message::PanLeft);
        assert_abs_diff_eq!(state.pan().translate_x(), -60.0, epsilon = F32_EPSILON);

        state.handle(Message::ViewboxMeasured(Size::new(1600.0, 900.0)));
        assert!(state.can_pan_right());
    }

    #[test]
    fn narrow_image_disables_arrows() {
        let state = opened(800, 600);
        assert!(!state.pan().can_pan_left());
        assert!(!state.pan().can_pan_right());
        assert_abs_diff_eq!(state.pan().translate_x(), 200.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn new_uses_given_preferences() {
        let aspect = AspectRatio::new(4, 3).expect("non-zero ratio");
        let state = State::new(25.0, NarrowImageAlign::Left, aspect);
        assert_abs_diff_eq!(state.pan().step(), 25.0, epsilon = F32_EPSILON);
        assert_eq!(state.pan().align(), NarrowImageAlign::Left);
        assert_eq!(state.aspect(), aspect);
    }
}
