// SPDX-License-Identifier: MPL-2.0
//! Fixed-aspect surface that draws an image scaled to its height and shifted
//! horizontally by a pan offset.
//!
//! The widget owns no pan logic. It sizes itself with [`AspectRatio::fit`],
//! clips the image to its bounds, and reports its settled size back through
//! `on_measure` so the controller can recompute bounds against real layout
//! geometry.

use crate::media::NaturalSize;
use crate::ui::design_tokens::palette;
use crate::ui::state::pan::image_rect;
use crate::ui::state::AspectRatio;
use iced::advanced::image::{self as advanced_image, Renderer as _};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::widget::image;
use iced::{window, Border, Color, Element, Event, Length, Radians, Rectangle, Shadow, Size, Theme};

/// Pannable image surface.
pub struct PanSurface<'a, Message> {
    handle: image::Handle,
    natural: NaturalSize,
    translate_x: f32,
    aspect: AspectRatio,
    measured: Option<Size>,
    backdrop: Color,
    on_measure: Box<dyn Fn(Size) -> Message + 'a>,
}

impl<'a, Message> PanSurface<'a, Message> {
    /// Creates a surface for `handle`, whose intrinsic size is `natural`.
    ///
    /// `on_measure` is called with the laid-out size whenever it differs from
    /// the size last passed to [`measured`](Self::measured).
    pub fn new(
        handle: image::Handle,
        natural: NaturalSize,
        on_measure: impl Fn(Size) -> Message + 'a,
    ) -> Self {
        Self {
            handle,
            natural,
            translate_x: 0.0,
            aspect: AspectRatio::default(),
            measured: None,
            backdrop: palette::BLACK,
            on_measure: Box::new(on_measure),
        }
    }

    #[must_use]
    pub fn translate_x(mut self, translate_x: f32) -> Self {
        self.translate_x = translate_x;
        self
    }

    #[must_use]
    pub fn aspect(mut self, aspect: AspectRatio) -> Self {
        self.aspect = aspect;
        self
    }

    /// Size the controller currently holds for this surface.
    #[must_use]
    pub fn measured(mut self, measured: Option<Size>) -> Self {
        self.measured = measured;
        self
    }

    /// Color painted behind the image where it does not cover the viewbox.
    #[must_use]
    pub fn backdrop(mut self, color: Color) -> Self {
        self.backdrop = color;
        self
    }

    fn needs_measure(&self, size: Size) -> bool {
        self.measured != Some(size)
    }

    /// Message to publish for `event` given the laid-out `size`.
    ///
    /// Layout has settled by the time a frame is requested, so only
    /// redraw requests report a measurement.
    fn measurement(&self, event: &Event, size: Size) -> Option<Message> {
        match event {
            Event::Window(window::Event::RedrawRequested(_)) if self.needs_measure(size) => {
                Some((self.on_measure)(size))
            }
            _ => None,
        }
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for PanSurface<'_, Message> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(self.aspect.fit(limits.max()))
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border::default(),
                shadow: Shadow::default(),
                snap: true,
            },
            self.backdrop,
        );

        let local = image_rect(self.natural, bounds.size(), self.translate_x);
        let image_bounds = Rectangle {
            x: bounds.x + local.x,
            y: bounds.y + local.y,
            ..local
        };

        renderer.with_layer(bounds, |renderer| {
            let image = advanced_image::Image {
                handle: self.handle.clone(),
                filter_method: advanced_image::FilterMethod::Linear,
                rotation: Radians(0.0),
                opacity: 1.0,
                snap: true,
                border_radius: iced::border::Radius::default(),
            };

            renderer.draw_image(image, image_bounds, bounds);
        });
    }

    fn update(
        &mut self,
        _tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        if let Some(message) = self.measurement(event, layout.bounds().size()) {
            shell.publish(message);
        }
    }
}

impl<'a, Message: 'a> From<PanSurface<'a, Message>> for Element<'a, Message> {
    fn from(surface: PanSurface<'a, Message>) -> Self {
        Element::new(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> PanSurface<'static, Size> {
        PanSurface::new(
            image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            NaturalSize::new(3000, 1000),
            |size| size,
        )
    }

    #[test]
    fn unmeasured_surface_requests_measure() {
        assert!(surface().needs_measure(Size::new(1600.0, 900.0)));
    }

    #[test]
    fn matching_measurement_is_not_republished() {
        let surface = surface().measured(Some(Size::new(1600.0, 900.0)));
        assert!(!surface.needs_measure(Size::new(1600.0, 900.0)));
        assert!(surface.needs_measure(Size::new(1280.0, 720.0)));
    }

    fn redraw() -> Event {
        Event::Window(window::Event::RedrawRequested(iced::time::Instant::now()))
    }

    #[test]
    fn redraw_reports_new_size() {
        let message = surface().measurement(&redraw(), Size::new(640.0, 360.0));
        assert_eq!(message, Some(Size::new(640.0, 360.0)));
    }

    #[test]
    fn redraw_with_recorded_size_stays_quiet() {
        let surface = surface().measured(Some(Size::new(640.0, 360.0)));
        assert_eq!(surface.measurement(&redraw(), Size::new(640.0, 360.0)), None);
    }

    #[test]
    fn other_events_do_not_measure() {
        let event = Event::Window(window::Event::Resized(Size::new(800.0, 600.0)));
        assert_eq!(surface().measurement(&event, Size::new(640.0, 360.0)), None);
    }
}
