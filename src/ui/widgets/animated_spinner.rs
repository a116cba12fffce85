// SPDX-License-Identifier: MPL-2.0
//! Animated loading spinner drawn on a Canvas.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Sweep of the animated arc, as a fraction of the full circle.
const ARC_FRACTION: f32 = 0.7;

/// Line segments used to approximate the arc.
const ARC_SEGMENTS: u32 = 24;

/// Spinner with a faint circular track and a rotating arc. The caller
/// owns the rotation angle and advances it on its animation tick.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner at the default size.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    /// Overrides the spinner's side length.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Wraps the spinner in a fixed-size Canvas element.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 2.0;

                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(3.0).with_color(Color {
                        a: opacity::TRACK,
                        ..self.color
                    }),
                );

                let point_at = |angle: f32| {
                    Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    )
                };

                let mut arc = canvas::path::Builder::new();
                arc.move_to(point_at(self.rotation));
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=ARC_SEGMENTS {
                    let t = i as f32 / ARC_SEGMENTS as f32;
                    arc.line_to(point_at(self.rotation + ARC_FRACTION * TAU * t));
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(3.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
