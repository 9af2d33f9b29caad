// SPDX-License-Identifier: MPL-2.0
//! Animated orbit loader using Canvas for smooth rotation.

use crate::ui::design_tokens::{motion, palette};
use crate::ui::state::animation::cycle_phase;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Configuration for [`OrbitLoader`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Diameter of the loader.
    pub size: f32,
    /// Arc color.
    pub color: Color,
    /// Seconds per revolution of the outer arc.
    pub period_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 64.0,
            color: palette::PRIMARY_400,
            period_secs: motion::LOADER_PERIOD,
        }
    }
}

/// Rotation angle in radians for an elapsed time.
#[must_use]
pub fn rotation(elapsed: f32, period_secs: f32) -> f32 {
    cycle_phase(elapsed, period_secs) * 2.0 * PI
}

/// Animated loader with two counter-rotating arcs.
pub struct OrbitLoader {
    cache: Cache,
    config: Config,
    rotation: f32, // Rotation angle in radians
}

impl OrbitLoader {
    /// Creates a new orbit loader at a given elapsed time.
    #[must_use]
    pub fn new(config: Config, elapsed: f32) -> Self {
        let rotation = rotation(elapsed, config.period_secs);
        Self {
            cache: Cache::default(),
            config,
            rotation,
        }
    }

    /// Creates a Canvas widget from this loader.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.config.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Strokes a half arc of `radius` starting at `start_angle`.
    fn stroke_arc(&self, frame: &mut Frame, center: Point, radius: f32, start_angle: f32) {
        let end_angle = start_angle + PI;

        // Build arc path manually from line segments for smooth appearance
        let mut arc_path = canvas::path::Builder::new();
        let start_x = center.x + radius * start_angle.cos();
        let start_y = center.y + radius * start_angle.sin();
        arc_path.move_to(Point::new(start_x, start_y));

        let segments = 30;
        #[allow(clippy::cast_precision_loss)]
        // segments=30, i∈[1,30] - well within f32 precision
        for i in 1..=segments {
            let t = i as f32 / segments as f32;
            let angle = start_angle + (end_angle - start_angle) * t;
            let x = center.x + radius * angle.cos();
            let y = center.y + radius * angle.sin();
            arc_path.line_to(Point::new(x, y));
        }

        frame.stroke(
            &arc_path.build(),
            Stroke::default()
                .with_width(3.0)
                .with_color(self.config.color)
                .with_line_cap(canvas::LineCap::Round),
        );
    }
}

impl<Message> canvas::Program<Message> for OrbitLoader {
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
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                // Draw background circle (subtle)
                let background_circle = Path::circle(center, radius);
                frame.stroke(
                    &background_circle,
                    Stroke::default().with_width(3.0).with_color(Color {
                        a: 0.25,
                        ..self.config.color
                    }),
                );

                // Outer arc leads, inner arc counter-rotates at 60% radius
                let start = self.rotation - PI / 2.0; // -90° offset to start at top
                self.stroke_arc(frame, center, radius, start);
                self.stroke_arc(frame, center, radius * 0.6, -start);
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rotation_completes_a_revolution_per_period() {
        assert_relative_eq!(rotation(0.0, 1.2), 0.0);
        assert_relative_eq!(rotation(0.6, 1.2), PI, epsilon = 1e-5);
        assert_relative_eq!(rotation(1.2, 1.2), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn rotation_stays_below_full_turn() {
        for t in 0..100 {
            let r = rotation(t as f32 * 0.37, 1.2);
            assert!((0.0..2.0 * PI).contains(&r));
        }
    }
}
