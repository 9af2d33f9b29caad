// SPDX-License-Identifier: MPL-2.0
//! Panel with a bright segment travelling along its border.
//!
//! The glow is a short polyline trail walking the rectangle's perimeter;
//! [`perimeter_point`] parameterizes the walk so the geometry is testable
//! without a renderer.

use crate::ui::design_tokens::{motion, palette};
use crate::ui::state::animation::cycle_phase;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Segments the glow trail is drawn with.
const TRAIL_SEGMENTS: usize = 12;

/// Configuration for [`GlowBorder`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Panel width in logical pixels.
    pub width: f32,
    /// Panel height in logical pixels.
    pub height: f32,
    /// Resting border color.
    pub border_color: Color,
    /// Color of the travelling glow segment.
    pub glow_color: Color,
    /// Fraction of the perimeter covered by the glow trail.
    pub trail: f32,
    /// Seconds for one full lap around the border.
    pub period_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 280.0,
            height: 160.0,
            border_color: palette::GRAY_700,
            glow_color: palette::ACCENT_400,
            trail: 0.18,
            period_secs: motion::SWEEP_PERIOD,
        }
    }
}

/// Point on the rectangle perimeter at parameter `t` in `[0, 1)`.
///
/// The walk starts at the top-left corner and proceeds clockwise:
/// top edge, right edge, bottom edge, left edge.
#[must_use]
pub fn perimeter_point(width: f32, height: f32, t: f32) -> (f32, f32) {
    let t = t.rem_euclid(1.0);
    let perimeter = 2.0 * (width + height);
    let distance = t * perimeter;

    if distance < width {
        (distance, 0.0)
    } else if distance < width + height {
        (width, distance - width)
    } else if distance < 2.0 * width + height {
        (width - (distance - width - height), height)
    } else {
        (0.0, height - (distance - 2.0 * width - height))
    }
}

/// Live glow border preview.
pub struct GlowBorder {
    config: Config,
    elapsed: f32,
}

impl GlowBorder {
    #[must_use]
    pub fn new(config: Config, elapsed: f32) -> Self {
        Self { config, elapsed }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let (width, height) = (self.config.width, self.config.height);
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for GlowBorder {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Inset so the stroke is not clipped by the canvas edge.
        let inset = 3.0;
        let (w, h) = (bounds.width - 2.0 * inset, bounds.height - 2.0 * inset);

        let outline = Path::rounded_rectangle(
            Point::new(inset, inset),
            Size::new(w, h),
            6.0.into(),
        );
        frame.stroke(
            &outline,
            Stroke::default()
                .with_width(1.5)
                .with_color(self.config.border_color),
        );

        // The glow trail fades toward its tail; each segment gets its own
        // alpha so the head stays brightest.
        let head = cycle_phase(self.elapsed, self.config.period_secs);
        for i in 0..TRAIL_SEGMENTS {
            let t0 = head - self.config.trail * (i + 1) as f32 / TRAIL_SEGMENTS as f32;
            let t1 = head - self.config.trail * i as f32 / TRAIL_SEGMENTS as f32;
            let (x0, y0) = perimeter_point(w, h, t0);
            let (x1, y1) = perimeter_point(w, h, t1);

            // Skip segments spanning a corner discontinuity
            if (x1 - x0).abs() > w / 2.0 || (y1 - y0).abs() > h / 2.0 {
                continue;
            }

            let mut segment = canvas::path::Builder::new();
            segment.move_to(Point::new(x0 + inset, y0 + inset));
            segment.line_to(Point::new(x1 + inset, y1 + inset));

            let fade = 1.0 - i as f32 / TRAIL_SEGMENTS as f32;
            frame.stroke(
                &segment.build(),
                Stroke::default()
                    .with_width(3.0)
                    .with_color(Color {
                        a: fade,
                        ..self.config.glow_color
                    })
                    .with_line_cap(canvas::LineCap::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn walk_starts_at_top_left() {
        assert_eq!(perimeter_point(100.0, 50.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn walk_visits_corners_in_clockwise_order() {
        let (w, h) = (100.0, 50.0);
        let perimeter = 2.0 * (w + h);

        let (x, y) = perimeter_point(w, h, w / perimeter);
        assert_relative_eq!(x, w);
        assert_relative_eq!(y, 0.0);

        let (x, y) = perimeter_point(w, h, (w + h) / perimeter);
        assert_relative_eq!(x, w);
        assert_relative_eq!(y, h);

        let (x, y) = perimeter_point(w, h, (2.0 * w + h) / perimeter);
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, h);
    }

    #[test]
    fn walk_wraps_past_one() {
        assert_eq!(
            perimeter_point(100.0, 50.0, 1.25),
            perimeter_point(100.0, 50.0, 0.25)
        );
    }

    #[test]
    fn points_stay_on_the_rectangle() {
        let (w, h) = (280.0, 160.0);
        for i in 0..100 {
            let (x, y) = perimeter_point(w, h, i as f32 / 100.0);
            let on_edge = x.abs() < 1e-3
                || (x - w).abs() < 1e-3
                || y.abs() < 1e-3
                || (y - h).abs() < 1e-3;
            assert!(on_edge, "({x}, {y}) is not on the perimeter");
            assert!((0.0..=w).contains(&x));
            assert!((0.0..=h).contains(&y));
        }
    }
}
