// SPDX-License-Identifier: MPL-2.0
//! Concentric rings expanding and fading from a center point.

use crate::ui::design_tokens::{motion, palette};
use crate::ui::state::animation::cycle_phase;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Rectangle, Renderer, Theme};

/// Configuration for [`PulseRing`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of rings in flight at once.
    pub ring_count: usize,
    /// Radius a ring reaches before it disappears.
    pub max_radius: f32,
    /// Ring color at full opacity.
    pub color: Color,
    /// Seconds for a ring to travel from center to `max_radius`.
    pub period_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ring_count: 3,
            max_radius: 56.0,
            color: palette::PRIMARY_400,
            period_secs: motion::BOUNCE_PERIOD,
        }
    }
}

/// Expansion progress of ring `index` in `[0, 1)` at `elapsed` seconds.
///
/// Rings are evenly distributed across the cycle so one is always mid-flight.
#[must_use]
pub fn ring_progress(elapsed: f32, period_secs: f32, index: usize, count: usize) -> f32 {
    let count = count.max(1);
    let offset = index as f32 / count as f32;
    cycle_phase(elapsed + offset * period_secs, period_secs)
}

/// Opacity of a ring for an expansion progress (fades out linearly).
#[must_use]
pub fn ring_alpha(progress: f32) -> f32 {
    (1.0 - progress).clamp(0.0, 1.0)
}

/// Live pulse ring preview.
pub struct PulseRing {
    config: Config,
    elapsed: f32,
}

impl PulseRing {
    #[must_use]
    pub fn new(config: Config, elapsed: f32) -> Self {
        Self { config, elapsed }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.config.max_radius * 2.0 + 8.0;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for PulseRing {
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
        let center = frame.center();

        // Solid core dot
        let core = Path::circle(center, 5.0);
        frame.fill(&core, self.config.color);

        for i in 0..self.config.ring_count {
            let progress = ring_progress(
                self.elapsed,
                self.config.period_secs,
                i,
                self.config.ring_count,
            );
            let ring = Path::circle(center, progress * self.config.max_radius);
            frame.stroke(
                &ring,
                Stroke::default().with_width(2.0).with_color(Color {
                    a: self.config.color.a * ring_alpha(progress),
                    ..self.config.color
                }),
            );
        }

        vec![frame.into_geometry()]
    }
}
