// SPDX-License-Identifier: MPL-2.0
//! Text with RGB-split glitch spikes.
//!
//! Most of the cycle the text sits still. During a short spike window two
//! tinted copies jitter around the base text. Jitter offsets come from a
//! pure hash of the time bucket, so rendering is reproducible.

use crate::ui::design_tokens::{palette, typography};
use crate::ui::state::animation::cycle_phase;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text};
use iced::{mouse, Color, Font, Length, Point, Rectangle, Renderer, Theme};

/// Fraction of each cycle spent glitching.
const SPIKE_WINDOW: f32 = 0.18;

/// Jitter frames per second during a spike.
const JITTER_HZ: f32 = 24.0;

/// Maximum jitter displacement in logical pixels.
const MAX_JITTER: f32 = 3.0;

/// Configuration for [`GlitchText`].
#[derive(Debug, Clone)]
pub struct Config {
    /// The displayed text.
    pub content: String,
    /// Font size of the rendered text.
    pub text_size: f32,
    /// Base text color.
    pub color: Color,
    /// Tint of the first displaced copy.
    pub tint_a: Color,
    /// Tint of the second displaced copy.
    pub tint_b: Color,
    /// Seconds between glitch spikes.
    pub period_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: "GLITCH".to_string(),
            text_size: typography::TITLE_LG,
            color: palette::WHITE,
            tint_a: Color {
                a: 0.7,
                ..palette::ERROR_500
            },
            tint_b: Color {
                a: 0.7,
                ..palette::ACCENT_400
            },
            period_secs: 2.0,
        }
    }
}

/// Whether the glitch spike is active for a cycle phase.
#[must_use]
pub fn is_spiking(phase: f32) -> bool {
    phase < SPIKE_WINDOW
}

/// Deterministic jitter offset for `(bucket, channel)` in
/// `[-MAX_JITTER, MAX_JITTER]` on both axes.
#[must_use]
pub fn jitter_offset(bucket: usize, channel: u8) -> (f32, f32) {
    let mut h = (bucket as u64)
        .wrapping_mul(0x2545_F491_4F6C_DD1D)
        .wrapping_add(u64::from(channel) << 17);
    h ^= h >> 31;
    h = h.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let unit_x = ((h & 0xFFFF) as f32 / 65535.0) * 2.0 - 1.0;
    let unit_y = (((h >> 16) & 0xFFFF) as f32 / 65535.0) * 2.0 - 1.0;
    (unit_x * MAX_JITTER, unit_y * MAX_JITTER)
}

/// Live glitch text preview.
pub struct GlitchText {
    config: Config,
    elapsed: f32,
}

impl GlitchText {
    #[must_use]
    pub fn new(config: Config, elapsed: f32) -> Self {
        Self { config, elapsed }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let width = self.config.text_size * 0.7 * self.config.content.chars().count() as f32
            + self.config.text_size;
        let height = self.config.text_size * 2.0;
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }

    fn text_at(&self, position: Point, color: Color) -> Text {
        Text {
            content: self.config.content.clone(),
            position,
            color,
            size: self.config.text_size.into(),
            font: Font::MONOSPACE,
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        }
    }
}

impl<Message> canvas::Program<Message> for GlitchText {
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
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        let phase = cycle_phase(self.elapsed, self.config.period_secs);
        if is_spiking(phase) {
            let bucket = (self.elapsed * JITTER_HZ) as usize;
            let (ax, ay) = jitter_offset(bucket, 0);
            let (bx, by) = jitter_offset(bucket, 1);

            frame.fill_text(self.text_at(Point::new(center.x + ax, center.y + ay), self.config.tint_a));
            frame.fill_text(self.text_at(Point::new(center.x + bx, center.y + by), self.config.tint_b));
        }

        frame.fill_text(self.text_at(center, self.config.color));

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spike_window_covers_cycle_start_only() {
        assert!(is_spiking(0.0));
        assert!(is_spiking(SPIKE_WINDOW / 2.0));
        assert!(!is_spiking(SPIKE_WINDOW));
        assert!(!is_spiking(0.9));
    }

    #[test]
    fn jitter_is_deterministic() {
        assert_eq!(jitter_offset(42, 0), jitter_offset(42, 0));
        assert_eq!(jitter_offset(7, 1), jitter_offset(7, 1));
    }

    #[test]
    fn jitter_channels_differ() {
        // Both copies jittering identically would read as one copy.
        assert_ne!(jitter_offset(42, 0), jitter_offset(42, 1));
    }

    #[test]
    fn jitter_stays_within_bounds() {
        for bucket in 0..100 {
            for channel in 0..2 {
                let (x, y) = jitter_offset(bucket, channel);
                assert!(x.abs() <= MAX_JITTER);
                assert!(y.abs() <= MAX_JITTER);
            }
        }
    }
}
