// SPDX-License-Identifier: MPL-2.0
//! A row of cards bouncing with a stagger.

use crate::ui::design_tokens::{motion, palette};
use crate::ui::state::animation::{cycle_phase, ease_out_bounce, ping_pong};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Configuration for [`BounceCards`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of cards in the row.
    pub card_count: usize,
    /// Side length of each (square) card.
    pub card_size: f32,
    /// Gap between cards.
    pub gap: f32,
    /// Peak lift of a bounce in logical pixels.
    pub amplitude: f32,
    /// Seconds for one bounce cycle.
    pub period_secs: f32,
    /// Phase offset between neighbouring cards, in seconds.
    pub stagger_secs: f32,
    /// Card color.
    pub color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            card_count: 3,
            card_size: 56.0,
            gap: 16.0,
            amplitude: 36.0,
            period_secs: motion::BOUNCE_PERIOD,
            stagger_secs: 0.18,
            color: palette::PRIMARY_400,
        }
    }
}

/// Vertical lift of card `index` in `[0, 1]` at `elapsed` seconds.
///
/// Cards rise smoothly and land with a bounce; neighbours trail by the
/// configured stagger.
#[must_use]
pub fn lift(elapsed: f32, period_secs: f32, stagger_secs: f32, index: usize) -> f32 {
    let phase = cycle_phase(elapsed + index as f32 * stagger_secs, period_secs);
    ease_out_bounce(ping_pong(phase))
}

/// Live bounce cards preview.
pub struct BounceCards {
    config: Config,
    elapsed: f32,
}

impl BounceCards {
    #[must_use]
    pub fn new(config: Config, elapsed: f32) -> Self {
        Self { config, elapsed }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let width = self.config.card_count as f32 * (self.config.card_size + self.config.gap);
        let height = self.config.card_size + self.config.amplitude + self.config.gap;
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for BounceCards {
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

        let floor = bounds.height - self.config.card_size;
        for i in 0..self.config.card_count {
            let x = i as f32 * (self.config.card_size + self.config.gap);
            let y = floor
                - lift(
                    self.elapsed,
                    self.config.period_secs,
                    self.config.stagger_secs,
                    i,
                ) * self.config.amplitude;

            let card = Path::rounded_rectangle(
                Point::new(x, y),
                Size::new(self.config.card_size, self.config.card_size),
                8.0.into(),
            );
            frame.fill(&card, self.config.color);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lift_stays_in_unit_range() {
        for i in 0..3 {
            for t in 0..100 {
                let l = lift(t as f32 * 0.05, 1.6, 0.18, i);
                assert!((0.0..=1.0 + 1e-5).contains(&l), "lift out of range: {l}");
            }
        }
    }

    #[test]
    fn cycle_start_rests_on_the_floor() {
        assert_relative_eq!(lift(0.0, 1.6, 0.0, 0), 0.0);
    }

    #[test]
    fn staggered_cards_are_out_of_phase() {
        let a = lift(0.4, 1.6, 0.18, 0);
        let b = lift(0.4, 1.6, 0.18, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn zero_stagger_moves_cards_in_unison() {
        let a = lift(0.7, 1.6, 0.0, 0);
        let b = lift(0.7, 1.6, 0.0, 2);
        assert_relative_eq!(a, b);
    }
}
