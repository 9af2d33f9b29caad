// SPDX-License-Identifier: MPL-2.0
//! Loader made of bars rising and falling in a travelling wave.

use crate::ui::design_tokens::{motion, palette};
use crate::ui::state::animation::cycle_phase;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};
use std::f32::consts::PI;

/// Configuration for [`WaveLoader`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of bars.
    pub bar_count: usize,
    /// Width of each bar.
    pub bar_width: f32,
    /// Gap between bars.
    pub gap: f32,
    /// Height of a bar at the wave's crest.
    pub max_height: f32,
    /// Fraction of `max_height` a bar keeps at the trough.
    pub min_ratio: f32,
    /// Seconds for the wave to travel across all bars.
    pub period_secs: f32,
    /// Bar color.
    pub color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bar_count: 5,
            bar_width: 8.0,
            gap: 6.0,
            max_height: 48.0,
            min_ratio: 0.3,
            period_secs: motion::LOADER_PERIOD,
            color: palette::ACCENT_500,
        }
    }
}

/// Height ratio of bar `index` in `[min_ratio, 1]` at `elapsed` seconds.
#[must_use]
pub fn bar_ratio(elapsed: f32, config_period: f32, min_ratio: f32, index: usize, count: usize) -> f32 {
    let count = count.max(1);
    let phase = cycle_phase(elapsed, config_period);
    let offset = index as f32 / count as f32;
    let wave = ((phase - offset) * 2.0 * PI).sin() * 0.5 + 0.5;
    min_ratio + (1.0 - min_ratio) * wave
}

/// Live wave loader preview.
pub struct WaveLoader {
    config: Config,
    elapsed: f32,
}

impl WaveLoader {
    #[must_use]
    pub fn new(config: Config, elapsed: f32) -> Self {
        Self { config, elapsed }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let width = self.config.bar_count as f32 * (self.config.bar_width + self.config.gap);
        let height = self.config.max_height;
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for WaveLoader {
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

        for i in 0..self.config.bar_count {
            let ratio = bar_ratio(
                self.elapsed,
                self.config.period_secs,
                self.config.min_ratio,
                i,
                self.config.bar_count,
            );
            let height = self.config.max_height * ratio;
            let x = i as f32 * (self.config.bar_width + self.config.gap);
            let y = bounds.height - height;

            let bar = Path::rounded_rectangle(
                Point::new(x, y),
                Size::new(self.config.bar_width, height),
                (self.config.bar_width / 2.0).into(),
            );
            frame.fill(&bar, self.config.color);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_stay_within_configured_band() {
        for i in 0..5 {
            for t in 0..100 {
                let r = bar_ratio(t as f32 * 0.05, 1.2, 0.3, i, 5);
                assert!((0.3 - 1e-5..=1.0 + 1e-5).contains(&r), "ratio out of band: {r}");
            }
        }
    }

    #[test]
    fn neighbouring_bars_are_phase_shifted() {
        let a = bar_ratio(0.25, 1.2, 0.3, 0, 5);
        let b = bar_ratio(0.25, 1.2, 0.3, 1, 5);
        assert_ne!(a, b);
    }

    #[test]
    fn zero_count_does_not_divide_by_zero() {
        let r = bar_ratio(0.5, 1.2, 0.3, 0, 0);
        assert!(r.is_finite());
    }
}
