// SPDX-License-Identifier: MPL-2.0
//! Text with a color gradient flowing through its characters.

use crate::ui::design_tokens::{motion, palette, typography};
use crate::ui::state::animation::cycle_phase;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text};
use iced::{mouse, Color, Font, Length, Point, Rectangle, Renderer, Theme};

/// Approximate monospace advance as a fraction of the font size.
const MONO_ADVANCE: f32 = 0.6;

/// Phase shift between neighbouring characters.
const CHAR_PHASE_STEP: f32 = 0.06;

/// Configuration for [`GradientText`].
#[derive(Debug, Clone)]
pub struct Config {
    /// The displayed text.
    pub content: String,
    /// Font size of the rendered text.
    pub text_size: f32,
    /// Gradient stops cycled through, in order.
    pub stops: [Color; 3],
    /// Seconds for the gradient to travel one full cycle.
    pub period_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: "Gradient".to_string(),
            text_size: typography::TITLE_LG,
            stops: [
                palette::PRIMARY_400,
                palette::ACCENT_400,
                palette::PRIMARY_200,
            ],
            period_secs: motion::SWEEP_PERIOD,
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Color of the wrapping gradient at a `[0, 1)` phase.
#[must_use]
pub fn color_at(phase: f32, stops: &[Color; 3]) -> Color {
    let phase = phase.rem_euclid(1.0);
    let scaled = phase * stops.len() as f32;
    let index = (scaled as usize) % stops.len();
    let next = (index + 1) % stops.len();
    let t = scaled - scaled.floor();

    Color {
        r: lerp(stops[index].r, stops[next].r, t),
        g: lerp(stops[index].g, stops[next].g, t),
        b: lerp(stops[index].b, stops[next].b, t),
        a: lerp(stops[index].a, stops[next].a, t),
    }
}

/// Live gradient text preview.
pub struct GradientText {
    config: Config,
    elapsed: f32,
}

impl GradientText {
    #[must_use]
    pub fn new(config: Config, elapsed: f32) -> Self {
        Self { config, elapsed }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let advance = self.config.text_size * MONO_ADVANCE;
        let width = advance * self.config.content.chars().count() as f32 + advance;
        let height = self.config.text_size * 2.0;
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for GradientText {
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

        let phase = cycle_phase(self.elapsed, self.config.period_secs);
        let advance = self.config.text_size * MONO_ADVANCE;
        let baseline = bounds.height / 2.0;

        for (i, c) in self.config.content.chars().enumerate() {
            let color = color_at(phase + i as f32 * CHAR_PHASE_STEP, &self.config.stops);
            frame.fill_text(Text {
                content: c.to_string(),
                position: Point::new(i as f32 * advance, baseline),
                color,
                size: self.config.text_size.into(),
                font: Font::MONOSPACE,
                align_y: iced::alignment::Vertical::Center,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
