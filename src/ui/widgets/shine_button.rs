// SPDX-License-Identifier: MPL-2.0
//! Button with a bright band sweeping across its face.

use crate::ui::design_tokens::{motion, palette, typography};
use crate::ui::state::animation::cycle_phase;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Text};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Configuration for [`ShineButton`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Label drawn in the middle of the button.
    pub label: String,
    /// Button width in logical pixels.
    pub width: f32,
    /// Button height in logical pixels.
    pub height: f32,
    /// Seconds for one full sweep across the face.
    pub period_secs: f32,
    /// Face color.
    pub base_color: Color,
    /// Color of the sweeping band.
    pub highlight_color: Color,
    /// Width of the sweeping band in logical pixels.
    pub band_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label: "Shine".to_string(),
            width: 180.0,
            height: 48.0,
            period_secs: motion::SWEEP_PERIOD,
            base_color: palette::PRIMARY_500,
            highlight_color: Color {
                a: 0.55,
                ..palette::WHITE
            },
            band_width: 36.0,
        }
    }
}

/// Leading x position of the band for a sweep phase.
///
/// The band starts fully off the left edge and exits fully off the right
/// edge, so `phase` 0 and 1 both leave the face clean.
#[must_use]
pub fn band_position(phase: f32, width: f32, band_width: f32) -> f32 {
    let travel = width + 2.0 * band_width;
    -band_width + phase.clamp(0.0, 1.0) * travel
}

/// Live shine button preview.
pub struct ShineButton {
    config: Config,
    elapsed: f32,
}

impl ShineButton {
    #[must_use]
    pub fn new(config: Config, elapsed: f32) -> Self {
        Self { config, elapsed }
    }

    /// Creates a Canvas widget from this button.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let (width, height) = (self.config.width, self.config.height);
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for ShineButton {
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
        let size = Size::new(self.config.width, self.config.height);

        let face = Path::rounded_rectangle(Point::ORIGIN, size, 8.0.into());
        frame.fill(&face, self.config.base_color);

        // The sweeping band is a skewed quad clamped to the face so it
        // never paints outside the button.
        let phase = cycle_phase(self.elapsed, self.config.period_secs);
        let x = band_position(phase, size.width, self.config.band_width);
        let skew = size.height * 0.5;

        let clamp = |v: f32| v.clamp(0.0, size.width);
        let band = {
            let mut builder = canvas::path::Builder::new();
            builder.move_to(Point::new(clamp(x + skew), 0.0));
            builder.line_to(Point::new(clamp(x + skew + self.config.band_width), 0.0));
            builder.line_to(Point::new(clamp(x + self.config.band_width), size.height));
            builder.line_to(Point::new(clamp(x), size.height));
            builder.close();
            builder.build()
        };
        frame.fill(&band, self.config.highlight_color);

        frame.fill_text(Text {
            content: self.config.label.clone(),
            position: Point::new(size.width / 2.0, size.height / 2.0),
            color: palette::WHITE,
            size: typography::BODY_LG.into(),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn band_starts_fully_off_the_left_edge() {
        assert_relative_eq!(band_position(0.0, 180.0, 36.0), -36.0);
    }

    #[test]
    fn band_ends_fully_off_the_right_edge() {
        // At phase 1.0 the leading edge sits one band width past the face.
        assert_relative_eq!(band_position(1.0, 180.0, 36.0), 180.0 + 36.0);
    }

    #[test]
    fn band_position_is_monotonic_in_phase() {
        let mut last = f32::NEG_INFINITY;
        for i in 0..=10 {
            let x = band_position(i as f32 / 10.0, 180.0, 36.0);
            assert!(x > last);
            last = x;
        }
    }

    #[test]
    fn default_config_has_positive_dimensions() {
        let config = Config::default();
        assert!(config.width > 0.0);
        assert!(config.height > 0.0);
        assert!(config.band_width > 0.0);
        assert!(config.period_secs > 0.0);
    }
}
