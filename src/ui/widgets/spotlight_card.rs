// SPDX-License-Identifier: MPL-2.0
//! Card with a radial spotlight that follows the cursor.
//!
//! The spotlight is approximated by concentric translucent circles; the
//! cursor position comes straight from the canvas draw call, so no state
//! is tracked anywhere.

use crate::ui::design_tokens::{palette, typography};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Text};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Number of circles approximating the radial falloff.
const FALLOFF_RINGS: usize = 5;

/// Configuration for [`SpotlightCard`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Card title.
    pub title: String,
    /// Supporting body line.
    pub body: String,
    /// Card width in logical pixels.
    pub width: f32,
    /// Card height in logical pixels.
    pub height: f32,
    /// Card surface color.
    pub base_color: Color,
    /// Spotlight color at the center of the falloff.
    pub spotlight_color: Color,
    /// Outer radius of the spotlight.
    pub spotlight_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Spotlight".to_string(),
            body: "Move the cursor over this card".to_string(),
            width: 320.0,
            height: 180.0,
            base_color: palette::GRAY_900,
            spotlight_color: Color {
                a: 0.10,
                ..palette::PRIMARY_200
            },
            spotlight_radius: 120.0,
        }
    }
}

/// Alpha multiplier of falloff ring `i` of `rings`.
///
/// Ring 0 is the innermost and brightest; the outermost ring fades to a
/// near-invisible halo.
#[must_use]
pub fn falloff_alpha(i: usize, rings: usize) -> f32 {
    if rings == 0 {
        return 0.0;
    }
    let t = (i + 1) as f32 / rings as f32;
    (1.0 - t * 0.85).max(0.0)
}

/// Radius of falloff ring `i` of `rings` for an outer radius.
#[must_use]
pub fn falloff_radius(i: usize, rings: usize, outer: f32) -> f32 {
    if rings == 0 {
        return 0.0;
    }
    outer * (i + 1) as f32 / rings as f32
}

/// Live spotlight card preview.
pub struct SpotlightCard {
    config: Config,
}

impl SpotlightCard {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let (width, height) = (self.config.width, self.config.height);
        Canvas::new(self)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for SpotlightCard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = Size::new(self.config.width, self.config.height);

        let card = Path::rounded_rectangle(Point::ORIGIN, size, 12.0.into());
        frame.fill(&card, self.config.base_color);

        // Spotlight only while the cursor is over the card; innermost
        // circles are drawn last so their alpha stacks toward the center.
        if let Some(position) = cursor.position_in(bounds) {
            for i in (0..FALLOFF_RINGS).rev() {
                let circle = Path::circle(
                    position,
                    falloff_radius(i, FALLOFF_RINGS, self.config.spotlight_radius),
                );
                frame.fill(
                    &circle,
                    Color {
                        a: self.config.spotlight_color.a * falloff_alpha(i, FALLOFF_RINGS),
                        ..self.config.spotlight_color
                    },
                );
            }
        }

        frame.fill_text(Text {
            content: self.config.title.clone(),
            position: Point::new(20.0, size.height / 2.0 - 16.0),
            color: palette::WHITE,
            size: typography::TITLE_SM.into(),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: self.config.body.clone(),
            position: Point::new(20.0, size.height / 2.0 + 14.0),
            color: palette::GRAY_200,
            size: typography::BODY_SM.into(),
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_rings_are_brighter() {
        for i in 1..FALLOFF_RINGS {
            assert!(falloff_alpha(i, FALLOFF_RINGS) < falloff_alpha(i - 1, FALLOFF_RINGS));
        }
    }

    #[test]
    fn radii_grow_to_outer_radius() {
        let outer = 120.0;
        assert!(falloff_radius(0, FALLOFF_RINGS, outer) > 0.0);
        assert_eq!(falloff_radius(FALLOFF_RINGS - 1, FALLOFF_RINGS, outer), outer);
    }

    #[test]
    fn zero_rings_degenerate_safely() {
        assert_eq!(falloff_alpha(0, 0), 0.0);
        assert_eq!(falloff_radius(0, 0, 120.0), 0.0);
    }

    #[test]
    fn alphas_stay_in_unit_range() {
        for i in 0..FALLOFF_RINGS {
            let a = falloff_alpha(i, FALLOFF_RINGS);
            assert!((0.0..=1.0).contains(&a));
        }
    }
}
