// SPDX-License-Identifier: MPL-2.0
//! Button that emits an expanding ripple from each click point.
//!
//! Click positions are tracked in the canvas program state together with
//! the elapsed time at which they started, so ripples age against the
//! same clock that drives every other preview.

use crate::ui::design_tokens::{palette, typography};
use crate::ui::state::animation::ease_in_out;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Text};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Configuration for [`RippleButton`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Label drawn in the middle of the button.
    pub label: String,
    /// Button width in logical pixels.
    pub width: f32,
    /// Button height in logical pixels.
    pub height: f32,
    /// Seconds a ripple takes to expand and fade.
    pub ripple_secs: f32,
    /// Face color.
    pub base_color: Color,
    /// Ripple color at full opacity.
    pub ripple_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label: "Ripple".to_string(),
            width: 180.0,
            height: 48.0,
            ripple_secs: 0.6,
            base_color: palette::PRIMARY_600,
            ripple_color: Color {
                a: 0.4,
                ..palette::WHITE
            },
        }
    }
}

/// One in-flight ripple.
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    pub center: Point,
    /// Clock reading when the ripple started.
    pub started_at: f32,
}

/// Ripples recorded between redraws.
#[derive(Debug, Clone, Default)]
pub struct State {
    ripples: Vec<Ripple>,
}

/// Normalized age of a ripple in `[0, 1]`, clamped once it finished.
#[must_use]
pub fn ripple_progress(elapsed: f32, started_at: f32, ripple_secs: f32) -> f32 {
    if ripple_secs <= 0.0 {
        return 1.0;
    }
    ((elapsed - started_at) / ripple_secs).clamp(0.0, 1.0)
}

/// Radius of a ripple for a progress value.
#[must_use]
pub fn ripple_radius(progress: f32, max_radius: f32) -> f32 {
    ease_in_out(progress) * max_radius
}

/// Opacity multiplier of a ripple for a progress value (fades out).
#[must_use]
pub fn ripple_fade(progress: f32) -> f32 {
    1.0 - progress.clamp(0.0, 1.0)
}

/// Live ripple button preview.
pub struct RippleButton {
    config: Config,
    elapsed: f32,
}

impl RippleButton {
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

impl<Message> canvas::Program<Message> for RippleButton {
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(position) = cursor.position_in(bounds) {
                state.ripples.push(Ripple {
                    center: position,
                    started_at: self.elapsed,
                });
            }
        }

        // Drop finished ripples so the vec stays bounded under click spam.
        let elapsed = self.elapsed;
        let ripple_secs = self.config.ripple_secs;
        state
            .ripples
            .retain(|r| ripple_progress(elapsed, r.started_at, ripple_secs) < 1.0);

        None
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = Size::new(self.config.width, self.config.height);

        let face = Path::rounded_rectangle(Point::ORIGIN, size, 8.0.into());
        frame.fill(&face, self.config.base_color);

        let max_radius = size.width.max(size.height);
        for ripple in &state.ripples {
            let progress = ripple_progress(self.elapsed, ripple.started_at, self.config.ripple_secs);
            if progress >= 1.0 {
                continue;
            }
            let circle = Path::circle(ripple.center, ripple_radius(progress, max_radius));
            frame.fill(
                &circle,
                Color {
                    a: self.config.ripple_color.a * ripple_fade(progress),
                    ..self.config.ripple_color
                },
            );
        }

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

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn progress_clamps_to_unit_range() {
        assert_relative_eq!(ripple_progress(0.0, 0.0, 0.6), 0.0);
        assert_relative_eq!(ripple_progress(0.3, 0.0, 0.6), 0.5);
        assert_relative_eq!(ripple_progress(10.0, 0.0, 0.6), 1.0);
        assert_relative_eq!(ripple_progress(0.0, 5.0, 0.6), 0.0); // not started yet
    }

    #[test]
    fn zero_duration_ripple_is_immediately_finished() {
        assert_relative_eq!(ripple_progress(1.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn radius_grows_to_max() {
        assert_relative_eq!(ripple_radius(0.0, 180.0), 0.0);
        assert_relative_eq!(ripple_radius(1.0, 180.0), 180.0);
        assert!(ripple_radius(0.5, 180.0) > 0.0);
    }

    #[test]
    fn fade_reaches_zero_at_completion() {
        assert_relative_eq!(ripple_fade(0.0), 1.0);
        assert_relative_eq!(ripple_fade(1.0), 0.0);
    }
}
