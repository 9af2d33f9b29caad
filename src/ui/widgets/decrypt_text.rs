// SPDX-License-Identifier: MPL-2.0
//! Text that reveals itself out of a scramble of cipher characters.
//!
//! The reveal advances left to right at a fixed character rate. Still
//! hidden characters show a stand-in from a fixed charset, reshuffled a
//! few times a second. The shuffle is a pure hash of character index and
//! time bucket: the same elapsed time always renders the same frame.

use crate::ui::design_tokens::{motion, palette, typography};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text};
use iced::{mouse, Color, Font, Length, Point, Rectangle, Renderer, Theme};

/// Characters the scramble draws from.
const SCRAMBLE_CHARSET: &[u8] = b"!<>-_\\/[]{}=+*^?#________";

/// Scramble reshuffles per second.
const SHUFFLE_HZ: f32 = 14.0;

/// Approximate monospace advance as a fraction of the font size.
const MONO_ADVANCE: f32 = 0.6;

/// Configuration for [`DecryptText`].
#[derive(Debug, Clone)]
pub struct Config {
    /// The text that eventually appears.
    pub content: String,
    /// Reveal rate in characters per second.
    pub chars_per_sec: f32,
    /// Font size of the rendered text.
    pub text_size: f32,
    /// Color of revealed characters.
    pub color: Color,
    /// Color of still-scrambled characters.
    pub scramble_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: "ACCESS GRANTED".to_string(),
            chars_per_sec: motion::DECRYPT_CHARS_PER_SEC,
            text_size: typography::TITLE_MD,
            color: palette::ACCENT_500,
            scramble_color: palette::GRAY_400,
        }
    }
}

/// Number of characters revealed after `elapsed` seconds.
#[must_use]
pub fn revealed_count(len: usize, elapsed: f32, chars_per_sec: f32) -> usize {
    if chars_per_sec <= 0.0 {
        return len;
    }
    ((elapsed.max(0.0) * chars_per_sec) as usize).min(len)
}

/// Deterministic stand-in character for a hidden position.
///
/// `bucket` is the shuffle frame; the same `(index, bucket)` pair always
/// produces the same character.
#[must_use]
pub fn scrambled_char(index: usize, bucket: usize) -> char {
    // Small xorshift-style mix; quality only has to beat visible repetition.
    let mut h = (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ (bucket as u64);
    h ^= h >> 33;
    h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    h ^= h >> 29;
    SCRAMBLE_CHARSET[(h % SCRAMBLE_CHARSET.len() as u64) as usize] as char
}

/// The shuffle frame for an elapsed time.
#[must_use]
pub fn shuffle_bucket(elapsed: f32) -> usize {
    (elapsed.max(0.0) * SHUFFLE_HZ) as usize
}

/// Live decrypt text preview.
pub struct DecryptText {
    config: Config,
    elapsed: f32,
}

impl DecryptText {
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

impl<Message> canvas::Program<Message> for DecryptText {
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

        let chars: Vec<char> = self.config.content.chars().collect();
        let revealed = revealed_count(chars.len(), self.elapsed, self.config.chars_per_sec);
        let bucket = shuffle_bucket(self.elapsed);
        let advance = self.config.text_size * MONO_ADVANCE;
        let baseline = bounds.height / 2.0;

        for (i, &c) in chars.iter().enumerate() {
            let (shown, color) = if i < revealed {
                (c, self.config.color)
            } else if c == ' ' {
                (' ', self.config.scramble_color)
            } else {
                (scrambled_char(i, bucket), self.config.scramble_color)
            };

            frame.fill_text(Text {
                content: shown.to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_progresses_at_configured_rate() {
        assert_eq!(revealed_count(10, 0.0, 12.0), 0);
        assert_eq!(revealed_count(10, 0.5, 12.0), 6);
        assert_eq!(revealed_count(10, 10.0, 12.0), 10);
    }

    #[test]
    fn reveal_never_exceeds_length() {
        assert_eq!(revealed_count(3, 100.0, 12.0), 3);
    }

    #[test]
    fn zero_rate_reveals_everything() {
        // Degenerate rate renders the plain text (rest position)
        assert_eq!(revealed_count(5, 0.0, 0.0), 5);
    }

    #[test]
    fn scrambled_char_is_deterministic() {
        assert_eq!(scrambled_char(3, 7), scrambled_char(3, 7));
        assert_eq!(scrambled_char(0, 0), scrambled_char(0, 0));
    }

    #[test]
    fn scrambled_char_draws_from_charset() {
        for index in 0..50 {
            for bucket in 0..20 {
                let c = scrambled_char(index, bucket);
                assert!(SCRAMBLE_CHARSET.contains(&(c as u8)));
            }
        }
    }

    #[test]
    fn shuffle_bucket_advances_with_time() {
        assert_eq!(shuffle_bucket(0.0), 0);
        assert!(shuffle_bucket(1.0) > shuffle_bucket(0.0));
    }
}
