// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the shell, grids, and demo screens.

use crate::ui::design_tokens::palette::{self, GRAY_100, GRAY_900};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Color, Theme};

/// Background color used by the header and sidebar chrome.
pub fn chrome_background(scheme: &ColorScheme) -> Color {
    scheme.surface_secondary
}

/// Flat surface color behind demo previews in light mode.
pub fn preview_light_surface_color() -> Color {
    GRAY_100
}

/// Flat surface color behind demo previews in dark mode.
pub fn preview_dark_surface_color() -> Color {
    GRAY_900
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for success text and the "copied" confirmation.
pub fn success_text_color() -> Color {
    palette::SUCCESS_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Accent color for the "new" badge.
pub fn new_badge_color() -> Color {
    palette::SUCCESS_500
}

/// Accent color for the "premium" badge.
pub fn premium_badge_color() -> Color {
    palette::WARNING_500
}

/// Style for the flat surface behind a demo preview.
pub fn preview_surface_style(background_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(background_color)),
        ..Default::default()
    }
}
