// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles
//! are cached using `OnceLock` so each SVG is parsed once. All icons use
//! `currentColor` strokes; callers tint them through [`themed`] (follows
//! the active Iced theme) or [`tinted`] (explicit color).
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `heart` not `favorite`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(home, "home.svg", "House outline for the Home entry.");
define_icon!(menu, "menu.svg", "Hamburger menu (three lines).");
define_icon!(search, "search.svg", "Magnifying glass.");
define_icon!(sun, "sun.svg", "Sun (light theme).");
define_icon!(moon, "moon.svg", "Crescent moon (dark theme).");
define_icon!(monitor, "monitor.svg", "Monitor (system theme).");
define_icon!(heart, "heart.svg", "Heart outline.");
define_icon!(heart_filled, "heart-filled.svg", "Filled heart.");
define_icon!(copy, "copy.svg", "Two overlapping pages.");
define_icon!(check, "check.svg", "Checkmark.");
define_icon!(info, "info.svg", "Circled i.");
define_icon!(square, "square.svg", "Rounded square (buttons category).");
define_icon!(type_glyph, "type.svg", "Letter T (text category).");
define_icon!(layers, "layers.svg", "Stacked layers (cards category).");
define_icon!(loader, "loader.svg", "Radial dashes (loaders category).");
define_icon!(zap, "zap.svg", "Lightning bolt (effects category).");
define_icon!(play, "play.svg", "Play triangle (animations category).");
define_icon!(panel_left, "panel-left.svg", "Panel with left rail (collapse toggle).");
define_icon!(cross, "x.svg", "Diagonal cross (dismiss).");
define_icon!(warning, "alert-triangle.svg", "Alert triangle.");

/// Constrains an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon's `currentColor` strokes with the active theme's text color.
pub fn themed(icon: Svg<'static>) -> Svg<'static> {
    icon.style(|theme: &Theme, _status| iced::widget::svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    })
}

/// Tints an icon's `currentColor` strokes with an explicit color.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status| iced::widget::svg::Style { color: Some(color) })
}
