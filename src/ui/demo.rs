// SPDX-License-Identifier: MPL-2.0
//! Demo screen: live preview plus copyable source for one component.
//!
//! Each demo arm hardcodes its component's representative sample config;
//! the preview is re-created every render from the animation clock's
//! elapsed seconds, so navigating to a demo always starts its animation
//! from the beginning.

use crate::catalog::ComponentMeta;
use crate::i18n::fluent::I18n;
use crate::ui::components::{badge, code_panel};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::{
    bounce_cards, decrypt_text, glitch_text, glow_border, gradient_text, orbit_loader, pulse_ring,
    ripple_button, shine_button, spotlight_card, wave_loader,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::space::horizontal as horizontal_space;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render a demo screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The component being demonstrated.
    pub meta: &'static ComponentMeta,
    /// Embedded source snippet (empty if the asset is missing).
    pub source: String,
    /// Elapsed preview time in seconds.
    pub elapsed: f32,
    /// Whether the transient "copied" confirmation is visible.
    pub copied: bool,
    /// Whether this component is favorited.
    pub favorited: bool,
    /// Whether the effective theme is dark (picks the preview surface).
    pub dark: bool,
}

/// Messages emitted by the demo screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
    CopyPressed,
    ToggleFavorite,
}

/// Render a demo screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(ctx_back_label(ctx.i18n))
        .on_press(Message::Back)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::quiet);

    let heart: Element<'a, Message> = if ctx.favorited {
        icons::tinted(
            icons::sized(icons::heart_filled(), sizing::ICON_MD),
            theme::error_text_color(),
        )
        .into()
    } else {
        icons::themed(icons::sized(icons::heart(), sizing::ICON_MD)).into()
    };
    let favorite_button = button(heart)
        .on_press(Message::ToggleFavorite)
        .padding(spacing::XXS)
        .style(styles::button::quiet);

    let mut title_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(back_button)
        .push(Text::new(ctx.meta.name).size(typography::TITLE_LG));

    if ctx.meta.is_new {
        title_row = title_row.push(badge::new_badge(ctx.i18n));
    }
    if ctx.meta.is_premium {
        title_row = title_row.push(badge::premium_badge(ctx.i18n));
    }
    title_row = title_row.push(horizontal_space()).push(favorite_button);

    let surface = if ctx.dark {
        theme::preview_dark_surface_color()
    } else {
        theme::preview_light_surface_color()
    };

    let preview = container(preview_for(ctx.meta.slug, ctx.elapsed, ctx.i18n))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(theme::preview_surface_style(surface));

    let code = code_panel::view(code_panel::ViewContext {
        i18n: ctx.i18n,
        source: ctx.source,
        copied: ctx.copied,
    })
    .map(|message| match message {
        code_panel::Message::CopyPressed => Message::CopyPressed,
    });

    scrollable(
        Column::new()
            .spacing(spacing::LG)
            .push(title_row)
            .push(
                Text::new(ctx.i18n.tr("demo-preview-title")).size(typography::TITLE_SM),
            )
            .push(preview)
            .push(code),
    )
    .into()
}

fn ctx_back_label(i18n: &I18n) -> Text<'_> {
    Text::new(i18n.tr("demo-back")).size(typography::BODY)
}

/// Live preview instance for a slug with its representative sample config.
///
/// Slugs always come from the registry; the fallback arm only exists for
/// snippets whose demo was removed without its registry entry.
fn preview_for<'a>(slug: &str, elapsed: f32, i18n: &'a I18n) -> Element<'a, Message> {
    match slug {
        "shine-button" => shine_button::ShineButton::new(shine_button::Config::default(), elapsed)
            .into_element(),
        "ripple-button" => {
            ripple_button::RippleButton::new(ripple_button::Config::default(), elapsed)
                .into_element()
        }
        "decrypt-text" => decrypt_text::DecryptText::new(decrypt_text::Config::default(), elapsed)
            .into_element(),
        "glitch-text" => {
            glitch_text::GlitchText::new(glitch_text::Config::default(), elapsed).into_element()
        }
        "gradient-text" => {
            gradient_text::GradientText::new(gradient_text::Config::default(), elapsed)
                .into_element()
        }
        "spotlight-card" => {
            spotlight_card::SpotlightCard::new(spotlight_card::Config::default()).into_element()
        }
        "bounce-cards" => {
            bounce_cards::BounceCards::new(bounce_cards::Config::default(), elapsed).into_element()
        }
        "orbit-loader" => {
            orbit_loader::OrbitLoader::new(orbit_loader::Config::default(), elapsed).into_element()
        }
        "wave-loader" => {
            wave_loader::WaveLoader::new(wave_loader::Config::default(), elapsed).into_element()
        }
        "glow-border" => {
            glow_border::GlowBorder::new(glow_border::Config::default(), elapsed).into_element()
        }
        "pulse-ring" => {
            pulse_ring::PulseRing::new(pulse_ring::Config::default(), elapsed).into_element()
        }
        _ => Text::new(i18n.tr("demo-not-found"))
            .size(typography::BODY_LG)
            .color(theme::error_text_color())
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn every_registry_slug_has_a_preview_arm() {
        let i18n = I18n::default();
        for meta in catalog::all() {
            // The fallback arm renders an error label; a registry slug
            // must never reach it. Rendering is enough to exercise the
            // dispatch without a renderer.
            let _element = preview_for(meta.slug, 0.5, &i18n);
        }
    }

    #[test]
    fn demo_view_renders() {
        let i18n = I18n::default();
        let meta = catalog::find("shine-button").expect("registry entry");
        let ctx = ViewContext {
            i18n: &i18n,
            meta,
            source: "fn main() {}\n".to_string(),
            elapsed: 1.0,
            copied: false,
            favorited: false,
            dark: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn demo_view_renders_copied_and_favorited() {
        let i18n = I18n::default();
        let meta = catalog::find("pulse-ring").expect("registry entry");
        let ctx = ViewContext {
            i18n: &i18n,
            meta,
            source: "let rings = 3;\n".to_string(),
            elapsed: 0.0,
            copied: true,
            favorited: true,
            dark: false,
        };
        let _element = view(ctx);
    }
}
