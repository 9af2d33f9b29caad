// SPDX-License-Identifier: MPL-2.0
//! Pill badges for component metadata flags.
//!
//! "new" and "premium" are purely visual markers; nothing in the catalog
//! is gated behind them.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::theme;
use iced::widget::{container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Badge for components flagged `is_new`.
pub fn new_badge<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    pill(i18n.tr("badge-new"), theme::new_badge_color())
}

/// Badge for components flagged `is_premium`.
pub fn premium_badge<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    pill(i18n.tr("badge-premium"), theme::premium_badge_color())
}

fn pill<'a, Message: 'a>(label: String, color: Color) -> Element<'a, Message> {
    container(
        Text::new(label)
            .size(typography::CAPTION)
            .color(palette::GRAY_900),
    )
    .padding([1.0, spacing::XS])
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_render() {
        let i18n = I18n::default();
        let _new: Element<'_, ()> = new_badge(&i18n);
        let _premium: Element<'_, ()> = premium_badge(&i18n);
    }
}
