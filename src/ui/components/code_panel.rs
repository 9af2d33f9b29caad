// SPDX-License-Identifier: MPL-2.0
//! Read-only source panel with a copy-to-clipboard affordance.
//!
//! The panel renders an embedded snippet verbatim in a monospace face.
//! The copy button reports intent upward; the application performs the
//! clipboard write and decides whether the confirmation shows.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::Vertical;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Element, Font, Length};

/// Contextual data needed to render the code panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The snippet text shown and copied.
    pub source: String,
    /// Whether the transient "copied" confirmation is visible.
    pub copied: bool,
}

/// Messages emitted by the code panel.
#[derive(Debug, Clone)]
pub enum Message {
    CopyPressed,
}

/// Render the code panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("demo-code-title")).size(typography::TITLE_SM);

    let copy_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::copy(), 16.0))
            .push(Text::new(ctx.i18n.tr("demo-copy-button"))),
    )
    .on_press(Message::CopyPressed)
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::primary);

    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(iced::widget::space::horizontal())
        .push(copy_button);

    if ctx.copied {
        header = header.push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(icons::tinted(
                    icons::sized(icons::check(), 16.0),
                    theme::success_text_color(),
                ))
                .push(
                    Text::new(ctx.i18n.tr("demo-copied"))
                        .size(typography::BODY_SM)
                        .color(theme::success_text_color()),
                ),
        );
    }

    let code = container(
        scrollable(
            Text::new(ctx.source)
                .font(Font::MONOSPACE)
                .size(typography::BODY_SM),
        )
        .width(Length::Fill),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::code);

    Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(code)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_panel_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            source: "fn main() {}\n".to_string(),
            copied: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn code_panel_renders_with_confirmation() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            source: "fn main() {}\n".to_string(),
            copied: true,
        };
        let _element = view(ctx);
    }
}
