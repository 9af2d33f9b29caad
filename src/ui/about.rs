// SPDX-License-Identifier: MPL-2.0
//! About screen with version info and the usage report export.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::Horizontal;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the About screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Number of analytics events buffered this session.
    pub event_count: usize,
}

/// Messages emitted by the About screen.
#[derive(Debug, Clone)]
pub enum Message {
    ExportAnalytics,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ExportAnalytics,
}

/// Process an About message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ExportAnalytics => Event::ExportAnalytics,
    }
}

/// Render the About screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);
    let description = Text::new(ctx.i18n.tr("about-description")).size(typography::BODY_LG);

    let version = Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("about-version-label"))
                .size(typography::BODY)
                .color(theme::muted_text_color()),
        )
        .push(Text::new(env!("CARGO_PKG_VERSION")).size(typography::BODY));

    let export_button = button(Text::new(ctx.i18n.tr("about-export-analytics")))
        .on_press(Message::ExportAnalytics)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let event_count = Text::new(format!(
        "{}: {}",
        ctx.i18n.tr("about-events-buffered"),
        ctx.event_count
    ))
    .size(typography::CAPTION)
    .color(theme::muted_text_color());

    let card = container(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(description)
            .push(version)
            .push(export_button)
            .push(event_count),
    )
    .padding(spacing::XL)
    .max_width(520.0)
    .style(styles::container::panel);

    container(card)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            event_count: 0,
        };
        let _element = view(ctx);
    }

    #[test]
    fn export_message_maps_to_event() {
        assert!(matches!(
            update(Message::ExportAnalytics),
            Event::ExportAnalytics
        ));
    }
}
