// SPDX-License-Identifier: MPL-2.0
//! Header bar for app-level controls.
//!
//! The header hosts the sidebar toggle, the app title, the component
//! search field, and the theme cycle button. It owns no state: the search
//! text and theme mode live on the application and arrive through the
//! view context.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::Vertical;
use iced::widget::svg::Svg;
use iced::widget::space::horizontal as horizontal_space;
use iced::widget::{button, text_input, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Current search text (live, not yet submitted).
    pub search_query: &'a str,
    /// Current theme preference, shown on the cycle button.
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    SearchChanged(String),
    SearchSubmitted,
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ToggleSidebar,
    SearchChanged(String),
    SearchSubmitted,
    CycleTheme,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleSidebar => Event::ToggleSidebar,
        Message::SearchChanged(query) => Event::SearchChanged(query),
        Message::SearchSubmitted => Event::SearchSubmitted,
        Message::CycleTheme => Event::CycleTheme,
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(icons::themed(icons::sized(icons::menu(), sizing::ICON_MD)))
        .on_press(Message::ToggleSidebar)
        .padding(spacing::XS)
        .style(styles::button::quiet);

    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let search = text_input(&ctx.i18n.tr("header-search-placeholder"), ctx.search_query)
        .on_input(Message::SearchChanged)
        .on_submit(Message::SearchSubmitted)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_FIELD_WIDTH));

    let theme_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::themed(icons::sized(
                theme_icon(ctx.theme_mode),
                sizing::ICON_SM,
            )))
            .push(Text::new(ctx.i18n.tr(ctx.theme_mode.i18n_key())).size(typography::BODY_SM)),
    )
    .on_press(Message::CycleTheme)
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::quiet);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::SM])
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(title)
        .push(horizontal_space())
        .push(search)
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::chrome)
        .into()
}

/// Icon for the theme the cycle button would show.
fn theme_icon(mode: ThemeMode) -> Svg<'static> {
    match mode {
        ThemeMode::Light => icons::sun(),
        ThemeMode::Dark => icons::moon(),
        ThemeMode::System => icons::monitor(),
    }
}
