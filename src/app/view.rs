// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! inside the page shell, with the toast overlay stacked on top.

use super::{App, Message, Screen};
use crate::catalog::{self, snippets};
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::demo::{self, ViewContext as DemoViewContext};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::notifications::Toast;
use crate::ui::shell;
use crate::ui::sidebar::{self, ActiveEntry, ViewContext as SidebarViewContext};
use iced::widget::Stack;
use iced::Element;

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let sidebar_element = sidebar::view(SidebarViewContext {
        i18n: &app.i18n,
        layout: app.layout,
        active: active_entry(app.screen),
    })
    .map(Message::Sidebar);

    let header_element = header::view(HeaderViewContext {
        i18n: &app.i18n,
        search_query: &app.search_query,
        theme_mode: app.theme_mode,
    })
    .map(Message::Header);

    let content = match app.screen {
        Screen::Home => view_home(app),
        Screen::Category(category) => view_category(app, category),
        Screen::Demo(slug) => view_demo(app, slug),
        Screen::About => view_about(app),
    };

    let shell = shell::compose(app.layout, sidebar_element, header_element, content);
    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::new().push(shell).push(toasts).into()
}

/// Sidebar entry to highlight for a screen. Demo screens highlight their
/// component's category.
fn active_entry(screen: Screen) -> ActiveEntry {
    match screen {
        Screen::Home => ActiveEntry::Home,
        Screen::Category(category) => ActiveEntry::Category(category),
        Screen::Demo(slug) => catalog::find(slug)
            .map(|meta| ActiveEntry::Category(meta.category))
            .unwrap_or(ActiveEntry::Home),
        Screen::About => ActiveEntry::About,
    }
}

fn view_home(app: &App) -> Element<'_, Message> {
    gallery::view(GalleryViewContext {
        i18n: &app.i18n,
        title: app.i18n.tr("gallery-all-title"),
        components: catalog::search(&app.search_query),
        favorites: app.app_state.favorite_set(),
    })
    .map(Message::Gallery)
}

fn view_category(app: &App, category: crate::catalog::Category) -> Element<'_, Message> {
    gallery::view(GalleryViewContext {
        i18n: &app.i18n,
        title: app.i18n.tr(category.i18n_key()),
        components: catalog::by_category(category).collect(),
        favorites: app.app_state.favorite_set(),
    })
    .map(Message::Gallery)
}

fn view_demo<'a>(app: &'a App, slug: &'static str) -> Element<'a, Message> {
    let Some(meta) = catalog::find(slug) else {
        // Unknown slug at render time is an authoring error; degrade to Home
        return view_home(app);
    };

    demo::view(DemoViewContext {
        i18n: &app.i18n,
        meta,
        source: snippets::source_for(slug).unwrap_or_default(),
        elapsed: app.clock.elapsed_secs(),
        copied: app.copied.is_visible(std::time::Instant::now()),
        favorited: app.app_state.is_favorite(slug),
        dark: app.theme_mode.is_dark(),
    })
    .map(Message::Demo)
}

fn view_about(app: &App) -> Element<'_, Message> {
    about::view(AboutViewContext {
        i18n: &app.i18n,
        event_count: app.analytics.len(),
    })
    .map(Message::About)
}
