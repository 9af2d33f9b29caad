// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and all specialized
//! message handlers for different parts of the application. Every state
//! mutation in the app funnels through here, triggered by one UI event
//! at a time.

use super::{persistence, App, Message, Screen};
use crate::analytics::EventKind;
use crate::catalog::{self, snippets};
use crate::clipboard;
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::demo;
use crate::ui::gallery;
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::notifications::Notification;
use crate::ui::sidebar::{self, Event as SidebarEvent};
use iced::Task;
use std::time::Instant;

/// Top-level message dispatch.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Sidebar(message) => handle_sidebar(app, message),
        Message::Header(message) => handle_header(app, message),
        Message::Gallery(message) => handle_gallery(app, message),
        Message::Demo(message) => handle_demo(app, message),
        Message::About(message) => handle_about(app, message),
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(now) => handle_tick(app, now),
    }
}

fn handle_sidebar(app: &mut App, message: sidebar::Message) -> Task<Message> {
    match sidebar::update(message) {
        SidebarEvent::GoHome => navigate(app, Screen::Home),
        SidebarEvent::GoCategory(category) => {
            app.analytics.record(EventKind::category_view(category));
            navigate(app, Screen::Category(category));
        }
        SidebarEvent::GoAbout => navigate(app, Screen::About),
        SidebarEvent::ToggleCollapse => app.layout.toggle(),
    }
    Task::none()
}

fn handle_header(app: &mut App, message: header::Message) -> Task<Message> {
    match header::update(message) {
        HeaderEvent::ToggleSidebar => app.layout.toggle(),
        HeaderEvent::SearchChanged(query) => {
            app.search_query = query;
            // Searching always lands on the full grid
            if !app.search_query.is_empty() && app.screen != Screen::Home {
                navigate(app, Screen::Home);
            }
        }
        HeaderEvent::SearchSubmitted => {
            let result_count = catalog::search(&app.search_query).len();
            app.analytics
                .record(EventKind::search(&app.search_query, result_count));
        }
        HeaderEvent::CycleTheme => {
            app.theme_mode = app.theme_mode.next();
            persistence::persist_preferences(
                app.theme_mode,
                Some(app.i18n.current_locale().to_string()),
                app.reduce_motion,
                app.animation_fps,
            );
        }
    }
    Task::none()
}

fn handle_gallery(app: &mut App, message: gallery::Message) -> Task<Message> {
    match message {
        gallery::Message::Open(slug) => open_demo(app, slug),
        gallery::Message::ToggleFavorite(slug) => toggle_favorite(app, slug),
    }
    Task::none()
}

fn handle_demo(app: &mut App, message: demo::Message) -> Task<Message> {
    let Screen::Demo(slug) = app.screen else {
        // Stale message from a screen that is no longer current
        return Task::none();
    };

    match message {
        demo::Message::Back => {
            let target = catalog::find(slug)
                .map(|meta| Screen::Category(meta.category))
                .unwrap_or(Screen::Home);
            navigate(app, target);
        }
        demo::Message::CopyPressed => copy_snippet(app, slug),
        demo::Message::ToggleFavorite => toggle_favorite(app, slug),
    }
    Task::none()
}

fn handle_about(app: &mut App, message: about::Message) -> Task<Message> {
    match about::update(message) {
        AboutEvent::ExportAnalytics => match app.analytics.export_to_clipboard() {
            Ok(()) => {
                app.notifications
                    .push(Notification::success("notify-export-success"));
            }
            Err(error) => {
                log::warn!("Analytics export failed: {error}");
                app.notifications
                    .push(Notification::warning("notify-export-failed"));
            }
        },
    }
    Task::none()
}

fn handle_tick(app: &mut App, now: Instant) -> Task<Message> {
    app.clock.tick(now);
    app.copied.clear_if_expired(now);
    app.notifications.tick();
    Task::none()
}

/// Switches screens, resetting per-screen transients.
fn navigate(app: &mut App, screen: Screen) {
    app.copied.reset();
    if matches!(screen, Screen::Demo(_)) && screen != app.screen {
        app.clock.restart();
    }
    app.screen = screen;
}

/// Opens a demo screen and reports the preview.
fn open_demo(app: &mut App, slug: &'static str) {
    let Some(meta) = catalog::find(slug) else {
        // Authoring error: a grid offered a slug the registry doesn't know
        log::warn!("Unknown component slug: {slug}");
        navigate(app, Screen::Home);
        return;
    };

    app.analytics.record(EventKind::preview(meta));
    navigate(app, Screen::Demo(meta.slug));
}

/// Copies a component's snippet; confirmation only on success.
fn copy_snippet(app: &mut App, slug: &'static str) {
    let Some(source) = snippets::source_for(slug) else {
        log::warn!("Missing snippet for {slug}");
        return;
    };

    match clipboard::copy_text(&source) {
        Ok(()) => {
            app.copied.mark(Instant::now());
            app.notifications
                .push(Notification::success("notify-copy-success"));
            if let Some(meta) = catalog::find(slug) {
                app.analytics.record(EventKind::copy(meta));
            }
        }
        Err(error) => {
            // No user-visible error state; the confirmation simply stays off
            log::warn!("Clipboard write failed: {error}");
        }
    }
}

/// Toggles a favorite, persists, and reports the change.
fn toggle_favorite(app: &mut App, slug: &'static str) {
    let favorited = app.app_state.toggle_favorite(slug);
    app.analytics.record(EventKind::favorite(slug, favorited));

    if let Some(warning_key) = persistence::persist_app_state(&app.app_state) {
        app.notifications.push(Notification::warning(warning_key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ui::state::LayoutState;

    fn app() -> App {
        App::default()
    }

    #[test]
    fn sidebar_toggle_collapses_layout() {
        let mut app = app();
        assert_eq!(app.layout, LayoutState::new());

        let _ = update(&mut app, Message::Sidebar(sidebar::Message::ToggleCollapse));
        assert!(app.layout.is_collapsed());

        let _ = update(&mut app, Message::Sidebar(sidebar::Message::ToggleCollapse));
        assert!(!app.layout.is_collapsed());
    }

    #[test]
    fn header_toggle_mutates_the_same_layout_flag() {
        let mut app = app();
        let _ = update(&mut app, Message::Header(header::Message::ToggleSidebar));
        assert!(app.layout.is_collapsed());
    }

    #[test]
    fn category_navigation_records_category_view() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Sidebar(sidebar::Message::GoCategory(Category::Cards)),
        );

        assert_eq!(app.screen, Screen::Category(Category::Cards));
        assert_eq!(app.analytics.len(), 1);
        assert_eq!(
            app.analytics.iter().next().unwrap().kind.name(),
            "category_view"
        );
    }

    #[test]
    fn opening_a_demo_records_component_preview() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Gallery(gallery::Message::Open("shine-button")),
        );

        assert_eq!(app.screen, Screen::Demo("shine-button"));
        assert_eq!(
            app.analytics.iter().next().unwrap().kind.name(),
            "component_preview"
        );
    }

    #[test]
    fn unknown_slug_falls_back_to_home() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Gallery(gallery::Message::Open("no-such-slug")),
        );
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn search_submit_records_result_count() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Header(header::Message::SearchChanged("ripple".to_string())),
        );
        let _ = update(&mut app, Message::Header(header::Message::SearchSubmitted));

        let event = app.analytics.iter().next().unwrap();
        match &event.kind {
            EventKind::Search {
                query,
                result_count,
            } => {
                assert_eq!(query, "ripple");
                assert_eq!(*result_count, 1);
            }
            other => panic!("expected search event, got {other:?}"),
        }
    }

    #[test]
    fn searching_from_a_category_returns_home() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Sidebar(sidebar::Message::GoCategory(Category::Text)),
        );
        let _ = update(
            &mut app,
            Message::Header(header::Message::SearchChanged("glow".to_string())),
        );
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.search_query, "glow");
    }

    #[test]
    fn cycle_theme_advances_the_mode() {
        let mut app = app();
        let before = app.theme_mode;
        let _ = update(&mut app, Message::Header(header::Message::CycleTheme));
        assert_eq!(app.theme_mode, before.next());
    }

    #[test]
    fn favorite_toggle_records_event_and_mutates_state() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Gallery(gallery::Message::ToggleFavorite("glow-border")),
        );

        assert!(app.app_state.is_favorite("glow-border"));
        let event = app.analytics.iter().next().unwrap();
        match &event.kind {
            EventKind::FavoriteToggle { slug, favorited } => {
                assert_eq!(slug, "glow-border");
                assert!(favorited);
            }
            other => panic!("expected favorite event, got {other:?}"),
        }
    }

    #[test]
    fn demo_back_returns_to_the_component_category() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Gallery(gallery::Message::Open("orbit-loader")),
        );
        let _ = update(&mut app, Message::Demo(demo::Message::Back));
        assert_eq!(app.screen, Screen::Category(Category::Loaders));
    }

    #[test]
    fn demo_messages_are_ignored_off_demo_screens() {
        let mut app = app();
        let _ = update(&mut app, Message::Demo(demo::Message::CopyPressed));
        assert_eq!(app.screen, Screen::Home);
        assert!(app.analytics.is_empty());
    }

    #[test]
    fn tick_advances_the_animation_clock() {
        let mut app = app();
        let _ = update(
            &mut app,
            Message::Gallery(gallery::Message::Open("pulse-ring")),
        );
        let _ = update(
            &mut app,
            Message::Tick(Instant::now() + std::time::Duration::from_millis(300)),
        );
        assert!(app.clock.elapsed_secs() > 0.0);
    }

    #[test]
    fn navigation_resets_the_copied_confirmation() {
        let mut app = app();
        app.copied.mark(Instant::now());
        let _ = update(&mut app, Message::Sidebar(sidebar::Message::GoHome));
        assert!(!app.copied.is_visible(Instant::now()));
    }
}
