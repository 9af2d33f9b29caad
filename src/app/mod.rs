// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog screens.
//!
//! The `App` struct wires together the catalog, layout, theming, and
//! analytics, and translates messages into side effects like config
//! persistence or clipboard writes. This file intentionally keeps policy
//! decisions (window sizing, persistence format, startup resolution)
//! close to the main update loop so it is easy to audit user-facing
//! behavior.

mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::analytics::Collector;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::state::{AnimationClock, CopiedIndicator, LayoutState};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the catalog screens,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Sidebar collapsed flag; session-scoped, never persisted.
    layout: LayoutState,
    theme_mode: ThemeMode,
    /// Freezes preview animation at its rest position.
    reduce_motion: bool,
    /// Preview tick rate in frames per second.
    animation_fps: u32,
    /// Live search text owned by the header field.
    search_query: String,
    /// Clock driving demo previews.
    clock: AnimationClock,
    /// Transient "copied" confirmation for the demo code panel.
    copied: CopiedIndicator,
    /// Persisted favorites.
    app_state: persisted_state::AppState,
    /// Fire-and-forget usage analytics.
    analytics: Collector,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("collapsed", &self.layout.is_collapsed())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            layout: LayoutState::new(),
            theme_mode: ThemeMode::default(),
            reduce_motion: false,
            animation_fps: config::DEFAULT_ANIMATION_FPS,
            search_query: String::new(),
            clock: AnimationClock::new(),
            copied: CopiedIndicator::new(),
            app_state: persisted_state::AppState::default(),
            analytics: Collector::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Builds the initial application state from CLI flags and persisted
    /// preferences.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let config = config::load().unwrap_or_else(|error| {
            log::warn!("Failed to load config: {error}");
            config::Config::default()
        });

        let i18n = I18n::new(flags.lang, &config);

        let theme_mode = flags
            .theme
            .as_deref()
            .and_then(parse_theme_flag)
            .unwrap_or(config.theme_mode);

        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut notifications = notifications::Manager::new();
        if let Some(warning_key) = state_warning {
            notifications.push(notifications::Notification::warning(warning_key));
        }

        let app = Self {
            i18n,
            theme_mode,
            reduce_motion: config.reduce_motion.unwrap_or(false),
            animation_fps: config::clamp_animation_fps(
                config.animation_fps.unwrap_or(config::DEFAULT_ANIMATION_FPS),
            ),
            app_state,
            notifications,
            ..Self::default()
        };

        log::info!(
            "Starting with {} components across {} categories",
            crate::catalog::all().len(),
            crate::catalog::Category::ALL.len()
        );

        (app, Task::none())
    }

    /// Window title, localized.
    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    /// Built-in Iced theme matching the effective mode.
    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.screen,
            self.notifications.has_notifications(),
            self.animation_fps,
            self.reduce_motion,
        )
    }
}

/// Parses the `--theme` flag value.
fn parse_theme_flag(value: &str) -> Option<ThemeMode> {
    match value {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        "system" => Some(ThemeMode::System),
        _ => None,
    }
}
