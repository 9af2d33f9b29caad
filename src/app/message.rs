// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::about;
use crate::ui::demo;
use crate::ui::gallery;
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::sidebar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    Header(header::Message),
    Gallery(gallery::Message),
    Demo(demo::Message),
    About(about::Message),
    Notification(notifications::Message),
    /// Periodic tick driving preview animation and timeout housekeeping.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional theme override (`light`, `dark`, or `system`).
    pub theme: Option<String>,
    /// Optional data directory override (for the state file).
    /// Takes precedence over `GLINT_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GLINT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
