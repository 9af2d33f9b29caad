// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.
//!
//! Previews animate only while a demo screen is visible; the rest of the
//! catalog is static and needs no ticks. A slower timer keeps running
//! while toasts are on screen so their auto-dismiss fires.

use super::{Message, Screen};
use iced::{time, Subscription};
use std::time::Duration;

/// Tick interval while toasts are the only thing needing time.
const TOAST_TICK: Duration = Duration::from_millis(250);

/// Creates the tick subscription appropriate for the current state.
///
/// - Demo screen, motion enabled: animation-rate ticks.
/// - Toasts visible (any screen): slow housekeeping ticks.
/// - Otherwise: no subscription at all.
pub fn create_tick_subscription(
    screen: Screen,
    has_notifications: bool,
    animation_fps: u32,
    reduce_motion: bool,
) -> Subscription<Message> {
    let animating = matches!(screen, Screen::Demo(_)) && !reduce_motion;

    if animating {
        let fps = crate::config::clamp_animation_fps(animation_fps);
        time::every(Duration::from_millis(u64::from(1000 / fps))).map(Message::Tick)
    } else if has_notifications {
        time::every(TOAST_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
