// SPDX-License-Identifier: MPL-2.0
//! Animation clock and pure phase math for the gallery widgets.
//!
//! The clock is advanced by `Tick(Instant)` messages from the timer
//! subscription and only while a demo screen is visible. Widgets never
//! read wall-clock time themselves; they receive the elapsed seconds and
//! derive their phases through the helpers below, which keeps every
//! animation a pure function of time.

use std::time::{Duration, Instant};

/// Monotonic clock driving demo previews.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    started: Instant,
    now: Instant,
}

impl AnimationClock {
    /// Creates a clock with zero elapsed time.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self { started: now, now }
    }

    /// Advances the clock to `now`. Ticks that arrive out of order are
    /// ignored so elapsed time never goes backwards.
    pub fn tick(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Restarts the clock, e.g. when a new demo screen opens.
    pub fn restart(&mut self) {
        let now = Instant::now();
        self.started = now;
        self.now = now;
    }

    /// Elapsed time since the clock started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.started)
    }

    /// Elapsed time in seconds, as used by the widget phase helpers.
    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Cyclic phase in `[0, 1)` for a repeating animation of `period_secs`.
///
/// A non-positive period pins the phase to zero (the rest position), which
/// is how `reduce_motion` freezes previews without special-casing widgets.
#[must_use]
pub fn cycle_phase(elapsed_secs: f32, period_secs: f32) -> f32 {
    if period_secs <= 0.0 {
        return 0.0;
    }
    let phase = (elapsed_secs / period_secs).fract();
    if phase < 0.0 {
        phase + 1.0
    } else {
        phase
    }
}

/// Maps a cyclic phase onto a `[0, 1]` triangle wave (forth, then back).
#[must_use]
pub fn ping_pong(phase: f32) -> f32 {
    let phase = phase.clamp(0.0, 1.0);
    if phase < 0.5 {
        phase * 2.0
    } else {
        2.0 - phase * 2.0
    }
}

/// Smoothstep ease-in-out over `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Piecewise bounce easing over `[0, 1]` (settles at 1.0).
#[must_use]
pub fn ease_out_bounce(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984_375
    }
}
