// SPDX-License-Identifier: MPL-2.0
//! Transient "copied" confirmation state for the copy affordance.
//!
//! The flag is set only after a clipboard write succeeds and clears
//! itself on the next tick after the timeout. A failed write never sets
//! it, which is the entire user-visible error surface of copying.

use std::time::{Duration, Instant};

use crate::config::COPIED_CONFIRMATION_SECS;

/// How long the confirmation stays visible.
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(COPIED_CONFIRMATION_SECS);

/// Tracks whether the "copied" confirmation is currently shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopiedIndicator {
    copied_at: Option<Instant>,
}

impl CopiedIndicator {
    /// Creates an indicator with no confirmation shown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a successful copy at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// Clears the confirmation if the timeout elapsed. Returns `true` if
    /// the visible state changed.
    pub fn clear_if_expired(&mut self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) >= CONFIRMATION_TIMEOUT => {
                self.copied_at = None;
                true
            }
            _ => false,
        }
    }

    /// Unconditionally hides the confirmation (screen change).
    pub fn reset(&mut self) {
        self.copied_at = None;
    }

    /// Whether the confirmation is visible at `now`.
    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < CONFIRMATION_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let indicator = CopiedIndicator::new();
        assert!(!indicator.is_visible(Instant::now()));
    }

    #[test]
    fn mark_shows_confirmation() {
        let mut indicator = CopiedIndicator::new();
        let now = Instant::now();
        indicator.mark(now);
        assert!(indicator.is_visible(now));
    }

    #[test]
    fn confirmation_stays_visible_before_timeout() {
        let mut indicator = CopiedIndicator::new();
        let now = Instant::now();
        indicator.mark(now);

        let just_before = now + CONFIRMATION_TIMEOUT - Duration::from_millis(1);
        assert!(indicator.is_visible(just_before));
        assert!(!indicator.clear_if_expired(just_before));
    }

    #[test]
    fn confirmation_clears_after_timeout() {
        let mut indicator = CopiedIndicator::new();
        let now = Instant::now();
        indicator.mark(now);

        let after = now + CONFIRMATION_TIMEOUT;
        assert!(!indicator.is_visible(after));
        assert!(indicator.clear_if_expired(after));
        assert!(!indicator.clear_if_expired(after)); // already cleared
    }

    #[test]
    fn reset_hides_immediately() {
        let mut indicator = CopiedIndicator::new();
        let now = Instant::now();
        indicator.mark(now);
        indicator.reset();
        assert!(!indicator.is_visible(now));
    }
}
