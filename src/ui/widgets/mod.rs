// SPDX-License-Identifier: MPL-2.0
//! The animated components shown in the gallery.
//!
//! Every widget is a canvas program driven by elapsed seconds from the
//! application's [`AnimationClock`](crate::ui::state::AnimationClock):
//! widgets never read the clock themselves, so a preview is a pure
//! function of its config and the time it is handed. Each widget exposes
//! an explicit `Config` struct with named fields and documented defaults.

pub mod bounce_cards;
pub mod decrypt_text;
pub mod glitch_text;
pub mod glow_border;
pub mod gradient_text;
pub mod orbit_loader;
pub mod pulse_ring;
pub mod ripple_button;
pub mod shine_button;
pub mod spotlight_card;
pub mod wave_loader;
