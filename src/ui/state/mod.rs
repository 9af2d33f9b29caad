// SPDX-License-Identifier: MPL-2.0
//! Reusable UI state management.
//!
//! Small, self-contained state cells shared by the shell and demo screens.
//! Each cell has exactly one owner (the `App`) and is mutated only from
//! the synchronous update loop.

pub mod animation;
pub mod copied;
pub mod layout;

pub use animation::AnimationClock;
pub use copied::CopiedIndicator;
pub use layout::LayoutState;
