// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Home and category index grids
//! - [`demo`] - Per-component demo screen (live preview + source)
//! - [`about`] - Application version, credits, and usage report export
//!
//! # Shell
//!
//! - [`shell`] - Sidebar + header + content composition
//! - [`sidebar`] - Category navigation with collapse toggle
//! - [`header`] - Search field, theme cycle, sidebar toggle
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (layout, animation clock, copy feedback)
//! - [`components`] - Reusable UI components (badges, code panel)
//! - [`widgets`] - The animated components shown in the gallery
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing, motion)
//! - [`theme`] - Theme colors and styling helpers
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering (visual primitives)
//! - [`notifications`] - Toast notification system for user feedback

pub mod about;
pub mod components;
pub mod demo;
pub mod design_tokens;
pub mod gallery;
pub mod header;
pub mod icons;
pub mod notifications;
pub mod shell;
pub mod sidebar;
pub mod state;
pub mod styles;
pub mod theme;
pub mod theming;
pub mod widgets;
