// SPDX-License-Identifier: MPL-2.0
//! `glint` is a browsable gallery of animated UI components built with the
//! Iced GUI framework.
//!
//! It renders a catalog of canvas-animated widgets (buttons, text effects,
//! cards, loaders) with per-component demo screens, copyable source
//! snippets, and demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/glint/0.1.0")]

pub mod analytics;
pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
