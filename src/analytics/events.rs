// SPDX-License-Identifier: MPL-2.0
//! Analytics event types for gallery usage tracking.
//!
//! Every event is a named action with a flat mapping of string-keyed
//! fields; consumers never inspect return values or block on emission.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, ComponentMeta};

/// The named analytics events and their payloads.
///
/// Serialized with an `event` tag so a report is a flat JSON object per
/// event (`{"event":"component_copy","slug":"shine-button",...}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// A demo screen was opened and its live preview shown.
    ComponentPreview { slug: String, category: String },

    /// A component's source snippet was copied to the clipboard.
    ComponentCopy { slug: String, category: String },

    /// A component was favorited or unfavorited.
    FavoriteToggle { slug: String, favorited: bool },

    /// A search was submitted from the header.
    Search { query: String, result_count: usize },

    /// A category index grid was opened.
    CategoryView { category: String },
}

impl EventKind {
    /// The event's wire name, matching the serde tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::ComponentPreview { .. } => "component_preview",
            EventKind::ComponentCopy { .. } => "component_copy",
            EventKind::FavoriteToggle { .. } => "favorite_toggle",
            EventKind::Search { .. } => "search",
            EventKind::CategoryView { .. } => "category_view",
        }
    }

    /// Builds a `component_preview` event from catalog metadata.
    #[must_use]
    pub fn preview(meta: &ComponentMeta) -> Self {
        EventKind::ComponentPreview {
            slug: meta.slug.to_string(),
            category: meta.category.slug().to_string(),
        }
    }

    /// Builds a `component_copy` event from catalog metadata.
    #[must_use]
    pub fn copy(meta: &ComponentMeta) -> Self {
        EventKind::ComponentCopy {
            slug: meta.slug.to_string(),
            category: meta.category.slug().to_string(),
        }
    }

    /// Builds a `favorite_toggle` event.
    #[must_use]
    pub fn favorite(slug: &str, favorited: bool) -> Self {
        EventKind::FavoriteToggle {
            slug: slug.to_string(),
            favorited,
        }
    }

    /// Builds a `search` event with the number of grid results.
    #[must_use]
    pub fn search(query: &str, result_count: usize) -> Self {
        EventKind::Search {
            query: query.to_string(),
            result_count,
        }
    }

    /// Builds a `category_view` event.
    #[must_use]
    pub fn category_view(category: Category) -> Self {
        EventKind::CategoryView {
            category: category.slug().to_string(),
        }
    }
}

/// An analytics event with its monotonic capture timestamp.
#[derive(Debug, Clone)]
pub struct AnalyticsEvent {
    /// When the event occurred (monotonic clock for duration calculations).
    pub timestamp: Instant,
    /// The named event and its fields.
    pub kind: EventKind,
}

impl AnalyticsEvent {
    /// Creates a new analytics event with the current timestamp.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new analytics event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: EventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}
