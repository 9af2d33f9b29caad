// SPDX-License-Identifier: MPL-2.0
//! Export functionality for analytics reports.
//!
//! Buffered events carry monotonic timestamps; the report translates them
//! into millisecond offsets from session start and stamps the report
//! itself with wall-clock time.

use chrono::Utc;
use serde::Serialize;

use super::collector::Collector;
use super::events::EventKind;

/// Maximum clipboard content size in bytes (10 MB).
///
/// Clipboard operations with very large content can cause performance issues
/// or fail on some platforms. This limit provides a reasonable safety margin.
pub const MAX_CLIPBOARD_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Errors that can occur during analytics report export.
#[derive(Debug)]
pub enum ExportError {
    /// JSON serialization error.
    Serialization(serde_json::Error),
    /// Clipboard access error.
    Clipboard(String),
    /// Content exceeds maximum size for clipboard export.
    ContentTooLarge {
        /// Actual size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max_size: usize,
    },
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
            Self::Clipboard(msg) => write!(f, "clipboard error: {msg}"),
            #[allow(clippy::cast_precision_loss)] // Precision loss acceptable for display
            Self::ContentTooLarge { size, max_size } => {
                let size_mb = *size as f64 / (1024.0 * 1024.0);
                let max_mb = *max_size as f64 / (1024.0 * 1024.0);
                write!(
                    f,
                    "content too large for clipboard: {size_mb:.1} MB exceeds {max_mb:.1} MB limit"
                )
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            Self::Clipboard(_) | Self::ContentTooLarge { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// An event as it appears in an exported report.
///
/// The flattened kind keeps each event a flat JSON object next to its
/// session-relative offset.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    /// Milliseconds since session start.
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

/// A complete exportable analytics report.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    /// Wall-clock time the report was generated (RFC 3339, UTC).
    pub generated_at: String,
    /// Session duration in milliseconds at generation time.
    pub session_duration_ms: u64,
    /// Number of events in the report.
    pub event_count: usize,
    /// The buffered events, oldest first.
    pub events: Vec<SerializableEvent>,
}

/// Builds a report from the collector's buffered events.
#[must_use]
pub fn build_report(collector: &Collector) -> AnalyticsReport {
    let session_start = collector.session_start();
    let events: Vec<SerializableEvent> = collector
        .iter()
        .map(|event| SerializableEvent {
            offset_ms: event
                .timestamp
                .saturating_duration_since(session_start)
                .as_millis() as u64,
            kind: event.kind.clone(),
        })
        .collect();

    AnalyticsReport {
        generated_at: Utc::now().to_rfc3339(),
        session_duration_ms: session_start.elapsed().as_millis() as u64,
        event_count: events.len(),
        events,
    }
}
