// SPDX-License-Identifier: MPL-2.0
//! Analytics collector for aggregating and storing usage events.
//!
//! The collector is owned by the application and fed synchronously from
//! the update loop: every state mutation originates from a serialized UI
//! event, so there are no concurrent writers and no channel is needed.
//! Recording never fails and never blocks.

use std::time::Instant;

use super::buffer::CircularBuffer;
use super::events::{AnalyticsEvent, EventKind};
use super::export::{self, AnalyticsReport, ExportError, MAX_CLIPBOARD_SIZE_BYTES};
use crate::config::DEFAULT_EVENT_BUFFER_CAPACITY;

/// Collects analytics events into a bounded in-memory buffer.
#[derive(Debug, Clone)]
pub struct Collector {
    events: CircularBuffer<AnalyticsEvent>,
    session_start: Instant,
}

impl Default for Collector {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_BUFFER_CAPACITY)
    }
}

impl Collector {
    /// Creates a collector with an explicit buffer capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: CircularBuffer::with_capacity(capacity),
            session_start: Instant::now(),
        }
    }

    /// Records an event. Fire-and-forget: the oldest event is evicted if
    /// the buffer is full, and callers never observe an outcome.
    pub fn record(&mut self, kind: EventKind) {
        log::debug!("analytics event: {}", kind.name());
        self.events.push(AnalyticsEvent::new(kind));
    }

    /// When this collector's session started (monotonic).
    #[must_use]
    pub fn session_start(&self) -> Instant {
        self.session_start
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no events have been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates buffered events in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &AnalyticsEvent> {
        self.events.iter()
    }

    /// Builds the exportable report for the current session.
    #[must_use]
    pub fn report(&self) -> AnalyticsReport {
        export::build_report(self)
    }

    /// Serializes the buffered events as a pretty JSON report.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Serialization` if JSON encoding fails.
    pub fn export_json(&self) -> Result<String, ExportError> {
        let report = self.report();
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Exports the JSON report to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::ContentTooLarge` if the report exceeds the
    /// clipboard size limit, and `ExportError::Clipboard` if clipboard
    /// access fails.
    pub fn export_to_clipboard(&self) -> Result<(), ExportError> {
        let json = self.export_json()?;

        // Check content size before attempting the clipboard operation
        if json.len() > MAX_CLIPBOARD_SIZE_BYTES {
            return Err(ExportError::ContentTooLarge {
                size: json.len(),
                max_size: MAX_CLIPBOARD_SIZE_BYTES,
            });
        }

        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(json)
            .map_err(|e| ExportError::Clipboard(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn record_appends_in_order() {
        let mut collector = Collector::with_capacity(8);
        collector.record(EventKind::category_view(Category::Buttons));
        collector.record(EventKind::search("wave", 1));

        let names: Vec<_> = collector.iter().map(|e| e.kind.name()).collect();
        assert_eq!(names, vec!["category_view", "search"]);
    }

    #[test]
    fn buffer_capacity_bounds_recorded_events() {
        let mut collector = Collector::with_capacity(2);
        collector.record(EventKind::search("a", 0));
        collector.record(EventKind::search("b", 0));
        collector.record(EventKind::search("c", 0));

        assert_eq!(collector.len(), 2);
        let queries: Vec<_> = collector
            .iter()
            .map(|e| match &e.kind {
                EventKind::Search { query, .. } => query.clone(),
                _ => panic!("expected search event"),
            })
            .collect();
        assert_eq!(queries, vec!["b", "c"]);
    }

    #[test]
    fn fresh_collector_is_empty() {
        let collector = Collector::default();
        assert!(collector.is_empty());
        assert_eq!(collector.len(), 0);
    }

    #[test]
    fn export_json_contains_event_payloads() {
        let mut collector = Collector::with_capacity(8);
        collector.record(EventKind::favorite("pulse-ring", true));

        let json = collector.export_json().expect("export should succeed");
        assert!(json.contains("\"event\": \"favorite_toggle\""));
        assert!(json.contains("\"slug\": \"pulse-ring\""));
        assert!(json.contains("\"favorited\": true"));
    }
}
