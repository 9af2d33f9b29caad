// SPDX-License-Identifier: MPL-2.0
//! Usage analytics for the gallery.
//!
//! Screens report named events (`component_preview`, `component_copy`,
//! `favorite_toggle`, `search`, `category_view`) at their trigger points.
//! Recording is fire-and-forget: events land in a memory-bounded circular
//! buffer owned by the application and are never transmitted anywhere.
//! The About screen can export the buffered events as a JSON report to the
//! clipboard for inspection.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with fixed capacity
//! - [`EventKind`]: The named events and their flat string-keyed fields
//! - [`Collector`]: Owns the buffer and builds export reports

mod buffer;
mod collector;
mod events;
mod export;

pub use buffer::CircularBuffer;
pub use collector::Collector;
pub use events::{AnalyticsEvent, EventKind};
pub use export::{
    build_report, AnalyticsReport, ExportError, SerializableEvent, MAX_CLIPBOARD_SIZE_BYTES,
};
