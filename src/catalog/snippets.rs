// SPDX-License-Identifier: MPL-2.0
//! Embedded source snippets shown on demo screens.
//!
//! Each registry slug has a matching `assets/snippets/<slug>.rs` file
//! embedded at compile time. The demo screen renders it read-only and the
//! copy affordance puts it on the clipboard verbatim.

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/snippets/"]
struct Asset;

/// Returns the embedded source snippet for a component slug.
///
/// A missing snippet is an authoring error caught by tests, not a runtime
/// condition; callers render an empty code panel if this returns `None`.
#[must_use]
pub fn source_for(slug: &str) -> Option<String> {
    let filename = format!("{slug}.rs");
    Asset::get(&filename).map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
}
