// SPDX-License-Identifier: MPL-2.0
//! Clipboard access for the copy affordance.
//!
//! The copy outcome is "attempted": on success the caller shows its
//! confirmation, on failure it simply doesn't. No retries.

use crate::error::{Error, Result};

/// Writes `text` to the system clipboard.
///
/// # Errors
///
/// Returns `Error::Clipboard` if the clipboard backend is unavailable or
/// rejects the write.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    Ok(())
}
