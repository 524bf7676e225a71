//! Clipboard integration.

use crate::error::Result;
use arboard::Clipboard;

/// Put a location on the system clipboard.
pub fn copy_location(location: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(location)?;
    tracing::debug!("Copied {} to clipboard", location);
    Ok(())
}
