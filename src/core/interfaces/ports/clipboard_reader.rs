use anyhow::Result;

use crate::core::models::ClipboardPayload;

/// Reads the OS clipboard and classifies whatever it holds. An image item
/// takes precedence over text; an empty clipboard yields
/// `ClipboardPayload::Empty` rather than an error.
pub trait ClipboardReader: Send + Sync {
    fn read_clipboard_payload(&self) -> Result<ClipboardPayload>;
}
