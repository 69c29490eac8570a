//! Copying a draw as text.
use tracing::{debug, warn};

use crate::error::Result;
use crate::facade::collaborator_error;

/// Platform clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Formats a draw as `"n1, n2, ..., n6"`.
pub fn format_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Writes the formatted draw to `clipboard` and returns the copied text.
pub fn copy_numbers(clipboard: &mut dyn Clipboard, numbers: &[u32]) -> Result<String> {
    let text = format_numbers(numbers);
    if let Err(e) = clipboard.write_text(&text) {
        warn!("Copy to clipboard failed: {e}.");
        return Err(collaborator_error("clipboard", e));
    }
    debug!("Copied '{text}'.");
    Ok(text)
}
