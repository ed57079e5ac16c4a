//! Clipboard functionality for copying calculator results.

use crate::error::CalcError;
use arboard::Clipboard;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), CalcError> {
    let mut clipboard = Clipboard::new().map_err(CalcError::Clipboard)?;

    clipboard
        .set_text(text.to_string())
        .map_err(CalcError::Clipboard)
}
