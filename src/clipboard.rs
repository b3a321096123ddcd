//! System clipboard integration

use thiserror::Error;

/// Error type for clipboard failures (no clipboard available, or the
/// platform refused the write)
#[derive(Debug, Error)]
#[error("clipboard error: {0}")]
pub struct ClipboardError(#[from] arboard::Error);

/// Place text on the system clipboard.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
