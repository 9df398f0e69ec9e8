//! System clipboard access.

use arboard::Clipboard;

use crate::errors::{Result, TotpVaultError};

/// Read text from the clipboard.
pub fn read_text() -> Result<String> {
    let mut clipboard = Clipboard::new().map_err(|e| TotpVaultError::Clipboard(e.to_string()))?;
    clipboard
        .get_text()
        .map_err(|e| TotpVaultError::Clipboard(e.to_string()))
}

/// Replace the clipboard contents with `text`.
pub fn write_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(|e| TotpVaultError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| TotpVaultError::Clipboard(e.to_string()))
}
