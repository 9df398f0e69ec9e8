//! Database file format and raw file I/O.
//!
//! A database file is a single opaque blob:
//!
//! ```text
//! [nonce: 12 bytes][AES-256-GCM ciphertext of payload][tag: 16 bytes]
//! ```
//!
//! The payload is the JSON serialization of `TotpData`:
//!
//! ```text
//! {"entries":[{"issuer":..,"account_name":..,"secret":..,"type":..,
//!              "period":..,"digits":..,"algorithm":..,"url":..}, ...]}
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::collection::TotpData;
use crate::errors::{Result, TotpVaultError};

/// Serialize a collection into the plaintext payload.
pub fn encode_payload(data: &TotpData) -> Result<Vec<u8>> {
    serde_json::to_vec(data).map_err(|e| TotpVaultError::SerializationError(e.to_string()))
}

/// Parse a decrypted payload back into a collection.
///
/// Anything that is not a complete, well-typed collection is rejected
/// as a whole.
pub fn decode_payload(bytes: &[u8]) -> Result<TotpData> {
    serde_json::from_slice(bytes).map_err(|e| TotpVaultError::MalformedData(e.to_string()))
}

/// Read the whole encrypted database file.
pub fn read_blob(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(TotpVaultError::DatabaseNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Write the encrypted blob to disk **atomically**.
///
/// The blob goes to a temp file in the same directory which is then
/// renamed over the target, so readers see either the old or the new
/// database and never a half-written one.
pub fn write_blob(path: &Path, blob: &[u8]) -> Result<()> {
    let tmp_path = temp_path_for(path);

    if let Err(e) = fs::write(&tmp_path, blob) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    // Owner read/write only (Unix).
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        if let Err(e) = fs::set_permissions(&tmp_path, perms) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    Ok(())
}

/// `<dir>/.<file_name>.tmp` next to the target path.
fn temp_path_for(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ))
}
