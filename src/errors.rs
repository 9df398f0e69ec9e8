use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in TotpVault.
#[derive(Debug, Error)]
pub enum TotpVaultError {
    // --- Crypto errors ---
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong password, wrong salt, or corrupted data")]
    DecryptionFailed,

    // --- Record errors ---
    #[error("TOTP entry not found for account '{account}'{}", issuer_suffix(.issuer))]
    EntryNotFound { account: String, issuer: String },

    #[error("TOTP entry already exists for account '{account}'{}", issuer_suffix(.issuer))]
    EntryAlreadyExists { account: String, issuer: String },

    // --- Database file errors ---
    #[error("Database not found at {0}")]
    DatabaseNotFound(PathBuf),

    #[error("Database file already exists: {0}")]
    DatabaseAlreadyExists(PathBuf),

    #[error("Malformed database payload: {0}")]
    MalformedData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Config errors ---
    #[error("Config error: {0}")]
    ConfigError(String),

    // --- OTP collaborator errors ---
    #[error("Invalid OTP URL: {0}")]
    InvalidOtpUrl(String),

    #[error("Failed to generate TOTP code: {0}")]
    CodeGeneration(String),

    // --- CLI errors ---
    #[error("QR code error: {0}")]
    QrDecode(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),
}

fn issuer_suffix(issuer: &str) -> String {
    if issuer.is_empty() {
        String::new()
    } else {
        format!(" from '{issuer}'")
    }
}

/// Convenience type alias for TotpVault results.
pub type Result<T> = std::result::Result<T, TotpVaultError>;
