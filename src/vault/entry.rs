//! The credential record stored inside a database.
//!
//! Field names are part of the on-disk payload and must stay stable.

use serde::{Deserialize, Serialize};

/// A single TOTP credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpEntry {
    /// Service that issued the credential (may be empty).
    pub issuer: String,

    /// Account label; the primary lookup key.
    pub account_name: String,

    /// Base32-encoded shared secret.
    pub secret: String,

    /// OTP kind, e.g. "totp" or "hotp".
    #[serde(rename = "type")]
    pub otp_type: String,

    /// Time step in seconds.
    pub period: u64,

    /// Number of digits in a generated code.
    pub digits: u32,

    /// HMAC algorithm name, e.g. "SHA1".
    pub algorithm: String,

    /// The otpauth:// URL exactly as it was imported.
    pub url: String,
}

impl TotpEntry {
    /// Does this entry match the composite key?
    ///
    /// An empty `issuer` matches any issuer for the given account name.
    pub fn matches(&self, account_name: &str, issuer: &str) -> bool {
        self.account_name == account_name && (issuer.is_empty() || self.issuer == issuer)
    }

    /// Project the non-secret fields for display.
    pub fn summary(&self) -> EntrySummary {
        EntrySummary {
            issuer: self.issuer.clone(),
            account_name: self.account_name.clone(),
            otp_type: self.otp_type.clone(),
            period: self.period,
            digits: self.digits,
            algorithm: self.algorithm.clone(),
        }
    }
}

/// Display-only view of an entry (no secret, no URL).
///
/// Returned by `TotpData::summaries` so the table printer never
/// touches the shared secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub issuer: String,
    pub account_name: String,
    pub otp_type: String,
    pub period: u64,
    pub digits: u32,
    pub algorithm: String,
}
