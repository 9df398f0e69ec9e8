//! TOTP code generation (RFC 6238) for stored entries.

use totp_rs::{Algorithm, Secret, TOTP};

use crate::errors::{Result, TotpVaultError};
use crate::vault::TotpEntry;

/// Compute the code for `entry` at `unix_time` (seconds).
pub fn generate_code(entry: &TotpEntry, unix_time: u64) -> Result<String> {
    Ok(build_totp(entry)?.generate(unix_time))
}

/// Compute the code for `entry` at the current time.
pub fn generate_current_code(entry: &TotpEntry) -> Result<String> {
    generate_code(entry, now_unix()?)
}

/// Seconds until the current code for `period` rolls over.
pub fn seconds_remaining(period: u64, unix_time: u64) -> u64 {
    if period == 0 {
        return 0;
    }
    period - unix_time % period
}

pub(crate) fn now_unix() -> Result<u64> {
    u64::try_from(chrono::Utc::now().timestamp())
        .map_err(|_| TotpVaultError::CodeGeneration("system clock is before 1970".into()))
}

fn build_totp(entry: &TotpEntry) -> Result<TOTP> {
    if !entry.otp_type.eq_ignore_ascii_case("totp") {
        return Err(TotpVaultError::CodeGeneration(format!(
            "unsupported OTP type '{}', only 'totp' is supported",
            entry.otp_type
        )));
    }

    if !(6..=8).contains(&entry.digits) {
        return Err(TotpVaultError::CodeGeneration(format!(
            "unsupported digits '{}', expected 6-8",
            entry.digits
        )));
    }

    if entry.period == 0 {
        return Err(TotpVaultError::CodeGeneration("period must be positive".into()));
    }

    let algorithm = match entry.algorithm.to_ascii_uppercase().as_str() {
        "SHA1" => Algorithm::SHA1,
        "SHA256" => Algorithm::SHA256,
        "SHA512" => Algorithm::SHA512,
        other => {
            return Err(TotpVaultError::CodeGeneration(format!(
                "unsupported algorithm '{other}', expected SHA1/SHA256/SHA512"
            )))
        }
    };

    let secret = Secret::Encoded(entry.secret.clone())
        .to_bytes()
        .map_err(|e| TotpVaultError::CodeGeneration(format!("invalid base32 secret: {e:?}")))?;

    if secret.is_empty() {
        return Err(TotpVaultError::CodeGeneration(
            "secret decoded to an empty byte string".into(),
        ));
    }

    // Unchecked: providers such as GitHub hand out 80-bit secrets, below
    // the 128-bit minimum the checked constructor enforces.
    Ok(TOTP::new_unchecked(
        algorithm,
        entry.digits as usize,
        1,
        entry.period,
        secret,
    ))
}
