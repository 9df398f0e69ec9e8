//! `otpauth://` URL parsing per the Google Authenticator key-URI format.
//!
//! Format: `otpauth://TYPE/ISSUER:ACCOUNT?secret=BASE32&issuer=ISSUER&algorithm=SHA1&digits=6&period=30`

use percent_encoding::percent_decode_str;
use url::Url;

use crate::errors::{Result, TotpVaultError};
use crate::vault::TotpEntry;

const DEFAULT_PERIOD: u64 = 30;
const DEFAULT_DIGITS: u32 = 6;
const DEFAULT_ALGORITHM: &str = "SHA1";

/// Parse an otpauth URL into a credential record.
///
/// The original URL string is kept verbatim in `TotpEntry::url`.
pub fn parse_otpauth_url(input: &str) -> Result<TotpEntry> {
    let input = input.trim();
    let url = Url::parse(input).map_err(|e| invalid(format!("{e}")))?;

    if url.scheme() != "otpauth" {
        return Err(invalid(format!(
            "expected scheme 'otpauth', got '{}'",
            url.scheme()
        )));
    }

    let otp_type = match url.host_str().map(str::to_ascii_lowercase) {
        Some(t) if t == "totp" || t == "hotp" => t,
        other => return Err(invalid(format!("unknown OTP type {other:?}"))),
    };

    // Path is "/ACCOUNT" or "/ISSUER:ACCOUNT".
    let raw_label = url.path().trim_start_matches('/');
    let label = percent_decode_str(raw_label)
        .decode_utf8()
        .map_err(|e| invalid(format!("label is not valid UTF-8: {e}")))?;

    let (label_issuer, account_name) = match label.split_once(':') {
        Some((issuer, account)) => (issuer.trim().to_string(), account.trim().to_string()),
        None => (String::new(), label.trim().to_string()),
    };

    if account_name.is_empty() {
        return Err(invalid("missing account name".into()));
    }

    let mut secret = None;
    let mut query_issuer = None;
    let mut period = DEFAULT_PERIOD;
    let mut digits = DEFAULT_DIGITS;
    let mut algorithm = DEFAULT_ALGORITHM.to_string();

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "secret" => secret = Some(normalize_secret(&value)),
            "issuer" => query_issuer = Some(value.trim().to_string()),
            "period" => {
                period = value
                    .parse::<u64>()
                    .ok()
                    .filter(|p| *p > 0)
                    .ok_or_else(|| invalid(format!("invalid period '{value}'")))?;
            }
            "digits" => {
                digits = value
                    .parse::<u32>()
                    .map_err(|_| invalid(format!("invalid digits '{value}'")))?;
            }
            "algorithm" => algorithm = value.to_ascii_uppercase(),
            _ => {}
        }
    }

    let secret = secret
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid("missing 'secret' parameter".into()))?;

    // The query parameter wins over the label prefix.
    let issuer = query_issuer
        .filter(|i| !i.is_empty())
        .unwrap_or(label_issuer);

    Ok(TotpEntry {
        issuer,
        account_name,
        secret,
        otp_type,
        period,
        digits,
        algorithm,
        url: input.to_string(),
    })
}

/// Uppercase and drop spaces and padding so the secret is plain base32.
fn normalize_secret(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '=')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn invalid(msg: String) -> TotpVaultError {
    TotpVaultError::InvalidOtpUrl(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_url() {
        let url = "otpauth://totp/GitHub:alice?secret=JBSWY3DPEHPK3PXP&issuer=GitHub&algorithm=SHA256&digits=8&period=60";
        let e = parse_otpauth_url(url).unwrap();
        assert_eq!(e.issuer, "GitHub");
        assert_eq!(e.account_name, "alice");
        assert_eq!(e.secret, "JBSWY3DPEHPK3PXP");
        assert_eq!(e.otp_type, "totp");
        assert_eq!(e.period, 60);
        assert_eq!(e.digits, 8);
        assert_eq!(e.algorithm, "SHA256");
        assert_eq!(e.url, url);
    }

    #[test]
    fn applies_defaults() {
        let e = parse_otpauth_url("otpauth://totp/alice?secret=jbswy3dpehpk3pxp").unwrap();
        assert_eq!(e.issuer, "");
        assert_eq!(e.secret, "JBSWY3DPEHPK3PXP");
        assert_eq!(e.period, 30);
        assert_eq!(e.digits, 6);
        assert_eq!(e.algorithm, "SHA1");
    }

    #[test]
    fn decodes_label_and_prefers_query_issuer() {
        let e = parse_otpauth_url(
            "otpauth://totp/Old%20Name:alice%40example.com?secret=JBSWY3DPEHPK3PXP&issuer=New",
        )
        .unwrap();
        assert_eq!(e.account_name, "alice@example.com");
        assert_eq!(e.issuer, "New");
    }

    #[test]
    fn label_issuer_used_when_query_has_none() {
        let e = parse_otpauth_url("otpauth://totp/ACME%20Co:bob?secret=JBSWY3DPEHPK3PXP").unwrap();
        assert_eq!(e.issuer, "ACME Co");
        assert_eq!(e.account_name, "bob");
    }

    #[test]
    fn rejects_bad_input() {
        for bad in [
            "https://example.com/alice?secret=JBSWY3DPEHPK3PXP",
            "otpauth://motp/alice?secret=JBSWY3DPEHPK3PXP",
            "otpauth://totp/alice",
            "otpauth://totp/alice?secret=",
            "otpauth://totp/?secret=JBSWY3DPEHPK3PXP",
            "otpauth://totp/alice?secret=JBSWY3DPEHPK3PXP&period=0",
            "otpauth://totp/alice?secret=JBSWY3DPEHPK3PXP&digits=six",
            "not a url",
        ] {
            assert!(
                matches!(parse_otpauth_url(bad), Err(TotpVaultError::InvalidOtpUrl(_))),
                "{bad} should be rejected"
            );
        }
    }
}
