//! `totp add-url` — import an otpauth:// URL into the database.

use crate::cli::{clipboard, output, prompt_password, store_config, Cli};
use crate::errors::{Result, TotpVaultError};
use crate::otp::{generate_current_code, parse_otpauth_url};
use crate::vault::TotpStore;

/// Execute the `add-url` command.
pub fn execute(cli: &Cli, url: Option<&str>, from_clipboard: bool) -> Result<()> {
    let raw = match (url, from_clipboard) {
        (_, true) => clipboard::read_text()?,
        (Some(u), false) => u.to_string(),
        (None, false) => {
            output::tip("Pass `--url <otpauth://...>` or `--clipboard`.");
            return Err(TotpVaultError::CommandFailed("no OTP URL given".into()));
        }
    };

    add_from_url(cli, &raw)
}

/// Parse `raw`, show its current code, and add it to the database.
///
/// Shared with `add-qrc`.
pub(crate) fn add_from_url(cli: &Cli, raw: &str) -> Result<()> {
    let entry = parse_otpauth_url(raw)?;
    if entry.issuer.is_empty() && !cli.quiet {
        output::warning("URL has no issuer; any entry for this account will count as a duplicate.");
    }

    // Show a code straight away so the user can finish enrolment.  Entries
    // the generator cannot handle (e.g. hotp) are still stored.
    match generate_current_code(&entry) {
        Ok(code) => {
            if !cli.quiet {
                print!("Generated TOTP code: ");
            }
            println!("{code}");
        }
        Err(e) => {
            if !cli.quiet {
                output::warning(&format!("{e}"));
            }
        }
    }

    let config = store_config(cli)?;
    let password = prompt_password()?;
    let mut store = TotpStore::open(&config, password.as_bytes())?;

    let (account, issuer) = (entry.account_name.clone(), entry.issuer.clone());
    store.add_entry(entry)?;
    store.save()?;

    cli.success(&format!("Added TOTP for {account} from {issuer}"));
    Ok(())
}
