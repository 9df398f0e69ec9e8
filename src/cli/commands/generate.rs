//! `totp generate` — print the current code for one entry.

use crate::cli::{clipboard, prompt_password, store_config, Cli};
use crate::errors::Result;
use crate::otp::code::now_unix;
use crate::otp::{generate_code, seconds_remaining};
use crate::vault::TotpStore;

/// Execute the `generate` command.
pub fn execute(cli: &Cli, account: &str, issuer: &str, to_clipboard: bool) -> Result<()> {
    let config = store_config(cli)?;
    let password = prompt_password()?;
    let store = TotpStore::open(&config, password.as_bytes())?;

    let entry = store.get_entry(account, issuer)?;
    let now = now_unix()?;
    let code = generate_code(entry, now)?;

    println!("{code}");
    cli.info(&format!(
        "Valid for {}s more",
        seconds_remaining(entry.period, now)
    ));

    if to_clipboard {
        clipboard::write_text(&code)?;
        cli.success("Code copied to clipboard");
    }

    Ok(())
}
