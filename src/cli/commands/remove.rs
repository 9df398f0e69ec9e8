//! `totp remove` — delete one entry from the database.

use crate::cli::{prompt_password, store_config, Cli};
use crate::errors::Result;
use crate::vault::TotpStore;

/// Execute the `remove` command.
pub fn execute(cli: &Cli, account: &str, issuer: &str) -> Result<()> {
    let config = store_config(cli)?;
    let password = prompt_password()?;
    let mut store = TotpStore::open(&config, password.as_bytes())?;

    let removed = store.remove_entry(account, issuer)?;
    store.save()?;

    cli.success(&format!(
        "Removed TOTP for {} from {}",
        removed.account_name, removed.issuer
    ));
    Ok(())
}
