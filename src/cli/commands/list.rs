//! `totp list` — display all entries in a table.

use crate::cli::{output, prompt_password, store_config, Cli};
use crate::errors::Result;
use crate::vault::TotpStore;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = store_config(cli)?;
    let password = prompt_password()?;
    let store = TotpStore::open(&config, password.as_bytes())?;

    let entries = store.list_entries();
    cli.info(&format!("{} TOTP entries", entries.len()));
    output::print_entries_table(&entries);

    Ok(())
}
