//! `totp create-db` — create a new, empty database.

use crate::cli::{prompt_new_password, store_config, Cli};
use crate::errors::{Result, TotpVaultError};
use crate::vault::TotpStore;

/// Execute the `create-db` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = store_config(cli)?;

    // Check before prompting so the user is not asked for nothing.
    if config.path.exists() {
        return Err(TotpVaultError::DatabaseAlreadyExists(config.path));
    }

    let password = prompt_new_password()?;
    let store = TotpStore::create(&config, password.as_bytes())?;

    cli.success(&format!(
        "Created new TOTP database at {}",
        store.path().display()
    ));
    Ok(())
}
