//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod clipboard;
pub mod commands;
pub mod output;
pub mod qr;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, TotpVaultError};
use crate::vault::StoreConfig;

/// Environment variable consulted before prompting for the password.
pub const PASSWORD_ENV: &str = "TOTP_PASSWORD";

/// totp: password-protected TOTP credential store.
#[derive(Parser)]
#[command(name = "totp", about = "Password-protected TOTP credential store", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the database file (default: ~/.config/totp-cli/entries.db)
    #[arg(short, long, env = "TOTP_DB_PATH", global = true)]
    pub db: Option<String>,

    /// Salt phrase for key derivation
    #[arg(short, long, env = "TOTP_SALT", hide_env_values = true, global = true)]
    pub salt: Option<String>,

    /// Path to the settings file (default: ~/.config/totp-cli/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new, empty TOTP database
    #[command(visible_aliases = ["c", "db"])]
    CreateDb,

    /// Add a new TOTP from an otpauth:// URL
    #[command(visible_alias = "a")]
    AddUrl {
        /// otpauth:// URL to add (quote it in the shell)
        #[arg(short, long, conflicts_with = "clipboard")]
        url: Option<String>,

        /// Read the URL from the clipboard
        #[arg(short, long)]
        clipboard: bool,
    },

    /// Add a new TOTP from a QR code image (PNG or JPEG)
    #[command(visible_alias = "qrc")]
    AddQrc {
        /// Path to the QR code image
        #[arg(short, long)]
        image: String,
    },

    /// List all stored TOTP entries
    #[command(visible_alias = "l")]
    List,

    /// Generate the current code for an entry
    #[command(visible_aliases = ["gen", "g"])]
    Generate {
        /// Account name
        #[arg(short, long)]
        account: String,

        /// Issuer (omit to match the first entry for the account)
        #[arg(short, long, default_value = "")]
        issuer: String,

        /// Copy the code to the clipboard
        #[arg(short, long)]
        clipboard: bool,
    },

    /// Remove an entry by account and issuer
    #[command(visible_aliases = ["rm", "r"])]
    Remove {
        /// Account name
        #[arg(short, long)]
        account: String,

        /// Issuer (omit to match the first entry for the account)
        #[arg(short, long, default_value = "")]
        issuer: String,
    },
}

impl Cli {
    /// Print an info line unless `--quiet` is set.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            output::info(msg);
        }
    }

    /// Print a success line unless `--quiet` is set.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            output::success(msg);
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the database password, trying in order:
/// 1. `TOTP_PASSWORD` env var (scripts, tests)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter password")
        .interact()
        .map_err(|e| TotpVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation (used by `create-db`).
///
/// Also respects `TOTP_PASSWORD` for scripted usage.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Choose password")
        .with_confirmation("Confirm password", "Passwords do not match, try again")
        .interact()
        .map_err(|e| TotpVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

fn password_from_env() -> Option<Zeroizing<String>> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|pw| !pw.is_empty())
        .map(Zeroizing::new)
}

/// Load settings from `--config` or the default location.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let path = match &cli.config {
        Some(p) => PathBuf::from(p),
        None => Settings::default_path()?,
    };
    Settings::load(&path)
}

/// Resolve the database path and salt, creating the parent directory.
///
/// Flags and environment variables (via clap) win over the settings file.
pub fn store_config(cli: &Cli) -> Result<StoreConfig> {
    let settings = load_settings(cli)?;
    let config = settings.store_config(cli.db.as_deref(), cli.salt.as_deref())?;

    if let Some(dir) = config.path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }

    cli.info(&format!("Using database file: {}", config.path.display()));
    Ok(config)
}
