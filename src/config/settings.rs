use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TotpVaultError};
use crate::vault::StoreConfig;

/// Database location used when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = "~/.config/totp-cli/entries.db";

/// Salt phrase used when nothing else is configured.
pub const DEFAULT_SALT: &str = "totp-cli/default-salt/v1";

/// User-level configuration, loaded from `config.toml`.
///
/// Every field has a default so the tool works without any config
/// file at all.  CLI flags and environment variables override these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the encrypted database (`~/` is expanded).
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Salt phrase hashed into the database salt.
    #[serde(default = "default_salt")]
    pub salt: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

fn default_salt() -> String {
    DEFAULT_SALT.to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            salt: default_salt(),
        }
    }
}

impl Settings {
    /// Name of the config file inside the config directory.
    const FILE_NAME: &'static str = "config.toml";

    /// `~/.config/totp-cli/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TotpVaultError::ConfigError("cannot determine home directory".into()))?;
        Ok(home.join(".config").join("totp-cli").join(Self::FILE_NAME))
    }

    /// Load settings from `config_path`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)?;

        toml::from_str(&contents).map_err(|e| {
            TotpVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })
    }

    /// Pick the database path: explicit override, else the configured one.
    pub fn db_path(&self, db_override: Option<&str>) -> Result<PathBuf> {
        let raw = match db_override {
            Some(p) if !p.is_empty() => p,
            _ => self.db_path.as_str(),
        };
        expand_home(raw, dirs::home_dir().as_deref())
    }

    /// Pick the salt phrase: explicit override, else the configured one.
    pub fn salt_phrase<'a>(&'a self, salt_override: Option<&'a str>) -> &'a str {
        match salt_override {
            Some(s) if !s.is_empty() => s,
            _ => &self.salt,
        }
    }

    /// Build the store configuration handed to the core.
    pub fn store_config(
        &self,
        db_override: Option<&str>,
        salt_override: Option<&str>,
    ) -> Result<StoreConfig> {
        let path = self.db_path(db_override)?;
        Ok(StoreConfig::with_salt_phrase(
            path,
            self.salt_phrase(salt_override),
        ))
    }
}

/// Expand a leading `~/` to `home`.
pub fn expand_home(raw: &str, home: Option<&Path>) -> Result<PathBuf> {
    match raw.strip_prefix("~/") {
        Some(rest) => {
            let home = home.ok_or_else(|| {
                TotpVaultError::ConfigError("cannot determine home directory".into())
            })?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(raw)),
    }
}

// ── Tests ────────────────────────────────────────────────────────────
