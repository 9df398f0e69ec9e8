//! Configuration loaded from `~/.config/totp-cli/config.toml`.

pub mod settings;

pub use settings::{expand_home, Settings, DEFAULT_DB_PATH, DEFAULT_SALT};
