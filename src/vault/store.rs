//! Secure persistence and the high-level database handle.
//!
//! `load_secure` and `save_secure` are the whole-file operations:
//! load = read + derive key + decrypt + deserialize,
//! save = serialize + derive key + encrypt + atomic write.
//! Every save rewrites the entire database.
//!
//! There is no file locking.  Two processes saving to the same path
//! race and the last rename wins.

use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use crate::crypto::encryption::{decrypt, encrypt};
use crate::crypto::kdf::{salt_from_string, SALT_LEN};
use crate::crypto::keys::MasterKey;
use crate::errors::{Result, TotpVaultError};

use super::collection::TotpData;
use super::entry::{EntrySummary, TotpEntry};
use super::format;

/// Where the database lives and which salt seals it.
///
/// Built by the caller from flags, environment and settings; the core
/// never reads any of those itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub salt: Vec<u8>,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>, salt: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            salt: salt.into(),
        }
    }

    /// Use a salt phrase, hashed to a fixed-length salt.
    pub fn with_salt_phrase(path: impl Into<PathBuf>, phrase: &str) -> Self {
        let salt: [u8; SALT_LEN] = salt_from_string(phrase);
        Self::new(path, salt.to_vec())
    }
}

/// Decrypt and deserialize the database at `path`.
pub fn load_secure(path: &Path, password: &[u8], salt: &[u8]) -> Result<TotpData> {
    let key = MasterKey::derive(password, salt);
    load_with_key(path, &key)
}

/// Serialize, encrypt and atomically write the database to `path`.
pub fn save_secure(path: &Path, data: &TotpData, password: &[u8], salt: &[u8]) -> Result<()> {
    let key = MasterKey::derive(password, salt);
    seal_to(path, &key, data)
}

fn load_with_key(path: &Path, key: &MasterKey) -> Result<TotpData> {
    let blob = format::read_blob(path)?;
    let mut plaintext = decrypt(key.as_bytes(), &blob)?;
    let data = format::decode_payload(&plaintext);
    plaintext.zeroize();
    data
}

fn seal_to(path: &Path, key: &MasterKey, data: &TotpData) -> Result<()> {
    let mut plaintext = format::encode_payload(data)?;
    let blob = encrypt(key.as_bytes(), &plaintext);
    plaintext.zeroize();
    format::write_blob(path, &blob?)
}

/// An unlocked database: the decrypted collection plus the key that
/// sealed it.  Create one with `TotpStore::create` or `TotpStore::open`,
/// mutate it, then call `save`.
pub struct TotpStore {
    /// Path to the database file on disk.
    path: PathBuf,

    /// Decrypted entries.
    data: TotpData,

    /// The derived key (zeroized on drop).
    key: MasterKey,
}

impl TotpStore {
    /// Create a new, empty database file.
    ///
    /// Refuses to overwrite an existing file.
    pub fn create(config: &StoreConfig, password: &[u8]) -> Result<Self> {
        if config.path.exists() {
            return Err(TotpVaultError::DatabaseAlreadyExists(config.path.clone()));
        }

        let store = Self {
            path: config.path.clone(),
            data: TotpData::new(),
            key: MasterKey::derive(password, &config.salt),
        };
        store.save()?;
        Ok(store)
    }

    /// Open and decrypt an existing database file.
    pub fn open(config: &StoreConfig, password: &[u8]) -> Result<Self> {
        let key = MasterKey::derive(password, &config.salt);
        let data = load_with_key(&config.path, &key)?;

        Ok(Self {
            path: config.path.clone(),
            data,
            key,
        })
    }

    /// Encrypt the whole collection and write it back to the same path.
    pub fn save(&self) -> Result<()> {
        seal_to(&self.path, &self.key, &self.data)
    }

    // ------------------------------------------------------------------
    // Entry operations (delegate to the in-memory collection)
    // ------------------------------------------------------------------

    pub fn add_entry(&mut self, entry: TotpEntry) -> Result<()> {
        self.data.add_entry(entry)
    }

    pub fn get_entry(&self, account_name: &str, issuer: &str) -> Result<&TotpEntry> {
        self.data.get_entry(account_name, issuer)
    }

    pub fn remove_entry(&mut self, account_name: &str, issuer: &str) -> Result<TotpEntry> {
        self.data.remove_entry(account_name, issuer)
    }

    pub fn list_entries(&self) -> Vec<EntrySummary> {
        self.data.summaries()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of entries.
    pub fn entry_count(&self) -> usize {
        self.data.len()
    }
}
