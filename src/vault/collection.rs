//! In-memory credential collection and its CRUD operations.
//!
//! Entries are kept in insertion order and looked up by a linear scan
//! over the `(account_name, issuer)` composite key.  A lookup with an
//! empty issuer matches the first entry with that account name, whatever
//! its issuer.  `add_entry` uses the same rule for duplicate detection,
//! so once `alice@GitHub` exists, `alice` with no issuer is a duplicate too.

use serde::{Deserialize, Serialize};

use super::entry::{EntrySummary, TotpEntry};
use crate::errors::{Result, TotpVaultError};

/// The full decrypted database payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpData {
    #[serde(default)]
    entries: Vec<TotpEntry>,
}

impl TotpData {
    /// An empty collection (new database).
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first entry matching the composite key.
    pub fn find_entry(&self, account_name: &str, issuer: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.matches(account_name, issuer))
            .ok_or_else(|| not_found(account_name, issuer))
    }

    /// The first entry matching the composite key.
    pub fn get_entry(&self, account_name: &str, issuer: &str) -> Result<&TotpEntry> {
        let index = self.find_entry(account_name, issuer)?;
        Ok(&self.entries[index])
    }

    /// Append an entry unless one with the same key already exists.
    ///
    /// On `EntryAlreadyExists` the collection is left untouched.
    pub fn add_entry(&mut self, entry: TotpEntry) -> Result<()> {
        if self.find_entry(&entry.account_name, &entry.issuer).is_ok() {
            return Err(TotpVaultError::EntryAlreadyExists {
                account: entry.account_name,
                issuer: entry.issuer,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove and return the first matching entry, keeping the order of the rest.
    pub fn remove_entry(&mut self, account_name: &str, issuer: &str) -> Result<TotpEntry> {
        let index = self.find_entry(account_name, issuer)?;
        Ok(self.entries.remove(index))
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[TotpEntry] {
        &self.entries
    }

    /// Display projections of all entries, in insertion order.
    pub fn summaries(&self) -> Vec<EntrySummary> {
        self.entries.iter().map(TotpEntry::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn not_found(account_name: &str, issuer: &str) -> TotpVaultError {
    TotpVaultError::EntryNotFound {
        account: account_name.to_string(),
        issuer: issuer.to_string(),
    }
}
