//! Vault module — the encrypted TOTP credential store.
//!
//! This module provides:
//! - The `TotpEntry` record and its display projection (`entry`)
//! - The ordered in-memory collection with CRUD (`collection`)
//! - Payload serialization and atomic file I/O (`format`)
//! - `load_secure`/`save_secure` and the `TotpStore` handle (`store`)

pub mod collection;
pub mod entry;
pub mod format;
pub mod store;

// Re-export the most commonly used items.
pub use collection::TotpData;
pub use entry::{EntrySummary, TotpEntry};
pub use store::{load_secure, save_secure, StoreConfig, TotpStore};
