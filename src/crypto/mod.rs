//! Cryptographic primitives for TotpVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - PBKDF2-SHA256 password-based key derivation and salt hashing (`kdf`)
//! - A zeroize-on-drop key holder (`keys`)

pub mod encryption;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use encryption::{decrypt, encrypt, NONCE_LEN};
pub use kdf::{derive_key, derive_master_key, salt_from_string, KEY_LEN, PBKDF2_ITERATIONS};
pub use keys::MasterKey;
