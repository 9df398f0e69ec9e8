//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is fixed so the same password and salt always
//! reproduce the key that sealed an existing database.

use pbkdf2::pbkdf2_hmac;
use sha2::{Digest, Sha256};

/// Number of PBKDF2 iterations.
pub const PBKDF2_ITERATIONS: u32 = 4096;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Length of a salt produced by `salt_from_string` (SHA-256 output).
pub const SALT_LEN: usize = 32;

/// Derive `key_len` bytes from a password and salt.
///
/// Deterministic and infallible: the same inputs always give the same key.
pub fn derive_key(password: &[u8], salt: &[u8], key_len: usize) -> Vec<u8> {
    let mut key = vec![0u8; key_len];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key);
    key
}

/// Derive a 32-byte key sized for AES-256-GCM.
pub fn derive_master_key(password: &[u8], salt: &[u8]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key);
    key
}

/// Hash an arbitrary phrase into a fixed-length salt.
///
/// One salt is used for the whole database, so this only normalizes a
/// human-chosen phrase to a uniform length.
pub fn salt_from_string(input: &str) -> [u8; SALT_LEN] {
    Sha256::digest(input.as_bytes()).into()
}
