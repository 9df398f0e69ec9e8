//! Integration tests for the TotpVault crypto module.

use totpvault::crypto::{
    decrypt, derive_key, derive_master_key, encrypt, salt_from_string, MasterKey, KEY_LEN,
    NONCE_LEN,
};
use totpvault::errors::TotpVaultError;

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = [0xABu8; 32];
    let plaintext = b"otpauth://totp/GitHub:alice?secret=JBSWY3DPEHPK3PXP";

    let ciphertext = encrypt(&key, plaintext).expect("encrypt should succeed");

    // Ciphertext must be longer than plaintext (12-byte nonce + 16-byte tag).
    assert!(ciphertext.len() > plaintext.len());

    let recovered = decrypt(&key, &ciphertext).expect("decrypt should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn encrypt_produces_different_ciphertext_each_time() {
    let key = [0xCDu8; 32];
    let plaintext = b"same payload";

    let ct1 = encrypt(&key, plaintext).expect("encrypt 1");
    let ct2 = encrypt(&key, plaintext).expect("encrypt 2");

    // Fresh nonce per call.
    assert_ne!(ct1[..NONCE_LEN], ct2[..NONCE_LEN]);
    assert_ne!(ct1, ct2, "two encryptions of the same plaintext must differ");
}

#[test]
fn decrypt_with_wrong_key_fails() {
    let key = [0x11u8; 32];
    let wrong_key = [0x22u8; 32];

    let ciphertext = encrypt(&key, b"TOP_SECRET").expect("encrypt");
    let result = decrypt(&wrong_key, &ciphertext);

    assert!(matches!(result, Err(TotpVaultError::DecryptionFailed)));
}

#[test]
fn decrypt_with_truncated_data_fails() {
    let key = [0xAAu8; 32];
    let result = decrypt(&key, &[0u8; 5]);
    assert!(matches!(result, Err(TotpVaultError::DecryptionFailed)));
}

#[test]
fn every_flipped_byte_is_detected() {
    let key = [0xBBu8; 32];
    let ciphertext = encrypt(&key, b"tamper me").expect("encrypt");

    for i in 0..ciphertext.len() {
        let mut corrupted = ciphertext.clone();
        corrupted[i] ^= 0x01;
        assert!(
            matches!(decrypt(&key, &corrupted), Err(TotpVaultError::DecryptionFailed)),
            "flip at byte {i} went undetected"
        );
    }
}

#[test]
fn wrong_key_and_corruption_report_the_same_message() {
    let key = [0x01u8; 32];
    let ciphertext = encrypt(&key, b"x").unwrap();

    let wrong_key = decrypt(&[0x02u8; 32], &ciphertext).unwrap_err().to_string();
    let mut corrupted = ciphertext.clone();
    corrupted[NONCE_LEN] ^= 0xFF;
    let tampered = decrypt(&key, &corrupted).unwrap_err().to_string();

    assert_eq!(wrong_key, tampered);
}

#[test]
fn bad_key_length_is_not_an_authentication_failure() {
    let err = encrypt(&[0u8; 31], b"x").unwrap_err();
    assert!(matches!(err, TotpVaultError::InvalidKeyLength { .. }));

    let err = decrypt(&[0u8; 33], &[0u8; 40]).unwrap_err();
    assert!(matches!(err, TotpVaultError::InvalidKeyLength { .. }));
}

// ---------------------------------------------------------------------------
// Key derivation (PBKDF2-SHA256)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_same_inputs_same_output() {
    let salt = salt_from_string("my salt phrase");

    let key1 = derive_key(b"my-secure-passphrase", &salt, KEY_LEN);
    let key2 = derive_key(b"my-secure-passphrase", &salt, KEY_LEN);

    assert_eq!(key1, key2, "same password + salt must produce the same key");
    assert_eq!(key1.len(), KEY_LEN);
}

#[test]
fn derive_key_different_salt_strings_different_keys() {
    let key1 = derive_master_key(b"same-password", &salt_from_string("salt-one"));
    let key2 = derive_master_key(b"same-password", &salt_from_string("salt-two"));

    assert_ne!(key1, key2, "different salts must produce different keys");
}

#[test]
fn derive_key_different_passwords_different_keys() {
    let salt = salt_from_string("");

    let key1 = derive_master_key(b"password-one", &salt);
    let key2 = derive_master_key(b"password-two", &salt);

    assert_ne!(key1, key2, "different passwords must produce different keys");
}

#[test]
fn salt_from_string_is_deterministic_and_fixed_length() {
    assert_eq!(salt_from_string("a"), salt_from_string("a"));
    assert_ne!(salt_from_string("a"), salt_from_string("b"));
    assert_eq!(salt_from_string("a much longer salt phrase").len(), 32);
}

// ---------------------------------------------------------------------------
// End-to-end: password -> key -> encrypt/decrypt
// ---------------------------------------------------------------------------

#[test]
fn full_crypto_pipeline() {
    let salt = salt_from_string("pipeline");
    let key = MasterKey::derive(b"hunter2", &salt);

    let plaintext = b"{\"entries\":[]}";
    let ciphertext = encrypt(key.as_bytes(), plaintext).expect("encrypt");

    let again = MasterKey::derive(b"hunter2", &salt);
    let recovered = decrypt(again.as_bytes(), &ciphertext).expect("decrypt");
    assert_eq!(recovered, plaintext.to_vec());
}
