//! Credential rows and the plaintext payload they encrypt.
//!
//! The payload is `"<username>:<password>"`.  Splitting happens on the
//! first `:` only, so passwords may contain colons but usernames may not.

use zeroize::Zeroizing;

use crate::errors::{PassVaultError, Result};

/// Separator between username and password inside a payload.
pub const PAYLOAD_SEPARATOR: char = ':';

/// A single row of the `accounts` table.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    /// Auto-incremented row id; higher means stored later.
    pub id: i64,

    /// The site identifier (not unique).
    pub site: String,

    /// The username as given when the record was stored.
    pub username: String,

    /// IV || ciphertext of the payload.
    pub encrypted_payload: Vec<u8>,
}

/// Build the plaintext payload for a credential.
pub fn format_payload(username: &str, password: &str) -> Zeroizing<String> {
    Zeroizing::new(format!("{username}{PAYLOAD_SEPARATOR}{password}"))
}

/// Split a decrypted payload into (username, password).
pub fn split_payload(payload: &[u8]) -> Result<(&str, &str)> {
    let text = std::str::from_utf8(payload).map_err(|_| {
        PassVaultError::VerificationFailed("payload is not valid UTF-8".into())
    })?;
    text.split_once(PAYLOAD_SEPARATOR).ok_or_else(|| {
        PassVaultError::VerificationFailed("payload has no username separator".into())
    })
}
