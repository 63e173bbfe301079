//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-CBC encryption and decryption with PKCS#7 padding (`encryption`)
//! - The zeroize-on-drop `MasterKey` wrapper (`keys`)
//! - Keyfile and environment-based key provisioning (`keyfile`)

pub mod encryption;
pub mod keyfile;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, MasterKey, ...};
pub use encryption::{decrypt, encrypt, BLOCK_SIZE, IV_LEN, KEY_LEN};
pub use keyfile::{generate_keyfile, key_from_base64, key_from_env, load_keyfile};
pub use keys::MasterKey;
