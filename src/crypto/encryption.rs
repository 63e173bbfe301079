//! AES-256-CBC encryption with PKCS#7 padding.
//!
//! Each call to `encrypt` generates a fresh random 16-byte IV and
//! prepends it to the ciphertext.  `decrypt` splits the IV back out
//! before decrypting.
//!
//! Layout of the returned byte buffer:
//!   [ 16-byte IV | ciphertext (multiple of 16 bytes) ]
//!
//! There is no authentication tag.  A tampered blob either fails the
//! padding check or decrypts to different bytes; callers that need
//! integrity must add it on top.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use crate::errors::{PassVaultError, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Size of the CBC initialization vector in bytes.
pub const IV_LEN: usize = BLOCK_SIZE;

/// Required key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the IV prepended to the ciphertext (IV || ciphertext).
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    check_key_len(key)?;

    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);

    let cipher = Aes256CbcEnc::new_from_slices(key, &iv).map_err(|_| {
        PassVaultError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        }
    })?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut output = Vec::with_capacity(IV_LEN + ciphertext.len());
    output.extend_from_slice(&iv);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Expects the first 16 bytes to be the IV, followed by a ciphertext
/// whose length is a non-zero multiple of the block size.
pub fn decrypt(key: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
    check_key_len(key)?;

    if blob.len() < IV_LEN {
        return Err(PassVaultError::InvalidCiphertextLength(blob.len()));
    }
    let (iv, ciphertext) = blob.split_at(IV_LEN);

    // PKCS#7 always emits at least one block, so an empty body is malformed too.
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(PassVaultError::InvalidCiphertextLength(ciphertext.len()));
    }

    let cipher = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| {
        PassVaultError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        }
    })?;

    // Lengths were checked above, so an unpad error can only mean bad padding.
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PassVaultError::InvalidPadding)
}

fn check_key_len(key: &[u8]) -> Result<()> {
    if key.len() != KEY_LEN {
        return Err(PassVaultError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        });
    }
    Ok(())
}
