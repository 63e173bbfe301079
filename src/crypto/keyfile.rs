//! Master key provisioning for the CLI.
//!
//! The store itself never generates or persists its key.  The CLI gets
//! one from either:
//! - the `PASSVAULT_KEY` environment variable (base64 of 32 bytes), or
//! - a keyfile holding exactly 32 raw random bytes.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroizing;

use super::encryption::KEY_LEN;
use super::keys::MasterKey;
use crate::errors::{PassVaultError, Result};

/// Environment variable that overrides the keyfile.
pub const KEY_ENV_VAR: &str = "PASSVAULT_KEY";

/// Generate a new random master key and write it to `path`.
///
/// The file is written with restrictive permissions (owner-only read).
/// Refuses to overwrite an existing keyfile, since that would orphan
/// every credential encrypted under the old key.
pub fn generate_keyfile(path: &Path) -> Result<MasterKey> {
    if path.exists() {
        return Err(PassVaultError::KeyfileError(format!(
            "keyfile already exists at {}",
            path.display()
        )));
    }

    let key = MasterKey::generate();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                PassVaultError::KeyfileError(format!("cannot create keyfile directory: {e}"))
            })?;
        }
    }

    fs::write(path, key.as_bytes())
        .map_err(|e| PassVaultError::KeyfileError(format!("failed to write keyfile: {e}")))?;

    // On Unix, restrict permissions to owner-only read/write.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms).map_err(|e| {
            PassVaultError::KeyfileError(format!("failed to set keyfile permissions: {e}"))
        })?;
    }

    Ok(key)
}

/// Load a keyfile from disk and validate its length.
pub fn load_keyfile(path: &Path) -> Result<MasterKey> {
    if !path.exists() {
        return Err(PassVaultError::KeyfileError(format!(
            "keyfile not found at {} — run `passvault init` first",
            path.display()
        )));
    }

    let data = Zeroizing::new(
        fs::read(path)
            .map_err(|e| PassVaultError::KeyfileError(format!("failed to read keyfile: {e}")))?,
    );

    if data.len() != KEY_LEN {
        return Err(PassVaultError::KeyfileError(format!(
            "keyfile must be exactly {} bytes, got {}",
            KEY_LEN,
            data.len()
        )));
    }

    MasterKey::from_slice(&data)
}

/// Decode a base64-encoded master key.
pub fn key_from_base64(encoded: &str) -> Result<MasterKey> {
    let bytes = Zeroizing::new(BASE64.decode(encoded.trim()).map_err(|e| {
        PassVaultError::KeyfileError(format!("{KEY_ENV_VAR} is not valid base64: {e}"))
    })?);
    MasterKey::from_slice(&bytes)
}

/// Read the master key from `PASSVAULT_KEY`, if set and non-empty.
pub fn key_from_env() -> Result<Option<MasterKey>> {
    match std::env::var(KEY_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => key_from_base64(&value).map(Some),
        _ => Ok(None),
    }
}
