//! High-level credential operations used by CLI commands.
//!
//! `CredentialStore` binds a master key to a SQLite database and exposes
//! exactly three operations: `open`, `store_password` and
//! `check_password`.
//!
//! Records are append-only.  Storing the same site twice adds a second
//! row; nothing is ever updated or deleted.  `check_password` only looks
//! at rows stored for the supplied site and username, newest first; the
//! first row whose decrypted username also matches decides the result.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::crypto::encryption::{decrypt, encrypt};
use crate::crypto::keys::MasterKey;
use crate::errors::{PassVaultError, Result};

use super::record::{format_payload, split_payload, CredentialRecord};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS accounts (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    site     TEXT NOT NULL,
    username TEXT NOT NULL,
    password BLOB NOT NULL
);";

/// An open credential store.
///
/// There is no `close`: the connection is released when the value is
/// dropped.  The store is `Send` but not `Sync`; concurrent writers on the
/// same file are serialized only by SQLite's own locking.
pub struct CredentialStore {
    /// Long-lived connection.  Every insert autocommits on its own.
    conn: Connection,

    /// Path to the database file on disk.
    path: PathBuf,

    /// The master key (zeroized on drop).
    key: MasterKey,
}

impl CredentialStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open (or create) the credential database at `path`.
    ///
    /// Creates the `accounts` table if it doesn't exist, so calling this
    /// on an already-initialized database is harmless.
    pub fn open(key: MasterKey, path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            PassVaultError::StorageUnavailable(format!("{}: {e}", path.display()))
        })?;

        conn.execute_batch(SCHEMA).map_err(|e| {
            PassVaultError::StorageUnavailable(format!("{}: {e}", path.display()))
        })?;

        // Restrict the database to its owner.  Best effort: the ciphertexts
        // are already protected by the key.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            if let Err(e) = std::fs::set_permissions(path, perms) {
                warn!(path = %path.display(), error = %e, "could not restrict database permissions");
            }
        }

        debug!(path = %path.display(), "credential store opened");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
            key,
        })
    }

    // ------------------------------------------------------------------
    // Credential operations
    // ------------------------------------------------------------------

    /// Encrypt `"<username>:<password>"` and append it as a new row.
    ///
    /// Never overwrites: a second call for the same site adds another row.
    /// A rejected insert is returned as `StorageWriteFailed` and leaves the
    /// table untouched.
    pub fn store_password(&self, site: &str, username: &str, password: &str) -> Result<()> {
        let payload = format_payload(username, password);
        let encrypted = encrypt(self.key.as_bytes(), payload.as_bytes())?;

        self.conn
            .execute(
                "INSERT INTO accounts (site, username, password) VALUES (?1, ?2, ?3)",
                params![site, username, encrypted],
            )
            .map_err(|e| PassVaultError::StorageWriteFailed(e.to_string()))?;

        debug!(site, id = self.conn.last_insert_rowid(), "credential stored");
        Ok(())
    }

    /// Return `true` iff the newest record for `site` whose username is
    /// `username` holds exactly `password`.
    ///
    /// Missing sites, unknown usernames and storage errors all yield
    /// `false`.  Records that fail to decrypt are logged as
    /// `VerificationFailed` and skipped.
    pub fn check_password(&self, site: &str, username: &str, password: &str) -> bool {
        match self.verify(site, username, password) {
            Ok(matched) => {
                debug!(site, matched, "credential checked");
                matched
            }
            Err(e) => {
                warn!(site, error = %e, "credential check failed");
                false
            }
        }
    }

    fn verify(&self, site: &str, username: &str, password: &str) -> Result<bool> {
        for record in self.records_for(site, username)? {
            let plaintext = match decrypt(self.key.as_bytes(), &record.encrypted_payload) {
                Ok(bytes) => Zeroizing::new(bytes),
                Err(e) => {
                    let err = PassVaultError::VerificationFailed(format!("record {}: {e}", record.id));
                    warn!(site, error = %err, "skipping unreadable record");
                    continue;
                }
            };

            let (stored_username, stored_password) = match split_payload(&plaintext) {
                Ok(parts) => parts,
                Err(e) => {
                    warn!(site, record = record.id, error = %e, "skipping unreadable record");
                    continue;
                }
            };

            if stored_username != username {
                continue;
            }

            return Ok(stored_password.as_bytes().ct_eq(password.as_bytes()).into());
        }

        Ok(false)
    }

    /// All rows for `site` and `username`, newest first.
    ///
    /// Only rows whose plaintext `username` column matches are returned, so a
    /// payload split can never hand one user's row to another.
    fn records_for(&self, site: &str, username: &str) -> Result<Vec<CredentialRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, site, username, password
                 FROM accounts
                 WHERE site = ?1 AND username = ?2
                 ORDER BY id DESC",
            )
            .map_err(|e| PassVaultError::StorageUnavailable(format!("query prepare: {e}")))?;

        let rows = stmt
            .query_map(params![site, username], |row| {
                Ok(CredentialRecord {
                    id: row.get(0)?,
                    site: row.get(1)?,
                    username: row.get(2)?,
                    encrypted_payload: row.get(3)?,
                })
            })
            .map_err(|e| PassVaultError::StorageUnavailable(format!("query exec: {e}")))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(
                row.map_err(|e| PassVaultError::StorageUnavailable(format!("row parse: {e}")))?,
            );
        }

        Ok(records)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
