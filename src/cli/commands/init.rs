//! `passvault init` — create the vault directory, keyfile and database.

use std::fs;

use crate::cli::output;
use crate::cli::{vault_paths, Cli};
use crate::crypto::{generate_keyfile, key_from_env};
use crate::errors::{PassVaultError, Result};
use crate::store::CredentialStore;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let paths = vault_paths(cli)?;

    // 1. Create the vault directory if it doesn't exist.
    if !paths.vault_dir.exists() {
        fs::create_dir_all(&paths.vault_dir)?;
        output::info(&format!(
            "Created vault directory: {}",
            paths.vault_dir.display()
        ));
    }

    // 2. Obtain the master key: the environment wins, otherwise a new keyfile.
    let key = match key_from_env()? {
        Some(key) => {
            output::info("Using master key from PASSVAULT_KEY — no keyfile written.");
            key
        }
        None => {
            if paths.keyfile.exists() {
                output::tip("Use `passvault store` to add credentials to the existing vault.");
                return Err(PassVaultError::KeyfileError(format!(
                    "vault already initialized — keyfile exists at {}",
                    paths.keyfile.display()
                )));
            }
            let key = generate_keyfile(&paths.keyfile)?;
            output::success(&format!(
                "Master keyfile written to {}",
                paths.keyfile.display()
            ));
            output::warning("Back up this keyfile — stored passwords cannot be checked without it.");
            key
        }
    };

    // 3. Create the database and its table.
    let store = CredentialStore::open(key, &paths.db)?;
    output::success(&format!(
        "Credential database ready at {}",
        store.path().display()
    ));

    output::tip("Run `passvault store <SITE> <USERNAME>` to save a password.");
    output::tip("Run `passvault check <SITE> <USERNAME>` to verify one.");

    Ok(())
}
