//! `passvault check` — verify a username/password pair for a site.

use crate::cli::output;
use crate::cli::{open_store, read_password, validate_fields, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `check` command.
///
/// A mismatch is returned as `PasswordIncorrect` so the process exits
/// with a non-zero status.
pub fn execute(cli: &Cli, site: &str, username: &str, password: Option<&str>) -> Result<()> {
    let password = read_password(password, &format!("Password for {username}@{site}"))?;
    validate_fields(site, username, &password)?;

    let store = open_store(cli)?;
    if store.check_password(site, username, &password) {
        output::success("Password correct.");
        Ok(())
    } else {
        Err(PassVaultError::PasswordIncorrect)
    }
}
