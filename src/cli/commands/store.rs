//! `passvault store` — encrypt and append a site's credentials.

use crate::cli::output;
use crate::cli::{open_store, read_password, validate_fields, Cli};
use crate::errors::Result;

/// Execute the `store` command.
pub fn execute(cli: &Cli, site: &str, username: &str, password: Option<&str>) -> Result<()> {
    let password = read_password(password, &format!("Password for {username}@{site}"))?;
    validate_fields(site, username, &password)?;

    let store = open_store(cli)?;
    store.store_password(site, username, &password)?;

    output::success(&format!("Password stored for {username}@{site}."));
    output::tip("Run `passvault check <SITE> <USERNAME>` to verify it.");

    Ok(())
}
