//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::{key_from_env, load_keyfile, MasterKey};
use crate::errors::{PassVaultError, Result};
use crate::store::record::PAYLOAD_SEPARATOR;
use crate::store::CredentialStore;

/// PassVault CLI: encrypted per-site credential store.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Encrypted per-site credential store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the database and keyfile (default: .passvault)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,

    /// Path to the master keyfile (default: <vault_dir>/master.key)
    #[arg(long, global = true)]
    pub keyfile: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create the vault directory, master keyfile and credential database
    Init,

    /// Store a site's username and password
    Store {
        /// Site identifier (e.g. github.com)
        site: String,
        /// Username for the site
        username: String,
        /// Password (omit for interactive prompt or piped stdin)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Check a username and password against the stored record
    Check {
        /// Site identifier
        site: String,
        /// Username to check
        username: String,
        /// Password (omit for interactive prompt or piped stdin)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Generate a random password
    Generate {
        /// Number of characters (default: 12, or generated_password_length)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolved on-disk locations for the current invocation.
#[derive(Debug, Clone)]
pub struct VaultPaths {
    /// Directory holding the database and (by default) the keyfile.
    pub vault_dir: PathBuf,
    /// Credential database file.
    pub db: PathBuf,
    /// Master keyfile.
    pub keyfile: PathBuf,
}

/// Load `.passvault.toml` from the working directory and apply CLI overrides.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    let mut settings = Settings::load(&cwd)?;
    if let Some(dir) = &cli.vault_dir {
        settings.vault_dir = dir.clone();
    }
    Ok(settings)
}

/// Build the database and keyfile paths from settings and CLI arguments.
///
/// `--keyfile` wins over the configured keyfile name.
pub fn vault_paths(cli: &Cli) -> Result<VaultPaths> {
    let cwd = std::env::current_dir()?;
    let settings = load_settings(cli)?;
    let keyfile = match &cli.keyfile {
        Some(path) => cwd.join(path),
        None => settings.keyfile_path(&cwd),
    };
    Ok(VaultPaths {
        vault_dir: cwd.join(&settings.vault_dir),
        db: settings.db_path(&cwd),
        keyfile,
    })
}

/// Get the master key, trying in order:
/// 1. `PASSVAULT_KEY` environment variable (base64)
/// 2. The keyfile
pub fn load_master_key(paths: &VaultPaths) -> Result<MasterKey> {
    if let Some(key) = key_from_env()? {
        return Ok(key);
    }
    load_keyfile(&paths.keyfile)
}

/// Resolve paths, load the key and open the credential store.
pub fn open_store(cli: &Cli) -> Result<CredentialStore> {
    let paths = vault_paths(cli)?;
    if !paths.vault_dir.exists() {
        output::tip("Run `passvault init` to create a vault.");
        return Err(PassVaultError::StorageUnavailable(format!(
            "vault directory {} does not exist",
            paths.vault_dir.display()
        )));
    }
    let key = load_master_key(&paths)?;
    CredentialStore::open(key, &paths.db)
}

/// Get the password for `store`/`check`, trying in order:
/// 1. The `--password` flag (warns about shell history)
/// 2. Piped stdin
/// 3. Interactive hidden prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn read_password(flag: Option<&str>, prompt: &str) -> Result<Zeroizing<String>> {
    if let Some(pw) = flag {
        output::warning("Password provided on command line — it may appear in shell history.");
        return Ok(Zeroizing::new(pw.to_string()));
    }

    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim_end_matches(['\r', '\n']);
        return Ok(Zeroizing::new(trimmed.to_string()));
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Reject empty site, username or password, and usernames containing the
/// payload separator, before touching the store.
pub fn validate_fields(site: &str, username: &str, password: &str) -> Result<()> {
    for (field, value) in [("site", site), ("username", username), ("password", password)] {
        if value.is_empty() {
            return Err(PassVaultError::CommandFailed(format!(
                "{field} cannot be empty — please fill in every field"
            )));
        }
    }
    if username.contains(PAYLOAD_SEPARATOR) {
        return Err(PassVaultError::CommandFailed(format!(
            "username cannot contain '{PAYLOAD_SEPARATOR}'"
        )));
    }
    Ok(())
}
