use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{PassVaultError, Result};

/// Shortest password `generate` will produce.
pub const MIN_GENERATED_LENGTH: usize = 4;

/// Longest password `generate` will produce.
pub const MAX_GENERATED_LENGTH: usize = 128;

/// Project-level configuration, loaded from `.passvault.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory (relative to project root) holding the database and keyfile.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// File name of the credential database inside `vault_dir`.
    #[serde(default = "default_db_file")]
    pub db_file: String,

    /// File name of the master keyfile inside `vault_dir`.
    #[serde(default = "default_keyfile")]
    pub keyfile: String,

    /// Length of passwords produced by `passvault generate`.
    #[serde(default = "default_generated_password_length")]
    pub generated_password_length: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".passvault".to_string()
}

fn default_db_file() -> String {
    "passwords.db".to_string()
}

fn default_keyfile() -> String {
    "master.key".to_string()
}

fn default_generated_password_length() -> usize {
    12
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            db_file: default_db_file(),
            keyfile: default_keyfile(),
            generated_password_length: default_generated_password_length(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".passvault.toml";

    /// Load settings from `<project_dir>/.passvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        let len = self.generated_password_length;
        if !(MIN_GENERATED_LENGTH..=MAX_GENERATED_LENGTH).contains(&len) {
            return Err(PassVaultError::ConfigError(format!(
                "generated_password_length must be between {MIN_GENERATED_LENGTH} and {MAX_GENERATED_LENGTH} (got {len})"
            )));
        }
        Ok(())
    }

    /// Full path to the credential database.
    ///
    /// Example: `project_dir/.passvault/passwords.db`
    pub fn db_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_dir).join(&self.db_file)
    }

    /// Full path to the master keyfile.
    ///
    /// Example: `project_dir/.passvault/master.key`
    pub fn keyfile_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_dir).join(&self.keyfile)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
