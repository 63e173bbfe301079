use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Cipher errors ---
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Invalid ciphertext length: {0} bytes")]
    InvalidCiphertextLength(usize),

    #[error("Invalid padding — wrong key or corrupted data")]
    InvalidPadding,

    // --- Storage errors ---
    #[error("Credential database unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Failed to write credential: {0}")]
    StorageWriteFailed(String),

    #[error("Stored credential could not be verified: {0}")]
    VerificationFailed(String),

    // --- Key provisioning errors ---
    #[error("Keyfile error: {0}")]
    KeyfileError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Password incorrect.")]
    PasswordIncorrect,
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
