//! `passvault generate` — print a random password.

use rand::Rng;

use crate::cli::{load_settings, Cli};
use crate::config::settings::{MAX_GENERATED_LENGTH, MIN_GENERATED_LENGTH};
use crate::errors::{PassVaultError, Result};

/// ASCII letters, digits and punctuation.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Execute the `generate` command.
pub fn execute(cli: &Cli, length: Option<usize>) -> Result<()> {
    let length = match length {
        Some(n) => n,
        None => load_settings(cli)?.generated_password_length,
    };
    println!("{}", generate_password(length)?);
    Ok(())
}

/// Build a random password of `length` characters from `CHARSET`.
pub fn generate_password(length: usize) -> Result<String> {
    if !(MIN_GENERATED_LENGTH..=MAX_GENERATED_LENGTH).contains(&length) {
        return Err(PassVaultError::CommandFailed(format!(
            "length must be between {MIN_GENERATED_LENGTH} and {MAX_GENERATED_LENGTH}"
        )));
    }

    let mut rng = rand::rng();
    Ok((0..length)
        .map(|_| char::from(CHARSET[rng.random_range(0..CHARSET.len())]))
        .collect())
}
