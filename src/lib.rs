//! PassVault — a local store of per-site credentials encrypted under a
//! single master key.
//!
//! The core is two layers:
//! - `crypto`: AES-256-CBC with PKCS#7 padding and a random IV per call.
//! - `store`: an append-only SQLite table of encrypted credential rows
//!   with `store_password` / `check_password` operations.
//!
//! `cli` and `config` are the command-line front end around them.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod store;
