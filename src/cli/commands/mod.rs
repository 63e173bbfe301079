//! Command implementations, one module per subcommand.

pub mod check;
pub mod completions;
pub mod generate;
pub mod init;
pub mod store;
