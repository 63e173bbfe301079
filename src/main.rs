use clap::Parser;
use passvault::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; user-facing output stays in cli::output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PASSVAULT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Store {
            ref site,
            ref username,
            ref password,
        } => passvault::cli::commands::store::execute(&cli, site, username, password.as_deref()),
        Commands::Check {
            ref site,
            ref username,
            ref password,
        } => passvault::cli::commands::check::execute(&cli, site, username, password.as_deref()),
        Commands::Generate { length } => passvault::cli::commands::generate::execute(&cli, length),
        Commands::Completions { shell } => passvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
