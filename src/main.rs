//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use stats_search::{
    cli::{Commands, StatsSearch},
    commands::{import::handle_import, open_database, search::handle_search},
    config::Config,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> Result<()> {
    let app = StatsSearch::parse();

    // RUST_LOG wins over --verbose
    let default_level = if app.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve(app.db);
    tracing::debug!(database = %config.database_path.display(), "resolved configuration");

    let mut db = open_database(&config)?;

    match app.command {
        Commands::Import { file, clear } => {
            handle_import(&mut db, &file, clear)?;
        }
        Commands::Search { cmd } => {
            let stdout = std::io::stdout();
            handle_search(&db, cmd, &mut stdout.lock())?;
        }
    }

    Ok(())
}
