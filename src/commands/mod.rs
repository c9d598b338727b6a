//! Command implementations for the stats-search CLI

pub mod import;
pub mod search;


use crate::{config::Config, storage::StatsDatabase};
use anyhow::{Context, Result};

/// Open the configured database, creating it and its tables if needed
pub fn open_database(config: &Config) -> Result<StatsDatabase> {
    StatsDatabase::open(&config.database_path).with_context(|| {
        format!(
            "failed to open database at {}",
            config.database_path.display()
        )
    })
}
