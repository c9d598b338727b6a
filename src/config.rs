//! Runtime configuration
//!
//! The database location is resolved with the following precedence:
//! 1. `--db <PATH>` on the command line
//! 2. `STATS_SEARCH_DB` environment variable
//! 3. `<data dir>/stats-search/stats.db` (platform data directory)
//! 4. `./stats.db` when no data directory can be determined

use std::path::PathBuf;

use crate::DATABASE_ENV_VAR;

const APP_DIR: &str = "stats-search";
const DATABASE_FILE: &str = "stats.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
}

impl Config {
    /// Resolve configuration from an optional CLI override and the environment
    pub fn resolve(db_flag: Option<PathBuf>) -> Self {
        Self::resolve_with(db_flag, std::env::var(DATABASE_ENV_VAR).ok())
    }

    pub(crate) fn resolve_with(db_flag: Option<PathBuf>, env_value: Option<String>) -> Self {
        let database_path = db_flag
            .or_else(|| {
                env_value
                    .filter(|value| !value.trim().is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(default_database_path);

        Self { database_path }
    }
}

/// Default database path under the platform data directory
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(DATABASE_FILE))
        .unwrap_or_else(|| PathBuf::from(DATABASE_FILE))
}
