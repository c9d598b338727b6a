//! CLI argument definitions and parsing.

pub mod args;
pub mod types;

use args::{InjuryFilters, PlayerFilters, TeamDefenseFilters, TeamGameFilters};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "stats-search", about = "Search sports statistics stored in SQLite")]
pub struct StatsSearch {
    /// Database file (or set `STATS_SEARCH_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log generated queries and import progress.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load records from a JSON dataset into the database.
    Import {
        /// Dataset file with `injuries`, `players`, `team_games` and/or
        /// `team_defense_summaries` arrays.
        file: PathBuf,

        /// Clear all data from the database before importing.
        #[clap(long)]
        clear: bool,
    },

    /// Search stored records. Every filter is optional and filters are ANDed.
    Search {
        #[clap(subcommand)]
        cmd: SearchCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum SearchCmd {
    /// Team game lines (one row per team per game).
    TeamGames {
        #[clap(flatten)]
        filters: TeamGameFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Player season lines.
    Players {
        #[clap(flatten)]
        filters: PlayerFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Injury reports.
    Injuries {
        #[clap(flatten)]
        filters: InjuryFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Team defense season summaries.
    TeamDefense {
        #[clap(flatten)]
        filters: TeamDefenseFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
