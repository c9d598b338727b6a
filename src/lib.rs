//! Sports Statistics Search Library
//!
//! Multi-field search over sports statistics (injuries, players, team games
//! and team defense summaries) stored in SQLite.
//!
//! ## Features
//!
//! - **Optional-field requests**: every searchable field is an `Option`; unset
//!   fields impose no constraint
//! - **Conjunctive filtering**: set fields become one `WHERE a = ? AND b = ?` query
//! - **Typed categories**: stored integer codes resolve to `GameType`,
//!   `InjuryStatus` and `Award` in responses
//! - **Bulk import**: load JSON datasets into the database
//!
//! ## Quick Start
//!
//! ```rust
//! use stats_search::{search::TeamGameSearchRequest, storage::*, GameId, TeamId};
//!
//! # fn example() -> stats_search::Result<()> {
//! let mut db = StatsDatabase::new_in_memory()?;
//! db.upsert(&TeamGame {
//!     game_id: GameId::new(1),
//!     year: "2000".to_string(),
//!     date: "2000-09-03".to_string(),
//!     game_type: 1,
//!     team_id: TeamId::new(1),
//!     opponent: TeamId::new(2),
//!     home: true,
//!     points_scored: 21,
//!     points_allowed: 14,
//!     total_yards: 342,
//!     turnovers: 1,
//! })?;
//!
//! let request = TeamGameSearchRequest::default()
//!     .with_game_id(GameId::new(1))
//!     .with_year("2000");
//! let games = db.fetch_team_games(&request)?;
//! assert_eq!(games.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file without passing `--db` every time:
//! ```bash
//! export STATS_SEARCH_DB=/var/lib/stats/stats.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod search;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Award, GameId, GameType, InjuryStatus, PlayerId, TeamId};
pub use error::{Result, StatsError};
pub use search::SearchService;

pub const DATABASE_ENV_VAR: &str = "STATS_SEARCH_DB";
