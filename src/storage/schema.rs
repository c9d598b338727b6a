//! Database schema and connection management

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Database connection manager for statistics tables
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open (or create) the database file at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening statistics database");
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create an in-memory database, mostly for tests and one-off imports
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team_games (
                game_id INTEGER NOT NULL,
                year TEXT NOT NULL,
                date TEXT NOT NULL,
                game_type INTEGER NOT NULL,
                team_id INTEGER NOT NULL,
                opponent INTEGER NOT NULL,
                home INTEGER NOT NULL,
                points_scored INTEGER NOT NULL,
                points_allowed INTEGER NOT NULL,
                total_yards INTEGER NOT NULL,
                turnovers INTEGER NOT NULL,
                PRIMARY KEY (game_id, team_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id INTEGER NOT NULL,
                year TEXT NOT NULL,
                name TEXT NOT NULL,
                team_id INTEGER NOT NULL,
                position TEXT NOT NULL,
                jersey_number INTEGER NOT NULL,
                age INTEGER NOT NULL,
                games_played INTEGER NOT NULL,
                award INTEGER NOT NULL,
                PRIMARY KEY (player_id, year)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS injuries (
                player_id INTEGER NOT NULL,
                game_id INTEGER NOT NULL,
                team_id INTEGER NOT NULL,
                year TEXT NOT NULL,
                week INTEGER NOT NULL,
                body_part TEXT NOT NULL,
                status INTEGER NOT NULL,
                notes TEXT,
                PRIMARY KEY (player_id, game_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team_defense_summaries (
                team_id INTEGER NOT NULL,
                year TEXT NOT NULL,
                games INTEGER NOT NULL,
                points_allowed INTEGER NOT NULL,
                yards_allowed INTEGER NOT NULL,
                sacks REAL NOT NULL,
                interceptions INTEGER NOT NULL,
                fumbles_recovered INTEGER NOT NULL,
                defensive_touchdowns INTEGER NOT NULL,
                PRIMARY KEY (team_id, year)
            )",
            [],
        )?;

        // Year is the most common filter across every table
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_team_games_year ON team_games(year)",
            [],
        )?;
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_year ON players(year)",
            [],
        )?;
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_injuries_year_week ON injuries(year, week)",
            [],
        )?;

        Ok(())
    }
}
