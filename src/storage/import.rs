//! Bulk loading of statistics from JSON datasets

use super::{
    models::{Injury, Player, TeamDefenseSummary, TeamGame},
    queries::{delete_all_rows, insert_records},
    schema::StatsDatabase,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::info;

/// A JSON document holding records for any subset of the tables.
///
/// ```json
/// {
///   "team_games": [{ "game_id": 1, "year": "2000", ... }],
///   "players": []
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsDataset {
    #[serde(default)]
    pub injuries: Vec<Injury>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub team_games: Vec<TeamGame>,
    #[serde(default)]
    pub team_defense_summaries: Vec<TeamDefenseSummary>,
}

impl StatsDataset {
    /// Read and parse a dataset file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Number of records written per table by an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub injuries: usize,
    pub players: usize,
    pub team_games: usize,
    pub team_defense_summaries: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.injuries + self.players + self.team_games + self.team_defense_summaries
    }
}

impl StatsDatabase {
    /// Upsert every record in the dataset, optionally emptying the tables first.
    ///
    /// The clear and all inserts run in one transaction: on error the
    /// database is left exactly as it was before the call.
    pub fn import_dataset(&mut self, dataset: &StatsDataset, clear: bool) -> Result<ImportSummary> {
        let tx = self.conn.transaction()?;
        if clear {
            delete_all_rows(&tx)?;
        }

        let summary = ImportSummary {
            injuries: insert_records(&tx, &dataset.injuries)?,
            players: insert_records(&tx, &dataset.players)?,
            team_games: insert_records(&tx, &dataset.team_games)?,
            team_defense_summaries: insert_records(&tx, &dataset.team_defense_summaries)?,
        };
        tx.commit()?;

        info!(
            injuries = summary.injuries,
            players = summary.players,
            team_games = summary.team_games,
            team_defense_summaries = summary.team_defense_summaries,
            "imported dataset"
        );
        Ok(summary)
    }
}
