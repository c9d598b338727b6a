//! Data models for the storage layer
//!
//! Each record mirrors one row of its table. Categorical fields keep their
//! persisted integer code; they are resolved to named enumerations only when
//! a record is turned into a response.

use crate::cli::types::{GameId, PlayerId, TeamId};
use crate::error::StatsError;
use crate::search::{
    InjuryResponse, InjurySearchRequest, PlayerResponse, PlayerSearchRequest, SearchRequest,
    TeamDefenseSummaryResponse, TeamDefenseSummarySearchRequest, TeamGameResponse,
    TeamGameSearchRequest,
};
use rusqlite::{types::Value, Row};
use serde::{Deserialize, Serialize};

/// A record type backed by a single table.
///
/// `COLUMNS` lists the table's columns in the order `from_row` reads them and
/// `to_values` binds them.
pub trait Entity: Sized {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    /// Optional-field search request over this table.
    type Request: SearchRequest;

    /// Externally exposed representation of a matching record.
    type Response: TryFrom<Self, Error = StatsError> + Serialize;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    fn to_values(&self) -> Vec<Value>;
}

/// One team's line for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGame {
    pub game_id: GameId,
    pub year: String,
    pub date: String,
    pub game_type: i32,
    pub team_id: TeamId,
    pub opponent: TeamId,
    pub home: bool,
    pub points_scored: i32,
    pub points_allowed: i32,
    pub total_yards: i32,
    pub turnovers: i32,
}

impl Entity for TeamGame {
    const TABLE: &'static str = "team_games";
    const COLUMNS: &'static [&'static str] = &[
        "game_id",
        "year",
        "date",
        "game_type",
        "team_id",
        "opponent",
        "home",
        "points_scored",
        "points_allowed",
        "total_yards",
        "turnovers",
    ];

    type Request = TeamGameSearchRequest;
    type Response = TeamGameResponse;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(TeamGame {
            game_id: GameId::new(row.get(0)?),
            year: row.get(1)?,
            date: row.get(2)?,
            game_type: row.get(3)?,
            team_id: TeamId::new(row.get(4)?),
            opponent: TeamId::new(row.get(5)?),
            home: row.get(6)?,
            points_scored: row.get(7)?,
            points_allowed: row.get(8)?,
            total_yards: row.get(9)?,
            turnovers: row.get(10)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.game_id.into(),
            Value::Text(self.year.clone()),
            Value::Text(self.date.clone()),
            self.game_type.into(),
            self.team_id.into(),
            self.opponent.into(),
            self.home.into(),
            self.points_scored.into(),
            self.points_allowed.into(),
            self.total_yards.into(),
            self.turnovers.into(),
        ]
    }
}

/// A player's season line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub year: String,
    pub name: String,
    pub team_id: TeamId,
    pub position: String,
    pub jersey_number: i32,
    pub age: i32,
    pub games_played: i32,
    pub award: i32,
}

impl Entity for Player {
    const TABLE: &'static str = "players";
    const COLUMNS: &'static [&'static str] = &[
        "player_id",
        "year",
        "name",
        "team_id",
        "position",
        "jersey_number",
        "age",
        "games_played",
        "award",
    ];

    type Request = PlayerSearchRequest;
    type Response = PlayerResponse;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Player {
            player_id: PlayerId::new(row.get(0)?),
            year: row.get(1)?,
            name: row.get(2)?,
            team_id: TeamId::new(row.get(3)?),
            position: row.get(4)?,
            jersey_number: row.get(5)?,
            age: row.get(6)?,
            games_played: row.get(7)?,
            award: row.get(8)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.player_id.into(),
            Value::Text(self.year.clone()),
            Value::Text(self.name.clone()),
            self.team_id.into(),
            Value::Text(self.position.clone()),
            self.jersey_number.into(),
            self.age.into(),
            self.games_played.into(),
            self.award.into(),
        ]
    }
}

/// An injury report for a player ahead of a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Injury {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub team_id: TeamId,
    pub year: String,
    pub week: i32,
    pub body_part: String,
    pub status: i32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Entity for Injury {
    const TABLE: &'static str = "injuries";
    const COLUMNS: &'static [&'static str] = &[
        "player_id",
        "game_id",
        "team_id",
        "year",
        "week",
        "body_part",
        "status",
        "notes",
    ];

    type Request = InjurySearchRequest;
    type Response = InjuryResponse;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Injury {
            player_id: PlayerId::new(row.get(0)?),
            game_id: GameId::new(row.get(1)?),
            team_id: TeamId::new(row.get(2)?),
            year: row.get(3)?,
            week: row.get(4)?,
            body_part: row.get(5)?,
            status: row.get(6)?,
            notes: row.get(7)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.player_id.into(),
            self.game_id.into(),
            self.team_id.into(),
            Value::Text(self.year.clone()),
            self.week.into(),
            Value::Text(self.body_part.clone()),
            self.status.into(),
            self.notes.clone().map_or(Value::Null, Value::Text),
        ]
    }
}

/// Season totals for a team's defense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDefenseSummary {
    pub team_id: TeamId,
    pub year: String,
    pub games: i32,
    pub points_allowed: i32,
    pub yards_allowed: i32,
    pub sacks: f64, // half sacks are credited
    pub interceptions: i32,
    pub fumbles_recovered: i32,
    pub defensive_touchdowns: i32,
}

impl Entity for TeamDefenseSummary {
    const TABLE: &'static str = "team_defense_summaries";
    const COLUMNS: &'static [&'static str] = &[
        "team_id",
        "year",
        "games",
        "points_allowed",
        "yards_allowed",
        "sacks",
        "interceptions",
        "fumbles_recovered",
        "defensive_touchdowns",
    ];

    type Request = TeamDefenseSummarySearchRequest;
    type Response = TeamDefenseSummaryResponse;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(TeamDefenseSummary {
            team_id: TeamId::new(row.get(0)?),
            year: row.get(1)?,
            games: row.get(2)?,
            points_allowed: row.get(3)?,
            yards_allowed: row.get(4)?,
            sacks: row.get(5)?,
            interceptions: row.get(6)?,
            fumbles_recovered: row.get(7)?,
            defensive_touchdowns: row.get(8)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            self.team_id.into(),
            Value::Text(self.year.clone()),
            self.games.into(),
            self.points_allowed.into(),
            self.yards_allowed.into(),
            self.sacks.into(),
            self.interceptions.into(),
            self.fumbles_recovered.into(),
            self.defensive_touchdowns.into(),
        ]
    }
}
