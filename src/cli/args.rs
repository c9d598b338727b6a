//! Per-entity filter arguments.
//!
//! Every flag is optional; an omitted flag leaves that column unconstrained.

use super::types::{Award, GameId, GameType, InjuryStatus, PlayerId, TeamId};
use crate::search::{
    InjurySearchRequest, PlayerSearchRequest, TeamDefenseSummarySearchRequest,
    TeamGameSearchRequest,
};
use clap::Args;

/// Filters for team game lines
#[derive(Debug, Args)]
pub struct TeamGameFilters {
    /// Game ID.
    #[clap(long, short)]
    pub game_id: Option<GameId>,

    /// Season year (e.g. 2000).
    #[clap(long, short)]
    pub year: Option<String>,

    /// Game date, exactly as stored (e.g. 2000-09-03).
    #[clap(long, short)]
    pub date: Option<String>,

    /// Season phase.
    #[clap(long = "type", value_enum)]
    pub game_type: Option<GameType>,

    /// Team ID.
    #[clap(long, short)]
    pub team_id: Option<TeamId>,

    /// Opponent team ID.
    #[clap(long, short)]
    pub opponent: Option<TeamId>,
}

impl From<TeamGameFilters> for TeamGameSearchRequest {
    fn from(filters: TeamGameFilters) -> Self {
        Self {
            game_id: filters.game_id,
            year: filters.year,
            date: filters.date,
            game_type: filters.game_type,
            team_id: filters.team_id,
            opponent: filters.opponent,
        }
    }
}

/// Filters for player season lines
#[derive(Debug, Args)]
pub struct PlayerFilters {
    /// Player ID.
    #[clap(long, short)]
    pub player_id: Option<PlayerId>,

    /// Season year (e.g. 2000).
    #[clap(long, short)]
    pub year: Option<String>,

    /// Full player name (exact match).
    #[clap(long, short)]
    pub name: Option<String>,

    /// Team ID.
    #[clap(long, short)]
    pub team_id: Option<TeamId>,

    /// Position abbreviation, exactly as stored (e.g. QB).
    #[clap(long)]
    pub position: Option<String>,

    /// Season award.
    #[clap(long, value_enum)]
    pub award: Option<Award>,
}

impl From<PlayerFilters> for PlayerSearchRequest {
    fn from(filters: PlayerFilters) -> Self {
        Self {
            player_id: filters.player_id,
            year: filters.year,
            name: filters.name,
            team_id: filters.team_id,
            position: filters.position,
            award: filters.award,
        }
    }
}

/// Filters for injury reports
#[derive(Debug, Args)]
pub struct InjuryFilters {
    /// Player ID.
    #[clap(long, short)]
    pub player_id: Option<PlayerId>,

    /// Game ID.
    #[clap(long, short)]
    pub game_id: Option<GameId>,

    /// Team ID.
    #[clap(long, short)]
    pub team_id: Option<TeamId>,

    /// Season year (e.g. 2000).
    #[clap(long, short)]
    pub year: Option<String>,

    /// Week of the season.
    #[clap(long, short)]
    pub week: Option<i32>,

    /// Reported status.
    #[clap(long, value_enum)]
    pub status: Option<InjuryStatus>,
}

impl From<InjuryFilters> for InjurySearchRequest {
    fn from(filters: InjuryFilters) -> Self {
        Self {
            player_id: filters.player_id,
            game_id: filters.game_id,
            team_id: filters.team_id,
            year: filters.year,
            week: filters.week,
            status: filters.status,
        }
    }
}

/// Filters for team defense season summaries
#[derive(Debug, Args)]
pub struct TeamDefenseFilters {
    /// Team ID.
    #[clap(long, short)]
    pub team_id: Option<TeamId>,

    /// Season year (e.g. 2000).
    #[clap(long, short)]
    pub year: Option<String>,
}

impl From<TeamDefenseFilters> for TeamDefenseSummarySearchRequest {
    fn from(filters: TeamDefenseFilters) -> Self {
        Self {
            team_id: filters.team_id,
            year: filters.year,
        }
    }
}
