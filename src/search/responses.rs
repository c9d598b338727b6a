//! Response shapes returned by the search services.
//!
//! Every field of the stored record is copied across unchanged; categorical
//! codes are resolved to their named enumerations.

use crate::cli::types::{Award, GameId, GameType, InjuryStatus, PlayerId, TeamId};
use crate::error::StatsError;
use crate::storage::models::{Injury, Player, TeamDefenseSummary, TeamGame};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGameResponse {
    pub game_id: GameId,
    pub year: String,
    pub date: String,
    pub game_type: GameType,
    pub team_id: TeamId,
    pub opponent: TeamId,
    pub home: bool,
    pub points_scored: i32,
    pub points_allowed: i32,
    pub total_yards: i32,
    pub turnovers: i32,
}

impl TryFrom<TeamGame> for TeamGameResponse {
    type Error = StatsError;

    fn try_from(game: TeamGame) -> Result<Self, Self::Error> {
        Ok(Self {
            game_id: game.game_id,
            year: game.year,
            date: game.date,
            game_type: GameType::from_code(game.game_type)?,
            team_id: game.team_id,
            opponent: game.opponent,
            home: game.home,
            points_scored: game.points_scored,
            points_allowed: game.points_allowed,
            total_yards: game.total_yards,
            turnovers: game.turnovers,
        })
    }
}

impl fmt::Display for TeamGameResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "game {} ({} {}, {}) team {} {} team {}: {}-{}, {} yds, {} TO",
            self.game_id,
            self.year,
            self.date,
            self.game_type,
            self.team_id,
            if self.home { "vs" } else { "@" },
            self.opponent,
            self.points_scored,
            self.points_allowed,
            self.total_yards,
            self.turnovers
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub player_id: PlayerId,
    pub year: String,
    pub name: String,
    pub team_id: TeamId,
    pub position: String,
    pub jersey_number: i32,
    pub age: i32,
    pub games_played: i32,
    pub award: Award,
}

impl TryFrom<Player> for PlayerResponse {
    type Error = StatsError;

    fn try_from(player: Player) -> Result<Self, Self::Error> {
        Ok(Self {
            player_id: player.player_id,
            year: player.year,
            name: player.name,
            team_id: player.team_id,
            position: player.position,
            jersey_number: player.jersey_number,
            age: player.age,
            games_played: player.games_played,
            award: Award::from_code(player.award)?,
        })
    }
}

impl fmt::Display for PlayerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} #{} {} ({}) team {} age {}, {} games, award {}",
            self.player_id,
            self.name,
            self.jersey_number,
            self.position,
            self.year,
            self.team_id,
            self.age,
            self.games_played,
            self.award
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryResponse {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub team_id: TeamId,
    pub year: String,
    pub week: i32,
    pub body_part: String,
    pub status: InjuryStatus,
    pub notes: Option<String>,
}

impl TryFrom<Injury> for InjuryResponse {
    type Error = StatsError;

    fn try_from(injury: Injury) -> Result<Self, Self::Error> {
        Ok(Self {
            player_id: injury.player_id,
            game_id: injury.game_id,
            team_id: injury.team_id,
            year: injury.year,
            week: injury.week,
            body_part: injury.body_part,
            status: InjuryStatus::from_code(injury.status)?,
            notes: injury.notes,
        })
    }
}

impl fmt::Display for InjuryResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "player {} team {} game {} ({} wk {}): {} - {}",
            self.player_id,
            self.team_id,
            self.game_id,
            self.year,
            self.week,
            self.body_part,
            self.status
        )?;
        if let Some(notes) = &self.notes {
            write!(f, " ({})", notes)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDefenseSummaryResponse {
    pub team_id: TeamId,
    pub year: String,
    pub games: i32,
    pub points_allowed: i32,
    pub yards_allowed: i32,
    pub sacks: f64,
    pub interceptions: i32,
    pub fumbles_recovered: i32,
    pub defensive_touchdowns: i32,
}

impl TryFrom<TeamDefenseSummary> for TeamDefenseSummaryResponse {
    type Error = StatsError;

    fn try_from(summary: TeamDefenseSummary) -> Result<Self, Self::Error> {
        Ok(Self {
            team_id: summary.team_id,
            year: summary.year,
            games: summary.games,
            points_allowed: summary.points_allowed,
            yards_allowed: summary.yards_allowed,
            sacks: summary.sacks,
            interceptions: summary.interceptions,
            fumbles_recovered: summary.fumbles_recovered,
            defensive_touchdowns: summary.defensive_touchdowns,
        })
    }
}

impl fmt::Display for TeamDefenseSummaryResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "team {} ({}): {} games, {} pts / {} yds allowed, {:.1} sacks, {} INT, {} FR, {} TD",
            self.team_id,
            self.year,
            self.games,
            self.points_allowed,
            self.yards_allowed,
            self.sacks,
            self.interceptions,
            self.fumbles_recovered,
            self.defensive_touchdowns
        )
    }
}
