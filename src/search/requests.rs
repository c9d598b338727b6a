//! Search requests with optional filter fields.
//!
//! Every searchable field is an `Option`. `None` means "do not filter on this
//! field"; it is never compared as a zero or empty default.

use super::filter::Filter;
use crate::cli::types::{Award, GameId, GameType, InjuryStatus, PlayerId, TeamId};
use serde::{Deserialize, Serialize};

/// A request that knows how to turn its set fields into a [`Filter`].
pub trait SearchRequest {
    fn filter(&self) -> Filter;
}

/// Criteria for `team_games`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGameSearchRequest {
    pub game_id: Option<GameId>,
    pub year: Option<String>,
    pub date: Option<String>,
    pub game_type: Option<GameType>,
    pub team_id: Option<TeamId>,
    pub opponent: Option<TeamId>,
}

impl TeamGameSearchRequest {
    pub fn with_game_id(mut self, game_id: GameId) -> Self {
        self.game_id = Some(game_id);
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_game_type(mut self, game_type: GameType) -> Self {
        self.game_type = Some(game_type);
        self
    }

    pub fn with_team_id(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_opponent(mut self, opponent: TeamId) -> Self {
        self.opponent = Some(opponent);
        self
    }
}

impl SearchRequest for TeamGameSearchRequest {
    fn filter(&self) -> Filter {
        Filter::new()
            .eq("game_id", self.game_id)
            .eq("year", self.year.clone())
            .eq("date", self.date.clone())
            .eq("game_type", self.game_type.map(|t| t.code()))
            .eq("team_id", self.team_id)
            .eq("opponent", self.opponent)
    }
}

/// Criteria for `players`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSearchRequest {
    pub player_id: Option<PlayerId>,
    pub year: Option<String>,
    pub name: Option<String>,
    pub team_id: Option<TeamId>,
    pub position: Option<String>,
    pub award: Option<Award>,
}

impl PlayerSearchRequest {
    pub fn with_player_id(mut self, player_id: PlayerId) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_team_id(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_award(mut self, award: Award) -> Self {
        self.award = Some(award);
        self
    }
}

impl SearchRequest for PlayerSearchRequest {
    fn filter(&self) -> Filter {
        Filter::new()
            .eq("player_id", self.player_id)
            .eq("year", self.year.clone())
            .eq("name", self.name.clone())
            .eq("team_id", self.team_id)
            .eq("position", self.position.clone())
            .eq("award", self.award.map(|a| a.code()))
    }
}

/// Criteria for `injuries`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjurySearchRequest {
    pub player_id: Option<PlayerId>,
    pub game_id: Option<GameId>,
    pub team_id: Option<TeamId>,
    pub year: Option<String>,
    pub week: Option<i32>,
    pub status: Option<InjuryStatus>,
}

impl InjurySearchRequest {
    pub fn with_player_id(mut self, player_id: PlayerId) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn with_game_id(mut self, game_id: GameId) -> Self {
        self.game_id = Some(game_id);
        self
    }

    pub fn with_team_id(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_week(mut self, week: i32) -> Self {
        self.week = Some(week);
        self
    }

    pub fn with_status(mut self, status: InjuryStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl SearchRequest for InjurySearchRequest {
    fn filter(&self) -> Filter {
        Filter::new()
            .eq("player_id", self.player_id)
            .eq("game_id", self.game_id)
            .eq("team_id", self.team_id)
            .eq("year", self.year.clone())
            .eq("week", self.week)
            .eq("status", self.status.map(|s| s.code()))
    }
}

/// Criteria for `team_defense_summaries`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDefenseSummarySearchRequest {
    pub team_id: Option<TeamId>,
    pub year: Option<String>,
}

impl TeamDefenseSummarySearchRequest {
    pub fn with_team_id(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }
}

impl SearchRequest for TeamDefenseSummarySearchRequest {
    fn filter(&self) -> Filter {
        Filter::new()
            .eq("team_id", self.team_id)
            .eq("year", self.year.clone())
    }
}
