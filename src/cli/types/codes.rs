//! Categorical codes persisted as integers.
//!
//! The database stores these fields as small integer codes. Requests and
//! responses use the named enumerations below; the code is bound directly
//! when filtering and resolved back to a name only when building a response.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phase of the season a game was played in.
///
/// # Examples
///
/// ```rust
/// use stats_search::GameType;
///
/// assert_eq!(GameType::RegularSeason.code(), 1);
/// assert_eq!(GameType::from_code(2).unwrap(), GameType::Postseason);
/// assert_eq!(GameType::Preseason.to_string(), "PRESEASON");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    Preseason,
    RegularSeason,
    Postseason,
}

impl GameType {
    /// Persisted integer code.
    pub fn code(&self) -> i32 {
        match self {
            GameType::Preseason => 0,
            GameType::RegularSeason => 1,
            GameType::Postseason => 2,
        }
    }

    /// Resolve a persisted code.
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(GameType::Preseason),
            1 => Ok(GameType::RegularSeason),
            2 => Ok(GameType::Postseason),
            _ => Err(StatsError::UnknownCode {
                kind: "game type",
                code,
            }),
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameType::Preseason => "PRESEASON",
            GameType::RegularSeason => "REGULAR_SEASON",
            GameType::Postseason => "POSTSEASON",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for GameType {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "PRESEASON" => Ok(GameType::Preseason),
            "REGULAR_SEASON" => Ok(GameType::RegularSeason),
            "POSTSEASON" => Ok(GameType::Postseason),
            _ => Err(StatsError::InvalidCategory {
                kind: "game type",
                value: s.to_string(),
            }),
        }
    }
}

/// Reported availability of an injured player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InjuryStatus {
    Active,
    Questionable,
    Doubtful,
    Out,
    InjuredReserve,
}

impl InjuryStatus {
    pub fn code(&self) -> i32 {
        match self {
            InjuryStatus::Active => 0,
            InjuryStatus::Questionable => 1,
            InjuryStatus::Doubtful => 2,
            InjuryStatus::Out => 3,
            InjuryStatus::InjuredReserve => 4,
        }
    }

    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(InjuryStatus::Active),
            1 => Ok(InjuryStatus::Questionable),
            2 => Ok(InjuryStatus::Doubtful),
            3 => Ok(InjuryStatus::Out),
            4 => Ok(InjuryStatus::InjuredReserve),
            _ => Err(StatsError::UnknownCode {
                kind: "injury status",
                code,
            }),
        }
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InjuryStatus::Active => "ACTIVE",
            InjuryStatus::Questionable => "QUESTIONABLE",
            InjuryStatus::Doubtful => "DOUBTFUL",
            InjuryStatus::Out => "OUT",
            InjuryStatus::InjuredReserve => "INJURED_RESERVE",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for InjuryStatus {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "ACTIVE" => Ok(InjuryStatus::Active),
            "QUESTIONABLE" => Ok(InjuryStatus::Questionable),
            "DOUBTFUL" => Ok(InjuryStatus::Doubtful),
            "OUT" => Ok(InjuryStatus::Out),
            "INJURED_RESERVE" | "IR" => Ok(InjuryStatus::InjuredReserve),
            _ => Err(StatsError::InvalidCategory {
                kind: "injury status",
                value: s.to_string(),
            }),
        }
    }
}

/// Season honor recorded on a player row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Award {
    #[serde(rename = "NONE")]
    #[value(name = "none")]
    NoAward,
    ProBowl,
    AllPro,
    Mvp,
}

impl Award {
    pub fn code(&self) -> i32 {
        match self {
            Award::NoAward => 0,
            Award::ProBowl => 1,
            Award::AllPro => 2,
            Award::Mvp => 3,
        }
    }

    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Award::NoAward),
            1 => Ok(Award::ProBowl),
            2 => Ok(Award::AllPro),
            3 => Ok(Award::Mvp),
            _ => Err(StatsError::UnknownCode {
                kind: "award",
                code,
            }),
        }
    }
}

impl fmt::Display for Award {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Award::NoAward => "NONE",
            Award::ProBowl => "PRO_BOWL",
            Award::AllPro => "ALL_PRO",
            Award::Mvp => "MVP",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Award {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "NONE" => Ok(Award::NoAward),
            "PRO_BOWL" => Ok(Award::ProBowl),
            "ALL_PRO" => Ok(Award::AllPro),
            "MVP" => Ok(Award::Mvp),
            _ => Err(StatsError::InvalidCategory {
                kind: "award",
                value: s.to_string(),
            }),
        }
    }
}
