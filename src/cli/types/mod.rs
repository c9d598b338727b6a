//! Type-safe wrappers and enums for sports statistics data.

pub mod codes;
pub mod ids;

pub use codes::{Award, GameType, InjuryStatus};
pub use ids::{GameId, PlayerId, TeamId};
