//! Error types for the sports statistics search library

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: i32 },

    #[error("Invalid {kind}: {value}")]
    InvalidCategory { kind: &'static str, value: String },
}
