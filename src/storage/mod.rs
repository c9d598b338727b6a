//! Storage layer for the statistics search library
//!
//! This module provides a thin abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Stored record types and the `Entity` table mapping
//! - `schema`: Database connection and schema management
//! - `queries`: Upserts and filtered reads
//! - `import`: Bulk loading from JSON datasets

pub mod import;
pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use import::{ImportSummary, StatsDataset};
pub use models::*;
pub use schema::StatsDatabase;
