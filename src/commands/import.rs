//! Import command implementation

use crate::storage::{ImportSummary, StatsDatabase, StatsDataset};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Handle the import command
pub fn handle_import(db: &mut StatsDatabase, file: &Path, clear: bool) -> Result<ImportSummary> {
    let dataset = StatsDataset::from_path(file)
        .with_context(|| format!("failed to read dataset {}", file.display()))?;

    if clear {
        info!("clearing existing data before import");
    }

    let summary = db
        .import_dataset(&dataset, clear)
        .with_context(|| format!("failed to import {}", file.display()))?;

    println!(
        "✓ Imported {} records ({} injuries, {} players, {} team games, {} team defense summaries)",
        summary.total(),
        summary.injuries,
        summary.players,
        summary.team_games,
        summary.team_defense_summaries
    );

    Ok(summary)
}
