//! Search command implementation

use crate::{cli::SearchCmd, storage::StatsDatabase};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fmt, io::Write};

/// Handle the search command, writing results to `out`
pub fn handle_search<W: Write>(db: &StatsDatabase, cmd: SearchCmd, out: &mut W) -> Result<usize> {
    match cmd {
        SearchCmd::TeamGames { filters, json } => {
            let responses = db
                .fetch_team_games(&filters.into())
                .context("team game search failed")?;
            write_responses(out, &responses, json)
        }
        SearchCmd::Players { filters, json } => {
            let responses = db
                .fetch_players(&filters.into())
                .context("player search failed")?;
            write_responses(out, &responses, json)
        }
        SearchCmd::Injuries { filters, json } => {
            let responses = db
                .fetch_injuries(&filters.into())
                .context("injury search failed")?;
            write_responses(out, &responses, json)
        }
        SearchCmd::TeamDefense { filters, json } => {
            let responses = db
                .fetch_team_defense_summaries(&filters.into())
                .context("team defense search failed")?;
            write_responses(out, &responses, json)
        }
    }
}

/// Print responses as pretty JSON or one text line each
pub fn write_responses<W, R>(out: &mut W, responses: &[R], as_json: bool) -> Result<usize>
where
    W: Write,
    R: Serialize + fmt::Display,
{
    if as_json {
        serde_json::to_writer_pretty(&mut *out, responses)?;
        writeln!(out)?;
    } else if responses.is_empty() {
        writeln!(out, "No matching records")?;
    } else {
        for response in responses {
            writeln!(out, "{}", response)?;
        }
    }
    Ok(responses.len())
}
