//! Basic database query operations

use super::{models::Entity, schema::StatsDatabase};
use crate::error::Result;
use crate::search::Filter;
use rusqlite::{params_from_iter, Connection};
use tracing::debug;

/// Tables in deletion order
const TABLES: &[&str] = &["injuries", "players", "team_games", "team_defense_summaries"];

fn insert_sql<E: Entity>() -> String {
    let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
    format!(
        "INSERT OR REPLACE INTO {} ({}) VALUES ({})",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders
    )
}

/// Insert or replace `records` on `conn`, which is usually an open transaction
pub(crate) fn insert_records<E: Entity>(conn: &Connection, records: &[E]) -> Result<usize> {
    let mut stmt = conn.prepare(&insert_sql::<E>())?;
    for record in records {
        stmt.execute(params_from_iter(record.to_values()))?;
    }

    debug!(table = E::TABLE, count = records.len(), "upserted records");
    Ok(records.len())
}

/// Delete every row from every statistics table on `conn`
pub(crate) fn delete_all_rows(conn: &Connection) -> Result<()> {
    for table in TABLES {
        conn.execute(&format!("DELETE FROM {}", table), [])?;
    }
    Ok(())
}

impl StatsDatabase {
    /// Insert or replace a single record, keyed by its table's primary key
    pub fn upsert<E: Entity>(&mut self, record: &E) -> Result<()> {
        self.conn
            .execute(&insert_sql::<E>(), params_from_iter(record.to_values()))?;
        Ok(())
    }

    /// Insert or replace many records inside one transaction
    pub fn upsert_many<E: Entity>(&mut self, records: &[E]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let count = insert_records(&tx, records)?;
        tx.commit()?;
        Ok(count)
    }

    /// Read every record of `E` matching the filter's equality conjunction
    pub fn select<E: Entity>(&self, filter: &Filter) -> Result<Vec<E>> {
        let (where_clause, values) = filter.to_where_clause();
        let query = format!(
            "SELECT {} FROM {}{}",
            E::COLUMNS.join(", "),
            E::TABLE,
            where_clause
        );
        debug!(table = E::TABLE, columns = ?filter.columns(), %query, "selecting records");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), |row| E::from_row(row))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Number of rows stored for `E`
    pub fn count<E: Entity>(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", E::TABLE),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Empty all four statistics tables; the schema stays in place.
    /// Either every table is emptied or none is.
    pub fn clear_all_data(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        delete_all_rows(&tx)?;
        tx.commit()?;
        Ok(())
    }
}
