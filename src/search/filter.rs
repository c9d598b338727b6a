//! Conjunctive equality filters over a single table.
//!
//! A [`Filter`] is an ordered list of `(column, value)` pairs collected from
//! whichever request fields are set. It renders to one `WHERE` clause whose
//! predicates are all ANDed, so a request with N optional fields never needs
//! 2^N hand-written query variants.

use rusqlite::types::Value;

/// Ordered equality conditions, ANDed together.
///
/// # Examples
///
/// ```rust
/// use stats_search::search::Filter;
///
/// let filter = Filter::new()
///     .eq("game_id", Some(1_i64))
///     .eq("year", None::<String>)
///     .eq("team_id", Some(4_i64));
///
/// let (clause, values) = filter.to_where_clause();
/// assert_eq!(clause, " WHERE game_id = ? AND team_id = ?");
/// assert_eq!(values.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(&'static str, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `column = value` when a value is given; `None` adds nothing.
    pub fn eq<V: Into<Value>>(mut self, column: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.conditions.push((column, value.into()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Constrained columns, in the order they were added.
    pub fn columns(&self) -> Vec<&'static str> {
        self.conditions.iter().map(|(column, _)| *column).collect()
    }

    pub fn conditions(&self) -> &[(&'static str, Value)] {
        &self.conditions
    }

    /// Render the `WHERE` clause (with a leading space) and its bound values.
    ///
    /// An empty filter renders to an empty clause, which matches every row.
    pub fn to_where_clause(&self) -> (String, Vec<Value>) {
        if self.conditions.is_empty() {
            return (String::new(), Vec::new());
        }

        let predicates = self
            .conditions
            .iter()
            .map(|(column, _)| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(" AND ");
        let values = self
            .conditions
            .iter()
            .map(|(_, value)| value.clone())
            .collect();

        (format!(" WHERE {}", predicates), values)
    }
}
