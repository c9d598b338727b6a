//! Filter-and-map search services.
//!
//! Each service takes a request whose fields are all optional, turns the set
//! fields into one equality conjunction, runs a single read against the
//! entity's table and maps every matching record to its response shape.
//! With no fields set the whole table is returned. Row order is whatever
//! SQLite yields.

pub mod filter;
pub mod requests;
pub mod responses;


pub use filter::Filter;
pub use requests::{
    InjurySearchRequest, PlayerSearchRequest, SearchRequest, TeamDefenseSummarySearchRequest,
    TeamGameSearchRequest,
};
pub use responses::{
    InjuryResponse, PlayerResponse, TeamDefenseSummaryResponse, TeamGameResponse,
};

use crate::error::Result;
use crate::storage::{Entity, Injury, Player, StatsDatabase, TeamDefenseSummary, TeamGame};
use std::marker::PhantomData;
use tracing::debug;

/// Read-only search over the table backing `E`.
pub struct SearchService<'db, E> {
    db: &'db StatsDatabase,
    _entity: PhantomData<E>,
}

impl<'db, E: Entity> SearchService<'db, E> {
    pub fn new(db: &'db StatsDatabase) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Every stored record matching all set fields of `request`.
    ///
    /// An empty result is `Ok(vec![])`. Storage failures are returned as-is.
    pub fn fetch_all(&self, request: &E::Request) -> Result<Vec<E::Response>> {
        let filter = request.filter();
        let records = self.db.select::<E>(&filter)?;
        debug!(table = E::TABLE, matched = records.len(), "search complete");

        records
            .into_iter()
            .map(|record| E::Response::try_from(record))
            .collect()
    }
}

impl StatsDatabase {
    pub fn fetch_team_games(
        &self,
        request: &TeamGameSearchRequest,
    ) -> Result<Vec<TeamGameResponse>> {
        SearchService::<TeamGame>::new(self).fetch_all(request)
    }

    pub fn fetch_players(&self, request: &PlayerSearchRequest) -> Result<Vec<PlayerResponse>> {
        SearchService::<Player>::new(self).fetch_all(request)
    }

    pub fn fetch_injuries(&self, request: &InjurySearchRequest) -> Result<Vec<InjuryResponse>> {
        SearchService::<Injury>::new(self).fetch_all(request)
    }

    pub fn fetch_team_defense_summaries(
        &self,
        request: &TeamDefenseSummarySearchRequest,
    ) -> Result<Vec<TeamDefenseSummaryResponse>> {
        SearchService::<TeamDefenseSummary>::new(self).fetch_all(request)
    }
}
