use chrono::NaiveDate;
use diesel::prelude::*;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::{
    db::{connection::connect_sqlite, migrate},
    input::{self, DailyInput},
    models::{DailyMetric, NewDailyMetric},
    schema::diario,
    seed::{self, SeedConfig},
    store::{MetricsRepo, StoreResult, UpsertFeedback},
};

/// What [`SqliteStore::initialize`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    /// Schema migrations applied during this call.
    pub migrations_applied: usize,
    /// Rows inserted by seeding (0 when the table already had data).
    pub seeded: usize,
    /// Rows present after initialization.
    pub rows: i64,
}

/// Metrics store backed by a single SQLite connection.
pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// Open (or create) the database at `database_url`. Use `":memory:"` for a
    /// throwaway store. The schema is not touched until [`SqliteStore::initialize`].
    pub fn open(database_url: &str) -> StoreResult<Self> {
        Ok(Self {
            conn: connect_sqlite(database_url)?,
        })
    }

    /// Direct access to the underlying connection.
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Ensure the schema exists, then seed synthetic history if the table is empty.
    ///
    /// The emptiness check and the seed insert share one immediate transaction,
    /// so existing data is never overwritten and seeding happens at most once
    /// per empty table. A negative seed room count is rejected before anything
    /// is written.
    pub fn initialize<R: Rng>(
        &mut self,
        seed_cfg: &SeedConfig,
        today: NaiveDate,
        rng: &mut R,
    ) -> StoreResult<InitReport> {
        input::check_rooms(seed_cfg.rooms_total)?;
        let migrations_applied = migrate::run_pending(&mut self.conn)?;

        self.conn.immediate_transaction(|conn| {
            let existing: i64 = diario::table.count().get_result(conn)?;
            if existing > 0 {
                debug!(rows = existing, "store already populated, skipping seed");
                return Ok(InitReport {
                    migrations_applied,
                    seeded: 0,
                    rows: existing,
                });
            }

            let history = seed::generate_history(today, seed_cfg, rng);
            if history.is_empty() {
                return Ok(InitReport {
                    migrations_applied,
                    seeded: 0,
                    rows: 0,
                });
            }
            let seeded = diesel::insert_into(diario::table)
                .values(&history)
                .execute(conn)?;
            info!(seeded, %today, "seeded empty store with synthetic history");

            Ok(InitReport {
                migrations_applied,
                seeded,
                rows: seeded as i64,
            })
        })
    }

    /// [`MetricsRepo::upsert`] folded into an [`UpsertFeedback`] for display code.
    pub fn upsert_with_feedback(&mut self, input: &DailyInput) -> UpsertFeedback {
        UpsertFeedback::from(&self.upsert(input))
    }
}

impl MetricsRepo for SqliteStore {
    fn upsert(&mut self, input: &DailyInput) -> StoreResult<DailyMetric> {
        let row = NewDailyMetric::from_input(input).inspect_err(|e| {
            warn!(date = %input.date, error = %e, "rejected daily input");
        })?;

        // INSERT .. ON CONFLICT (data) DO UPDATE .. RETURNING (SQLite 3.35+)
        let stored = self.conn.immediate_transaction(|conn| {
            diesel::insert_into(diario::table)
                .values(&row)
                .on_conflict(diario::data)
                .do_update()
                .set(&row)
                .returning(DailyMetric::as_returning())
                .get_result::<DailyMetric>(conn)
        })?;

        debug!(
            date = %stored.date,
            revpar = stored.revpar,
            revenue = stored.revenue,
            "upserted daily metric"
        );
        Ok(stored)
    }

    fn load_all(&mut self) -> StoreResult<Vec<DailyMetric>> {
        let rows = diario::table
            .order(diario::data.asc())
            .select(DailyMetric::as_select())
            .load(&mut self.conn)?;
        debug!(rows = rows.len(), "loaded daily metrics");
        Ok(rows)
    }

    fn count(&mut self) -> StoreResult<i64> {
        Ok(diario::table.count().get_result::<i64>(&mut self.conn)?)
    }
}
