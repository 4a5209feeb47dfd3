//! Daily metrics store: one row per calendar date in the `diario` table.
//!
//! [`MetricsRepo`] is the portable surface, [`SqliteStore`] the SQLite
//! implementation. Writes are upserts keyed by date and run inside an
//! immediate transaction, so a reader sees either the old row or the fully
//! rewritten one. Reads always hit the database; caching is the caller's
//! business (see [`crate::cache::MetricsCache`]).

mod sqlite;

pub use sqlite::{InitReport, SqliteStore};

use crate::input::{DailyInput, ValidationError};
use crate::models::DailyMetric;

/// Errors that can occur while interacting with the metrics store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Input rejected before touching the database.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The database could not be opened.
    #[error("could not open database: {0}")]
    Connection(#[from] diesel::ConnectionError),

    /// Schema migrations failed.
    #[error("schema migration failed: {0}")]
    Migration(String),

    /// A query failed (I/O, missing schema, corrupt row).
    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

/// Result type used throughout the store for fallible operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage surface for daily metrics.
pub trait MetricsRepo {
    /// Validates `input`, derives RevPAR/revenue, and writes the row for
    /// `input.date`, replacing any existing row for that date.
    fn upsert(&mut self, input: &DailyInput) -> StoreResult<DailyMetric>;

    /// All rows ordered by date ascending.
    fn load_all(&mut self) -> StoreResult<Vec<DailyMetric>>;

    /// Number of persisted rows.
    fn count(&mut self) -> StoreResult<i64>;
}

/// Two-part outcome of an upsert for display code: a success flag plus a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertFeedback {
    /// Whether the row was stored.
    pub success: bool,
    /// Message suitable for inline display.
    pub message: String,
}

impl From<&StoreResult<DailyMetric>> for UpsertFeedback {
    fn from(result: &StoreResult<DailyMetric>) -> Self {
        match result {
            Ok(row) => UpsertFeedback {
                success: true,
                message: format!(
                    "Saved {}: RevPAR {:.2}, revenue {:.2}",
                    row.date, row.revpar, row.revenue
                ),
            },
            Err(e) => UpsertFeedback {
                success: false,
                message: format!("Failed to save: {e}"),
            },
        }
    }
}
