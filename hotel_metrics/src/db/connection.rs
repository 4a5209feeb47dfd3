//! SQLite connection helpers.

use diesel::{Connection, RunQueryDsl, SqliteConnection, sql_query};
use tracing::debug;

use crate::store::StoreResult;

/// Open a SQLite connection and apply connection-wide PRAGMAs.
///
/// `journal_mode=WAL` is persistent per database file; `foreign_keys` and
/// `busy_timeout` apply to this connection only.
pub fn connect_sqlite(database_url: &str) -> StoreResult<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;

    sql_query("PRAGMA journal_mode=WAL;").execute(&mut conn)?;
    sql_query("PRAGMA foreign_keys=ON;").execute(&mut conn)?;
    sql_query("PRAGMA busy_timeout=5000;").execute(&mut conn)?;
    debug!(database_url, "sqlite connection opened");
    Ok(conn)
}
