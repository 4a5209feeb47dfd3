//! Embedded schema migrations.

use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::store::{StoreError, StoreResult};

/// Embedded Diesel migrations bundled with this crate.
///
/// These are applied by [`run_pending`] to bring the database schema up to date.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies pending migrations on an open connection and returns how many ran.
pub fn run_pending(conn: &mut SqliteConnection) -> StoreResult<usize> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::Migration(e.to_string()))?;

    if !applied.is_empty() {
        info!(count = applied.len(), "applied schema migrations");
    }
    Ok(applied.len())
}

#[cfg(test)]
mod test {
    use super::*;
    use diesel::connection::SimpleConnection;

    use crate::db::connection::connect_sqlite;

    #[test]
    fn migrations_apply_on_temp_file_and_are_idempotent() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_string_lossy().to_string();

        let mut conn = connect_sqlite(&path).unwrap();
        assert_eq!(run_pending(&mut conn).expect("migration run"), 1);
        assert_eq!(run_pending(&mut conn).expect("second run"), 0);

        conn.batch_execute(
            "INSERT INTO diario (data, quartos_totais, ocupacao_pct, adr, concorrente_adr, revpar, receita)
             VALUES ('2024-06-01', 50, 60, 220, 215, 132, 6600)",
        )
        .unwrap();
    }

    #[test]
    fn existing_diario_table_is_adopted() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_string_lossy().to_string();

        let mut conn = connect_sqlite(&path).unwrap();
        conn.batch_execute(
            "CREATE TABLE diario (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                data DATE UNIQUE,
                quartos_totais INTEGER,
                ocupacao_pct REAL,
                adr REAL,
                concorrente_adr REAL,
                revpar REAL,
                receita REAL
            );
            INSERT INTO diario (data, quartos_totais, ocupacao_pct, adr, concorrente_adr, revpar, receita)
            VALUES ('2024-06-01', 50, 60, 220, 215, 132, 6600);",
        )
        .unwrap();

        run_pending(&mut conn).expect("migrations over existing table");
    }
}
