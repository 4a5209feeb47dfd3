#![allow(dead_code)]

use chrono::NaiveDate;
use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use hotel_metrics::seed::SeedConfig;
use hotel_metrics::store::SqliteStore;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}
#[derive(QueryableByName)]
struct ForeignKeys {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}
#[derive(QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = Integer, column_name = "timeout")]
    busy_timeout: i32,
}

pub struct TestDb {
    _dir: TempDir,    // keep alive for the life of the test
    pub path: String, // <tmpdir>/test.db
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// Fresh file-backed store with the schema applied and no seeded rows.
pub fn setup_empty_store() -> (TestDb, SqliteStore) {
    let (db, mut store) = open_store();
    let no_seed = SeedConfig { days: 0, rooms_total: 50 };
    store
        .initialize(&no_seed, date(2024, 6, 30), &mut rng())
        .expect("initialize");
    (db, store)
}

/// Fresh file-backed store, not yet initialized.
pub fn open_store() -> (TestDb, SqliteStore) {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("test.db");
    let path = p.to_string_lossy().to_string();

    let store = SqliteStore::open(&path).expect("open");
    (TestDb { _dir: dir, path }, store)
}

pub fn assert_sqlite_pragmas(conn: &mut SqliteConnection) {
    use diesel::sql_query;

    let jm: JournalMode = sql_query("PRAGMA journal_mode;").get_result(conn).unwrap();
    assert_eq!(jm.journal_mode.to_lowercase(), "wal"); // WAL is persistent per DB file

    let fk: ForeignKeys = sql_query("PRAGMA foreign_keys;").get_result(conn).unwrap();
    assert_eq!(fk.foreign_keys, 1);

    let bt: BusyTimeout = sql_query("PRAGMA busy_timeout;").get_result(conn).unwrap();
    assert_eq!(bt.busy_timeout, 5000);
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
