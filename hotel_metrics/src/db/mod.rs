//! Database utilities for connections and schema migrations.
//!
//! This module provides:
//! - [`connection::connect_sqlite`]: opens a SQLite file (or `:memory:`) and applies
//!   WAL journaling, foreign_keys=ON, and a 5000ms busy_timeout.
//! - [`migrate::run_pending`]: applies the embedded migrations that create the
//!   `diario` table on an open connection.
//!
//! Example:
//! ```no_run
//! use hotel_metrics::db::{connection, migrate};
//!
//! let db_path = std::env::temp_dir().join("hotel_metrics_example.db");
//! let mut conn = connection::connect_sqlite(db_path.to_str().unwrap()).expect("connect");
//! migrate::run_pending(&mut conn).expect("migrations");
//! ```

pub mod connection;
pub mod migrate;
