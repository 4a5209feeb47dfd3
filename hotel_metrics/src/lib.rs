//! Daily metrics store and KPI engine for a single-property hotel dashboard.
//!
//! - [`kpi`]: pure RevPAR / revenue / demand arithmetic and the yield simulator.
//! - [`input`]: boundary validation of operator-supplied figures.
//! - [`store`]: the `diario` table, with upsert-by-date and ordered reads.
//! - [`cache`]: caller-owned read-through cache with TTL and invalidate-on-write.
//! - [`dashboard`], [`export`]: thin views over the ordered sequence.

#![deny(missing_docs)]

pub mod cache;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod input;
pub mod kpi;
pub mod models;
/// Diesel table definitions for `diario`.
#[allow(missing_docs)]
pub mod schema;
pub mod seed;
pub mod store;
