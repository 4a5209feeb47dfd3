//! Read-through cache for `load_all` results, owned by the presentation side.
//!
//! Readers call [`MetricsCache::get_or_load`], which hands out an `Arc` snapshot
//! while it is younger than the TTL and reloads otherwise. Writers must call
//! [`MetricsCache::invalidate`] after a successful upsert, or use
//! [`MetricsCache::upsert_and_invalidate`] which does both.
//!
//! Implementation notes:
//! - Uses `arc-swap` for atomic pointer swaps + cheap reads (no RwLock).
//! - Failed loads are never cached; the error goes straight to the caller.
//! - The store itself stays cache-agnostic and always returns fresh rows.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use arc_swap::ArcSwapOption;
use tracing::debug;

use crate::{
    input::DailyInput,
    models::DailyMetric,
    store::{MetricsRepo, StoreResult},
};

/// Default time-to-live for cached snapshots (10 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

struct Snapshot {
    loaded_at: Instant,
    rows: Arc<Vec<DailyMetric>>,
}

/// TTL-bounded snapshot of the ordered metrics sequence.
pub struct MetricsCache {
    ttl: Duration,
    slot: ArcSwapOption<Snapshot>,
}

impl Default for MetricsCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl MetricsCache {
    /// Empty cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: ArcSwapOption::empty(),
        }
    }

    /// Configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current snapshot if one is held and still fresh.
    pub fn fresh(&self) -> Option<Arc<Vec<DailyMetric>>> {
        let guard = self.slot.load();
        (*guard)
            .as_ref()
            .filter(|snap| snap.loaded_at.elapsed() < self.ttl)
            .map(|snap| Arc::clone(&snap.rows))
    }

    /// Return the fresh snapshot, or call `load` and cache its result.
    pub fn get_or_load<F>(&self, load: F) -> StoreResult<Arc<Vec<DailyMetric>>>
    where
        F: FnOnce() -> StoreResult<Vec<DailyMetric>>,
    {
        if let Some(rows) = self.fresh() {
            return Ok(rows);
        }

        let rows = Arc::new(load()?);
        debug!(rows = rows.len(), "metrics cache refreshed");
        self.slot.store(Some(Arc::new(Snapshot {
            loaded_at: Instant::now(),
            rows: Arc::clone(&rows),
        })));
        Ok(rows)
    }

    /// Convenience over [`MetricsCache::get_or_load`] for any [`MetricsRepo`].
    pub fn load_through<S: MetricsRepo>(
        &self,
        store: &mut S,
    ) -> StoreResult<Arc<Vec<DailyMetric>>> {
        self.get_or_load(|| store.load_all())
    }

    /// Drop the snapshot so the next read goes to the store.
    pub fn invalidate(&self) {
        self.slot.store(None);
    }

    /// Upsert through `store` and invalidate on success. A failed upsert leaves
    /// the snapshot alone since nothing changed.
    pub fn upsert_and_invalidate<S: MetricsRepo>(
        &self,
        store: &mut S,
        input: &DailyInput,
    ) -> StoreResult<DailyMetric> {
        let stored = store.upsert(input)?;
        self.invalidate();
        Ok(stored)
    }
}
