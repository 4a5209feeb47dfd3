//! Synthetic history used to populate an empty store on first run.
//!
//! The shape is fixed (one row per day for the last `days` days, weekend and
//! weekday bands, fixed own prices) while the values are drawn from the
//! injected random source. Tests pass a seeded `StdRng`; the binary passes
//! `rand::rng()`.

use std::ops::Range;

use chrono::{Datelike, Days, NaiveDate};
use rand::Rng;

use crate::models::NewDailyMetric;

/// Occupancy band for Friday, Saturday and Sunday.
pub const WEEKEND_OCCUPANCY_PCT: Range<f64> = 70.0..95.0;
/// Occupancy band for Monday through Thursday.
pub const WEEKDAY_OCCUPANCY_PCT: Range<f64> = 40.0..65.0;
/// Own rate on weekend days.
pub const WEEKEND_ADR: f64 = 280.0;
/// Own rate on weekdays.
pub const WEEKDAY_ADR: f64 = 210.0;
/// Competitor rate as a multiple of the own rate.
pub const COMPETITOR_FACTOR: Range<f64> = 0.9..1.1;

/// How much history to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    /// Number of days ending with (and including) today.
    pub days: u32,
    /// Room count written on every seeded row.
    pub rooms_total: i32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            days: 30,
            rooms_total: 50,
        }
    }
}

/// Friday, Saturday and Sunday (weekday index >= 4, Monday = 0).
pub fn is_weekend(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() >= 4
}

/// Generate one row per day for `cfg.days` days ending at `today`, oldest first.
pub fn generate_history<R: Rng>(
    today: NaiveDate,
    cfg: &SeedConfig,
    rng: &mut R,
) -> Vec<NewDailyMetric> {
    (0..cfg.days)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| {
            let (occupancy_band, adr) = if is_weekend(date) {
                (WEEKEND_OCCUPANCY_PCT, WEEKEND_ADR)
            } else {
                (WEEKDAY_OCCUPANCY_PCT, WEEKDAY_ADR)
            };
            let occupancy_pct = rng.random_range(occupancy_band);
            let competitor_adr = adr * rng.random_range(COMPETITOR_FACTOR);
            NewDailyMetric::derive(date, cfg.rooms_total, occupancy_pct, adr, competitor_adr)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn weekend_is_friday_through_sunday() {
        // 2024-06-03 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let flags: Vec<bool> = (0..7)
            .map(|i| is_weekend(monday + Days::new(i)))
            .collect();
        assert_eq!(flags, vec![false, false, false, false, true, true, true]);
    }

    #[test]
    fn history_has_expected_shape() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let cfg = SeedConfig::default();
        let rows = generate_history(today, &cfg, &mut StdRng::seed_from_u64(7));

        assert_eq!(rows.len(), 30);
        assert_eq!(rows.first().unwrap().date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(rows.last().unwrap().date, today);
        assert!(rows.windows(2).all(|w| w[1].date == w[0].date + Days::new(1)));

        for row in &rows {
            assert_eq!(row.rooms_total, 50);
            let (band, adr) = if is_weekend(row.date) {
                (WEEKEND_OCCUPANCY_PCT, WEEKEND_ADR)
            } else {
                (WEEKDAY_OCCUPANCY_PCT, WEEKDAY_ADR)
            };
            assert!(band.contains(&row.occupancy_pct), "{row:?}");
            assert_eq!(row.adr, adr);
            let factor = row.competitor_adr / row.adr;
            assert!((0.9 - 1e-9..1.1 + 1e-9).contains(&factor), "{row:?}");
            assert!((row.revpar - row.occupancy_pct / 100.0 * row.adr).abs() < 1e-9);
            assert!((row.revenue - row.revpar * 50.0).abs() < 1e-6);
        }
    }

    #[test]
    fn same_seed_same_history() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let cfg = SeedConfig { days: 10, rooms_total: 12 };
        let a = generate_history(today, &cfg, &mut StdRng::seed_from_u64(99));
        let b = generate_history(today, &cfg, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_days_yields_nothing() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let cfg = SeedConfig { days: 0, rooms_total: 50 };
        assert!(generate_history(today, &cfg, &mut StdRng::seed_from_u64(1)).is_empty());
    }
}
