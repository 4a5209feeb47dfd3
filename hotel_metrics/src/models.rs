//! Diesel models mapping to the `diario` table.
//!
//! [`DailyMetric`] is the read model (one row per calendar date) and
//! [`NewDailyMetric`] the write model. The write model can only be built from
//! validated input through [`NewDailyMetric::from_input`], which derives RevPAR
//! and revenue with [`crate::kpi`]; callers never supply the derived columns.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Serialize;

use crate::input::{DailyInput, ValidationError};
use crate::kpi;
use crate::schema::diario;

/// A row in [`crate::schema::diario`]: the hotel's figures for one calendar date.
///
/// Serializes with the persisted column names so CSV exports line up with the table.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = diario, check_for_backend(diesel::sqlite::Sqlite))]
pub struct DailyMetric {
    /// Surrogate key. Populated by the DB, not externally meaningful.
    pub id: i32,
    /// Calendar date, unique across the table.
    #[diesel(column_name = data)]
    #[serde(rename = "data")]
    pub date: NaiveDate,
    /// Rooms available that day.
    #[diesel(column_name = quartos_totais)]
    #[serde(rename = "quartos_totais")]
    pub rooms_total: i32,
    /// Occupancy in percent (0..=100).
    #[diesel(column_name = ocupacao_pct)]
    #[serde(rename = "ocupacao_pct")]
    pub occupancy_pct: f64,
    /// Own average daily rate.
    pub adr: f64,
    /// Competitor average daily rate.
    #[diesel(column_name = concorrente_adr)]
    #[serde(rename = "concorrente_adr")]
    pub competitor_adr: f64,
    /// Derived: `(occupancy_pct / 100) * adr`.
    pub revpar: f64,
    /// Derived: `revpar * rooms_total`.
    #[diesel(column_name = receita)]
    #[serde(rename = "receita")]
    pub revenue: f64,
}

impl DailyMetric {
    /// Own rate minus competitor rate for this day.
    pub fn market_delta(&self) -> f64 {
        kpi::market_delta(self.adr, self.competitor_adr)
    }
}

/// Insertable/changeset form of [`DailyMetric`]. Every column is written together.
#[derive(Debug, Clone, Copy, PartialEq, Insertable, AsChangeset)]
#[diesel(table_name = diario)]
pub struct NewDailyMetric {
    /// Calendar date (conflict key).
    #[diesel(column_name = data)]
    pub date: NaiveDate,
    /// Rooms available that day.
    #[diesel(column_name = quartos_totais)]
    pub rooms_total: i32,
    /// Occupancy in percent.
    #[diesel(column_name = ocupacao_pct)]
    pub occupancy_pct: f64,
    /// Own average daily rate.
    pub adr: f64,
    /// Competitor average daily rate.
    #[diesel(column_name = concorrente_adr)]
    pub competitor_adr: f64,
    /// Derived RevPAR.
    pub revpar: f64,
    /// Derived revenue.
    #[diesel(column_name = receita)]
    pub revenue: f64,
}

impl NewDailyMetric {
    /// Validate raw input and derive RevPAR/revenue from it.
    pub fn from_input(input: &DailyInput) -> Result<Self, ValidationError> {
        input.validate()?;
        Ok(Self::derive(
            input.date,
            input.rooms_total,
            input.occupancy_pct,
            input.adr,
            input.competitor_adr,
        ))
    }

    /// Build a row from already-checked values (seeding path).
    pub(crate) fn derive(
        date: NaiveDate,
        rooms_total: i32,
        occupancy_pct: f64,
        adr: f64,
        competitor_adr: f64,
    ) -> Self {
        let revpar = kpi::compute_revpar(occupancy_pct, adr);
        Self {
            date,
            rooms_total,
            occupancy_pct,
            adr,
            competitor_adr,
            revpar,
            revenue: kpi::compute_revenue(revpar, rooms_total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn from_input_derives_revpar_and_revenue() {
        let input = DailyInput::new(d(2024, 6, 1), 50, 60.0, 220.0, 215.0);
        let row = NewDailyMetric::from_input(&input).unwrap();
        assert!((row.revpar - 132.0).abs() < 1e-9);
        assert!((row.revenue - 6600.0).abs() < 1e-9);
        assert_eq!(row.date, d(2024, 6, 1));
    }

    #[test]
    fn from_input_rejects_invalid_values() {
        let input = DailyInput::new(d(2024, 6, 1), 50, 101.0, 220.0, 215.0);
        assert!(matches!(
            NewDailyMetric::from_input(&input),
            Err(ValidationError::OccupancyOutOfRange(v)) if v == 101.0
        ));
    }
}
