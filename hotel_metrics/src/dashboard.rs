//! Executive dashboard view over the ordered metrics sequence.
//!
//! [`summarize`] keeps the last `window_days` rows (clamped to the 7..=30 range
//! the dashboard offers), reports the latest day's headline KPIs and exposes
//! the RevPAR and price-competitiveness series for charting.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::DailyMetric;

/// Window sizes the dashboard accepts.
pub const WINDOW_DAYS: RangeInclusive<usize> = 7..=30;

/// Headline KPIs of the most recent day in the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Headline {
    /// Date of the latest record.
    pub date: NaiveDate,
    /// Occupancy in percent.
    pub occupancy_pct: f64,
    /// Own average daily rate.
    pub adr: f64,
    /// Competitor average daily rate.
    pub competitor_adr: f64,
    /// Own minus competitor rate.
    pub market_delta: f64,
    /// Revenue per available room.
    pub revpar: f64,
}

/// One point of the price-competitiveness chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    /// Day.
    pub date: NaiveDate,
    /// Own rate.
    pub adr: f64,
    /// Competitor rate.
    pub competitor_adr: f64,
}

/// Dashboard payload for a window of days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Effective window after clamping.
    pub window_days: usize,
    /// Latest day's KPIs.
    pub headline: Headline,
    /// RevPAR per day, oldest first.
    pub revpar_series: Vec<(NaiveDate, f64)>,
    /// Own vs competitor rate per day, oldest first.
    pub price_series: Vec<PricePoint>,
    /// Revenue summed over the window.
    pub window_revenue: f64,
}

/// Summarize the tail of `rows` (which must be in store order). `None` when empty.
pub fn summarize(rows: &[DailyMetric], window_days: usize) -> Option<DashboardSummary> {
    let window_days = window_days.clamp(*WINDOW_DAYS.start(), *WINDOW_DAYS.end());
    let tail = &rows[rows.len().saturating_sub(window_days)..];
    let last = tail.last()?;

    Some(DashboardSummary {
        window_days,
        headline: Headline {
            date: last.date,
            occupancy_pct: last.occupancy_pct,
            adr: last.adr,
            competitor_adr: last.competitor_adr,
            market_delta: last.market_delta(),
            revpar: last.revpar,
        },
        revpar_series: tail.iter().map(|r| (r.date, r.revpar)).collect(),
        price_series: tail
            .iter()
            .map(|r| PricePoint {
                date: r.date,
                adr: r.adr,
                competitor_adr: r.competitor_adr,
            })
            .collect(),
        window_revenue: tail.iter().map(|r| r.revenue).sum(),
    })
}
