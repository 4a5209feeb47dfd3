//! Hospitality KPI arithmetic.
//!
//! Everything here is pure: no I/O, no state, no failure modes. Inputs are
//! expected to be validated at the boundary (see [`crate::input`]); the
//! functions themselves do not clamp.

use serde::Serialize;

/// Occupancy strictly below this is low demand.
pub const LOW_DEMAND_BELOW_PCT: f64 = 40.0;
/// Occupancy strictly above this is high demand.
pub const HIGH_DEMAND_ABOVE_PCT: f64 = 85.0;

/// Revenue per available room: `(occupancy_pct / 100) * adr`.
pub fn compute_revpar(occupancy_pct: f64, adr: f64) -> f64 {
    (occupancy_pct / 100.0) * adr
}

/// Total room revenue for a day: `revpar * rooms_total`.
pub fn compute_revenue(revpar: f64, rooms_total: i32) -> f64 {
    revpar * f64::from(rooms_total)
}

/// What-if revenue for a planned rate and an estimated occupancy.
///
/// Same formula as the persisted path, with the room count passed in explicitly.
pub fn project_revenue(planned_adr: f64, estimated_occupancy_pct: f64, rooms_total: i32) -> f64 {
    compute_revenue(compute_revpar(estimated_occupancy_pct, planned_adr), rooms_total)
}

/// Own rate minus competitor rate. Positive means we are priced above the market.
pub fn market_delta(adr: f64, competitor_adr: f64) -> f64 {
    adr - competitor_adr
}

/// Demand band derived from occupancy, used for simulator advice only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Demand {
    /// Occupancy below 40%.
    Low,
    /// Occupancy in 40..=85%.
    Stable,
    /// Occupancy above 85%.
    High,
}

impl Demand {
    /// Short advisory text for the yield simulator.
    pub fn advice(self) -> &'static str {
        match self {
            Demand::Low => "Low demand: consider aggressive promotions or bundled packages.",
            Demand::Stable => "Stable: keep the current pricing strategy.",
            Demand::High => "High demand: opportunity to raise the daily rate (yield up).",
        }
    }
}

impl std::fmt::Display for Demand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Demand::Low => "LOW",
            Demand::Stable => "STABLE",
            Demand::High => "HIGH",
        };
        f.write_str(s)
    }
}

/// Classify occupancy into a [`Demand`] band. Both boundaries belong to `Stable`.
pub fn classify_demand(occupancy_pct: f64) -> Demand {
    if occupancy_pct < LOW_DEMAND_BELOW_PCT {
        Demand::Low
    } else if occupancy_pct > HIGH_DEMAND_ABOVE_PCT {
        Demand::High
    } else {
        Demand::Stable
    }
}

/// Outcome of a yield simulation. Nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    /// Planned own rate.
    pub planned_adr: f64,
    /// Estimated occupancy in percent.
    pub estimated_occupancy_pct: f64,
    /// Rooms the projection is computed for.
    pub rooms_total: i32,
    /// RevPAR at the planned rate and occupancy.
    pub revpar: f64,
    /// Projected revenue for the day.
    pub projected_revenue: f64,
    /// Demand band for the estimated occupancy.
    pub demand: Demand,
}

/// Run a what-if scenario.
pub fn simulate(planned_adr: f64, estimated_occupancy_pct: f64, rooms_total: i32) -> Scenario {
    let revpar = compute_revpar(estimated_occupancy_pct, planned_adr);
    Scenario {
        planned_adr,
        estimated_occupancy_pct,
        rooms_total,
        revpar,
        projected_revenue: compute_revenue(revpar, rooms_total),
        demand: classify_demand(estimated_occupancy_pct),
    }
}
