//! Boundary validation for operator-supplied figures.
//!
//! Occupancy must sit in 0..=100, room counts and prices must be non-negative,
//! and floating-point values must be finite. Rejected values never reach the
//! KPI arithmetic or the store.

use chrono::NaiveDate;
use thiserror::Error;

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Occupancy outside 0..=100.
    #[error("occupancy must be between 0 and 100 percent, got {0}")]
    OccupancyOutOfRange(f64),
    /// Negative room count.
    #[error("rooms_total must not be negative, got {0}")]
    NegativeRooms(i32),
    /// Negative price.
    #[error("{field} must not be negative, got {value}")]
    NegativePrice {
        /// Which price field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// NaN or infinity.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite {
        /// Which field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
}

/// Raw figures for one calendar date, as typed by an operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyInput {
    /// Calendar date the figures belong to.
    pub date: NaiveDate,
    /// Rooms available that day.
    pub rooms_total: i32,
    /// Occupancy in percent.
    pub occupancy_pct: f64,
    /// Own average daily rate.
    pub adr: f64,
    /// Competitor average daily rate.
    pub competitor_adr: f64,
}

impl DailyInput {
    /// Bundle the raw figures. Nothing is checked until [`DailyInput::validate`].
    pub fn new(
        date: NaiveDate,
        rooms_total: i32,
        occupancy_pct: f64,
        adr: f64,
        competitor_adr: f64,
    ) -> Self {
        Self {
            date,
            rooms_total,
            occupancy_pct,
            adr,
            competitor_adr,
        }
    }

    /// Check every field, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_rooms(self.rooms_total)?;
        check_occupancy(self.occupancy_pct)?;
        check_price("adr", self.adr)?;
        check_price("competitor_adr", self.competitor_adr)?;
        Ok(())
    }
}

/// Inputs of a yield simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioInput {
    /// Planned own rate.
    pub planned_adr: f64,
    /// Estimated occupancy in percent.
    pub estimated_occupancy_pct: f64,
    /// Rooms to project for.
    pub rooms_total: i32,
}

impl ScenarioInput {
    /// Same range rules as [`DailyInput::validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_rooms(self.rooms_total)?;
        check_occupancy(self.estimated_occupancy_pct)?;
        check_price("planned_adr", self.planned_adr)
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

/// Occupancy must be finite and within 0..=100.
pub fn check_occupancy(value: f64) -> Result<(), ValidationError> {
    check_finite("occupancy_pct", value)?;
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OccupancyOutOfRange(value))
    }
}

/// Prices must be finite and non-negative.
pub fn check_price(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativePrice { field, value });
    }
    Ok(())
}

/// Room counts must be non-negative.
pub fn check_rooms(value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeRooms(value));
    }
    Ok(())
}
