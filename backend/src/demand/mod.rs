//! Demand model
//!
//! Computes how many orders occur, and when, on a given day. Daily volume
//! is a noisy normal draw scaled by a weekday multiplier and two special
//! calendar effects chosen once per run:
//!
//! - a 7-day anomaly window (30 to 60 days after the start) suppressing
//!   demand to 70%, simulating an outage or disruption;
//! - a single promotion day (90 to 120 days after the start) tripling
//!   demand, simulating a marketing event.
//!
//! The two are chosen independently; if they ever coincide the multipliers
//! stack multiplicatively, with no exclusivity guard.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::rng::RngManager;

/// Weekday demand multipliers, Monday through Sunday
pub const WEEKDAY_MULT: [f64; 7] = [0.8, 0.9, 0.95, 1.0, 1.3, 1.5, 1.4];

/// Hourly demand curve: six contiguous ranges over the 24-hour day.
///
/// Weights are relative, never normalized. Lunch and dinner dominate.
const HOURLY_WEIGHTS: [(std::ops::Range<u32>, f64); 6] = [
    (0..6, 0.02),
    (6..11, 0.08),
    (11..15, 0.35),
    (15..19, 0.10),
    (19..23, 0.40),
    (23..24, 0.05),
];

/// Length of the anomaly window in days
const ANOMALY_WINDOW_DAYS: i64 = 7;

/// Demand model tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandConfig {
    /// Mean of the daily order count draw, before multipliers
    pub daily_mean: f64,

    /// Standard deviation of the daily order count draw
    pub daily_std: f64,

    /// Multiplier applied inside the anomaly window
    pub anomaly_multiplier: f64,

    /// Multiplier applied on the promotion day
    pub promotion_multiplier: f64,
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            daily_mean: 2700.0,
            daily_std: 400.0,
            anomaly_multiplier: 0.7,
            promotion_multiplier: 3.0,
        }
    }
}

/// Per-run demand model
///
/// Construction draws the anomaly window and promotion day from the shared
/// RNG, so the special-event calendar is part of the seeded run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandModel {
    config: DemandConfig,

    /// First day of the 7-day suppressed-demand window
    anomaly_start: NaiveDate,

    /// Single amplified-demand day
    promotion_day: NaiveDate,
}

impl DemandModel {
    /// Create a demand model for a run starting at `start_date`.
    pub fn new(config: DemandConfig, start_date: NaiveDate, rng: &mut RngManager) -> Self {
        let anomaly_start = start_date + Duration::days(rng.range_inclusive(30, 60));
        let promotion_day = start_date + Duration::days(rng.range_inclusive(90, 120));
        Self {
            config,
            anomaly_start,
            promotion_day,
        }
    }

    /// First day of the anomaly window
    pub fn anomaly_start(&self) -> NaiveDate {
        self.anomaly_start
    }

    /// The promotion day
    pub fn promotion_day(&self) -> NaiveDate {
        self.promotion_day
    }

    /// Combined demand multiplier for a calendar day.
    ///
    /// Weekday base, then anomaly suppression, then promotion spike, in
    /// that order.
    pub fn day_multiplier(&self, date: NaiveDate) -> f64 {
        let weekday = date.weekday().num_days_from_monday() as usize;
        let mut multiplier = WEEKDAY_MULT[weekday];

        if date >= self.anomaly_start
            && date < self.anomaly_start + Duration::days(ANOMALY_WINDOW_DAYS)
        {
            multiplier *= self.config.anomaly_multiplier;
        }

        if date == self.promotion_day {
            multiplier *= self.config.promotion_multiplier;
        }

        multiplier
    }

    /// Draw the actual order count for a day.
    ///
    /// `round(Normal(mean, std) × multiplier)`, redrawing on the rare
    /// negative sample rather than clamping, so the distribution above zero
    /// is untouched.
    pub fn daily_order_count(&self, date: NaiveDate, rng: &mut RngManager) -> usize {
        let multiplier = self.day_multiplier(date);
        loop {
            let draw = rng.normal(self.config.daily_mean, self.config.daily_std) * multiplier;
            if draw >= 0.0 {
                return draw.round() as usize;
            }
        }
    }

    /// Relative demand weight for an hour of the day.
    ///
    /// Falls back to 0.01 for anything outside the fixed partition; the
    /// partition covers all 24 hours, so the fallback is never reached for
    /// valid input.
    pub fn hour_weight(hour: u32) -> f64 {
        for (range, weight) in &HOURLY_WEIGHTS {
            if range.contains(&hour) {
                return *weight;
            }
        }
        0.01
    }

    /// Draw an hour of the day, weighted by the hourly demand curve.
    pub fn sample_hour(&self, rng: &mut RngManager) -> u32 {
        let weights: Vec<f64> = (0..24).map(Self::hour_weight).collect();
        rng.weighted_index(&weights) as u32
    }
}
