//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::duration::DurationTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Assumed average driving speed used by the default distance model.
    pub average_speed_kmh: f64,
    /// Maximum full passes of 2-opt improvement per route.
    pub two_opt_max_passes: usize,
    /// Baseline drive minutes charged per km of the unsequenced route.
    pub unoptimized_minutes_per_km: f64,
    /// Travel cost per km, used to price distance savings.
    pub cost_per_km: f64,
    /// Largest bundle the selector will consider.
    pub max_bundle_size: usize,
    /// Number of ranked bundles returned.
    pub top_k: usize,
    pub score_weights: ScoreWeights,
    pub durations: DurationTable,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            average_speed_kmh: 40.0,
            two_opt_max_passes: 100,
            unoptimized_minutes_per_km: 1.5,
            cost_per_km: 0.5,
            max_bundle_size: 5,
            top_k: 5,
            score_weights: ScoreWeights::default(),
            durations: DurationTable::default(),
        }
    }
}

/// Weights of the bundle score:
///
/// ```text
/// score = eph * earnings_per_hour
///       + (earnings / earnings_scale) * total_earnings
///       + distance / (km + 1)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub earnings_per_hour: f64,
    pub total_earnings: f64,
    pub earnings_scale: f64,
    pub distance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            earnings_per_hour: 0.5,
            total_earnings: 0.3,
            earnings_scale: 100.0,
            distance: 20.0,
        }
    }
}

impl ScoreWeights {
    /// Weights with the hourly and total earnings terms swapped.
    pub fn favoring_totals(self) -> Self {
        Self {
            earnings_per_hour: self.total_earnings,
            total_earnings: self.earnings_per_hour,
            ..self
        }
    }
}
