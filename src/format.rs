//! Display helpers for route metrics.
//!
//! These only read the numeric fields computed by the planner; nothing here
//! feeds back into optimization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Formats a duration in minutes as "45m", "2h" or "1h 30m".
pub fn format_duration(minutes: u64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Formats a unix timestamp (seconds) as a 24-hour UTC clock time, "HH:MM".
///
/// Returns `None` for timestamps outside the range chrono can represent.
pub fn format_clock(timestamp: i64) -> Option<String> {
    let time = DateTime::<Utc>::from_timestamp(timestamp, 0)?;
    Some(time.format("%H:%M").to_string())
}

/// Qualitative bucket for an earnings-per-hour figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EfficiencyTier {
    Excellent,
    Good,
    Fair,
    Low,
}

impl EfficiencyTier {
    pub fn from_earnings_per_hour(rate: f64) -> Self {
        if rate >= 30.0 {
            EfficiencyTier::Excellent
        } else if rate >= 20.0 {
            EfficiencyTier::Good
        } else if rate >= 12.0 {
            EfficiencyTier::Fair
        } else {
            EfficiencyTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EfficiencyTier::Excellent => "Excellent",
            EfficiencyTier::Good => "Good",
            EfficiencyTier::Fair => "Fair",
            EfficiencyTier::Low => "Low",
        }
    }

    /// Hex color used by the app's efficiency badge.
    pub fn color(self) -> &'static str {
        match self {
            EfficiencyTier::Excellent => "#10B981",
            EfficiencyTier::Good => "#3B82F6",
            EfficiencyTier::Fair => "#F59E0B",
            EfficiencyTier::Low => "#EF4444",
        }
    }
}
