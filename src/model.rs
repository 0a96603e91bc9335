//! Data types exchanged with the planner.
//!
//! Jobs and constraints come in from the application's data layer; routes and
//! bundle candidates go back out. Everything here is a plain value: the
//! planner never keeps any of it between calls.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees (WGS-84, no datum correction).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Job category, used only to pick a default task duration.
///
/// Categories the planner does not know about are kept verbatim in
/// [`JobCategory::Other`] and fall back to the generic duration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobCategory {
    Cleaning,
    Delivery,
    Errands,
    Moving,
    Handyman,
    Tech,
    Other(String),
}

impl JobCategory {
    /// Lowercase lookup key for the duration table.
    pub fn as_str(&self) -> &str {
        match self {
            JobCategory::Cleaning => "cleaning",
            JobCategory::Delivery => "delivery",
            JobCategory::Errands => "errands",
            JobCategory::Moving => "moving",
            JobCategory::Handyman => "handyman",
            JobCategory::Tech => "tech",
            JobCategory::Other(name) => name,
        }
    }
}

impl From<&str> for JobCategory {
    fn from(value: &str) -> Self {
        let key = value.trim().to_ascii_lowercase();
        match key.as_str() {
            "cleaning" => JobCategory::Cleaning,
            "delivery" => JobCategory::Delivery,
            "errands" => JobCategory::Errands,
            "moving" => JobCategory::Moving,
            "handyman" => JobCategory::Handyman,
            "tech" => JobCategory::Tech,
            _ => JobCategory::Other(key),
        }
    }
}

impl From<String> for JobCategory {
    fn from(value: String) -> Self {
        JobCategory::from(value.as_str())
    }
}

impl From<JobCategory> for String {
    fn from(category: JobCategory) -> Self {
        match category {
            JobCategory::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A geolocated job offered to the worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub location: Coordinate,
    pub address: String,
    /// Payout in the marketplace currency. Must be non-negative.
    pub payout: f64,
    pub category: JobCategory,
    /// Free-text estimate such as "45 min". The first integer is read as
    /// minutes; anything unparseable falls back to the category default.
    pub estimated_duration: Option<String>,
}

impl Job {
    pub fn new(id: impl Into<String>, location: Coordinate, payout: f64) -> Self {
        Self {
            id: id.into(),
            location,
            address: String::new(),
            payout,
            category: JobCategory::Other("general".to_string()),
            estimated_duration: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<JobCategory>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_estimated_duration(mut self, estimate: impl Into<String>) -> Self {
        self.estimated_duration = Some(estimate.into());
        self
    }
}

/// Where and when the worker sets out, and the limits on the outing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConstraints {
    pub start_location: Coordinate,
    /// If None the route is one-way and no return leg is costed.
    pub end_location: Option<Coordinate>,
    /// Unix timestamp in seconds.
    pub start_time: i64,
    /// Upper bound on a bundle's total duration in minutes.
    pub max_total_duration: Option<u64>,
    /// Rank bundles by earnings per hour first (default) or by raw earnings.
    pub prioritize_hourly_rate: bool,
}

impl RouteConstraints {
    pub fn new(start_location: Coordinate, start_time: i64) -> Self {
        Self {
            start_location,
            end_location: None,
            start_time,
            max_total_duration: None,
            prioritize_hourly_rate: true,
        }
    }

    pub fn with_end_location(mut self, end: Coordinate) -> Self {
        self.end_location = Some(end);
        self
    }

    pub fn with_max_total_duration(mut self, minutes: u64) -> Self {
        self.max_total_duration = Some(minutes);
        self
    }

    pub fn prioritize_totals(mut self) -> Self {
        self.prioritize_hourly_rate = false;
        self
    }
}

/// One scheduled visit in a computed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    /// 1-based position in the route.
    pub order: usize,
    pub job_id: String,
    pub address: String,
    /// Unix timestamp in seconds.
    pub arrival: i64,
    /// Always `arrival + task_minutes * 60`.
    pub departure: i64,
    /// Distance of the leg that ends at this stop.
    pub drive_distance_km: f64,
    /// Drive time of the leg that ends at this stop.
    pub drive_minutes: u32,
    pub task_minutes: u32,
}

/// Comparison of an optimized route against visiting jobs in the order they
/// were supplied. Values may be negative: this is a diagnostic, not a
/// guarantee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSavings {
    pub baseline_distance_km: f64,
    pub baseline_drive_minutes: f64,
    pub distance_km: f64,
    pub minutes: f64,
    pub cost: f64,
}

/// A sequenced, time-stamped route with its aggregate metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute {
    /// Jobs in visiting order.
    pub jobs: Vec<Job>,
    /// Sum of all legs, including the return leg when an end is set.
    pub total_distance_km: f64,
    /// Drive time plus task time, including the return leg's drive time.
    /// Always the sum of the per-stop minutes plus the return leg.
    pub total_duration_minutes: u64,
    pub total_earnings: f64,
    /// Zero when `total_duration_minutes` is zero.
    pub earnings_per_hour: f64,
    pub stops: Vec<RouteStop>,
    pub savings: RouteSavings,
}

impl OptimizedRoute {
    /// The zero-valued route returned for an empty job list.
    pub fn empty() -> Self {
        Self {
            jobs: Vec::new(),
            total_distance_km: 0.0,
            total_duration_minutes: 0,
            total_earnings: 0.0,
            earnings_per_hour: 0.0,
            stops: Vec::new(),
            savings: RouteSavings::default(),
        }
    }

    pub fn job_ids(&self) -> Vec<&str> {
        self.jobs.iter().map(|job| job.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// A ranked bundle: a subset of the pool plus the route that serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleCandidate {
    /// The subset in pool order (highest payout first).
    pub jobs: Vec<Job>,
    pub route: OptimizedRoute,
    pub score: f64,
    pub reasoning: String,
}

impl BundleCandidate {
    pub fn job_ids(&self) -> Vec<&str> {
        self.jobs.iter().map(|job| job.id.as_str()).collect()
    }
}
