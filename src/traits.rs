//! Core seams for the route planner.
//!
//! The sequencer and bundle selector only ever ask "how far" and "how long";
//! concrete estimators live behind [`DistanceModel`].

use crate::model::Coordinate;

/// Provides travel distance and drive time between two coordinates.
///
/// Implementations must be symmetric and return zero for identical points.
/// A parallel bundle search shares one model across rayon workers.
pub trait DistanceModel: Sync {
    /// Travel distance in kilometers.
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64;

    /// Drive time in whole minutes for a leg of `km` kilometers.
    fn drive_minutes(&self, km: f64) -> u32;
}
