//! Test fixtures for gig-route-planner.
//!
//! Provides realistic test data including:
//! - Real Las Vegas / Henderson locations (from OpenStreetMap)
//! - A planar distance model with predictable numbers
//! - Helpers for placing points a known distance from an origin

#![allow(dead_code)]

pub mod las_vegas_locations;

pub use las_vegas_locations::*;

use gig_route_planner::Coordinate;
use gig_route_planner::traits::DistanceModel;

/// Kilometers per degree of latitude on the haversine sphere.
pub const KM_PER_DEGREE: f64 = 6371.0 * std::f64::consts::PI / 180.0;

/// Point `km` kilometers due north of `origin`.
pub fn north_of(origin: Coordinate, km: f64) -> Coordinate {
    Coordinate::new(origin.lat + km / KM_PER_DEGREE, origin.lng)
}

/// Point `km` kilometers due south of `origin`.
pub fn south_of(origin: Coordinate, km: f64) -> Coordinate {
    Coordinate::new(origin.lat - km / KM_PER_DEGREE, origin.lng)
}

/// Manhattan distance model (simple, predictable).
///
/// Coordinates are read as km on a grid; one minute of driving per km.
pub struct ManhattanModel;

impl DistanceModel for ManhattanModel {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        (from.lat - to.lat).abs() + (from.lng - to.lng).abs()
    }

    fn drive_minutes(&self, km: f64) -> u32 {
        km.round() as u32
    }
}
