//! Haversine distance model.
//!
//! Uses great-circle distance and a flat average speed to estimate drive time.
//! There is no road network or traffic model behind these numbers, so drive
//! times are rough planning estimates and must not be shown as an ETA.

use crate::model::Coordinate;
use crate::traits::DistanceModel;

/// Average driving speed assumption for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1.0 for antipodal points.
    let c = 2.0 * a.min(1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Haversine-based distance model.
///
/// Estimates travel time using straight-line distance and an assumed speed.
#[derive(Debug, Clone)]
pub struct HaversineModel {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineModel {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineModel {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }
}

impl DistanceModel for HaversineModel {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        haversine_km(from, to)
    }

    /// Convert distance in km to whole minutes, rounded to nearest.
    fn drive_minutes(&self, km: f64) -> u32 {
        if km <= 0.0 || self.speed_kmh <= 0.0 {
            return 0;
        }
        let hours = km / self.speed_kmh;
        (hours * 60.0).round() as u32
    }
}
