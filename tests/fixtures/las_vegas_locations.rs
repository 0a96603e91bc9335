//! Real Las Vegas / Henderson locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

use gig_route_planner::{Coordinate, Job, JobCategory};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// A job at this location, addressed by the location's name.
    pub fn job(&self, id: &str, payout: f64, category: JobCategory) -> Job {
        Job::new(id, self.coordinate(), payout)
            .with_address(self.name)
            .with_category(category)
    }
}

// ============================================================================
// Casinos / Hotels (good start locations)
// ============================================================================

pub const CASINOS: &[Location] = &[
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("Caesars Palace", 36.1162, -115.1745),
    Location::new("Longhorn Casino", 36.1070664, -115.0591256),
];

// ============================================================================
// Strip Restaurants
// ============================================================================

pub const STRIP_RESTAURANTS: &[Location] = &[
    Location::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Location::new("SW Steakhouse", 36.1262145, -115.1669146),
    Location::new("Sinatra", 36.1300035, -115.1654850),
    Location::new("Public House", 36.1219193, -115.1689317),
    Location::new("Outback Steakhouse Strip", 36.1037287, -115.1724577),
    Location::new("The Crack Shack", 36.1050709, -115.1735287),
    Location::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Location::new("Flour & Barley", 36.1173688, -115.1702674),
    Location::new("Yard House", 36.1177147, -115.1691992),
    Location::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Location::new("P.F. Chang's", 36.1103352, -115.1723830),
    Location::new("Earl of Sandwich Planet Hollywood", 36.1093912, -115.1720087),
    Location::new("Lobster Me Planet Hollywood", 36.1094857, -115.1708325),
    Location::new("Gordon Ramsay Steak", 36.1127744, -115.1712029),
    Location::new("Spago by Wolfgang Puck", 36.1139368, -115.1741462),
    Location::new("Le Cirque", 36.1135689, -115.1749763),
];

// ============================================================================
// Henderson
// ============================================================================

pub const HENDERSON_LOCATIONS: &[Location] = &[
    Location::new("I Love Sushi Henderson", 35.9916660, -115.1028343),
    Location::new("Extended Stay America Henderson", 36.1283949, -115.0826989),
    Location::new("Islander's Grill", 36.0335058, -114.9856162),
    Location::new("Naga", 36.0137634, -114.9928676),
    Location::new("RibCage", 35.9949754, -115.0999810),
    Location::new("Buffalo Wild Wings Henderson", 36.0090449, -114.9917034),
    Location::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Location::new("Sunset Station Area", 36.0614, -115.0631),
];

// ============================================================================
// East Side
// ============================================================================

pub const EAST_SIDE_LOCATIONS: &[Location] = &[
    Location::new("Pei Wei Town Square", 36.0810469, -115.1472694),
    Location::new("Jose Cuervo Tequileria", 36.0806515, -115.1465380),
    Location::new("Sammy's", 36.0826447, -115.1483055),
    Location::new("Villa", 36.0825032, -115.1481717),
    Location::new("Pei Wei East", 36.0861327, -115.1387345),
    Location::new("The Local", 36.0861274, -115.1388524),
    Location::new("Hello Tokyo", 36.1161627, -115.0902096),
    Location::new("Golden China", 36.1171166, -115.0904647),
    Location::new("Original Lindo Michoacan", 36.1294005, -115.1135106),
    Location::new("Rivas Mexican Grill East", 36.1295175, -115.1087980),
    Location::new("Pizza Hut East", 36.1305215, -115.1093500),
    Location::new("Tomo Sushi", 36.0992464, -115.1142123),
    Location::new("Pizza Hut Boulder", 36.1287535, -115.0931625),
    Location::new("Wo Fat Chinese", 36.1298523, -115.0936239),
    Location::new("Sushi Twister", 36.1007300, -115.0526259),
    Location::new("Thai Food To Go", 36.1302738, -115.1037355),
    Location::new("Chuck Wagon Restaurant", 36.1072491, -115.0593482),
    Location::new("Denny's Boulder", 36.1061288, -115.0578247),
    Location::new("Viva El Salvador", 36.1013492, -115.0646473),
    Location::new("Roma Pizza", 36.1012461, -115.0753039),
];

/// Returns all locations as a single list.
pub fn all_locations() -> Vec<Location> {
    let mut all = Vec::with_capacity(64);
    all.extend_from_slice(CASINOS);
    all.extend_from_slice(STRIP_RESTAURANTS);
    all.extend_from_slice(HENDERSON_LOCATIONS);
    all.extend_from_slice(EAST_SIDE_LOCATIONS);
    all
}

/// Returns the first `count` locations.
pub fn sample_locations(count: usize) -> Vec<Location> {
    all_locations().into_iter().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_locations_count() {
        let all = all_locations();
        assert!(all.len() >= 40, "should have at least 40 locations, got {}", all.len());
    }

    #[test]
    fn test_coordinates_in_vegas_area() {
        for loc in all_locations() {
            assert!(
                loc.lat > 35.9 && loc.lat < 36.3,
                "{} lat out of range: {}",
                loc.name,
                loc.lat
            );
            assert!(
                loc.lng > -115.4 && loc.lng < -114.8,
                "{} lng out of range: {}",
                loc.name,
                loc.lng
            );
        }
    }
}
