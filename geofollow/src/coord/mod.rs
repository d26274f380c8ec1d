//! Geographic coordinate type and displacement math.
//!
//! Distances are computed with the same planar approximation the map
//! follower has always used: degree deltas scaled by a fixed
//! meters-per-degree-of-latitude constant. This is only accurate near the
//! equator and is deliberately kept rather than replaced with a geodesic
//! formula, so the fetch-threshold behavior stays bit-compatible.

use std::fmt;

/// Meters per degree of latitude.
///
/// Also applied to longitude deltas, which is wrong away from the equator.
/// Kept for compatibility with the threshold tuning that assumes it.
pub const LAT_TO_METERS: f64 = 111_319.491;

/// A geographic fix in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Planar distance to another coordinate, in meters.
    ///
    /// Euclidean distance in degree space scaled by [`LAT_TO_METERS`].
    pub fn distance_m(&self, other: &Coordinate) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlat * dlat + dlon * dlon).sqrt() * LAT_TO_METERS
    }
}

impl fmt::Display for Coordinate {
    /// Six decimal digits, matching the location label precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
