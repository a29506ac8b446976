//! Centralized constants for the coordinates-service crate
//!
//! Geodesic constants shared by the coordinate and distance types.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in meters
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

    /// Meters in one international mile (exact)
    pub const METERS_PER_MILE: f64 = 1609.344;

    pub const MIN_LATITUDE: f64 = -90.0;
    pub const MAX_LATITUDE: f64 = 90.0;

    pub const MIN_LONGITUDE: f64 = -180.0;
    pub const MAX_LONGITUDE: f64 = 180.0;
}
