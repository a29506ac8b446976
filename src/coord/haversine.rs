//! Great-circle distance (Haversine formula)

use crate::constants::geo::EARTH_RADIUS_METERS;

/// Calculate the great-circle distance between two points in meters
///
/// # Arguments
/// * `lat_a`, `lng_a` - First point in degrees
/// * `lat_b`, `lng_b` - Second point in degrees
///
/// # Algorithm
/// - h = sin²(Δlat/2) + cos(lat_a)·cos(lat_b)·sin²(Δlng/2)
/// - d = 2·R·asin(√h)
///
/// The caller is responsible for argument order if it needs bitwise
/// symmetry; see `GeoCoordinate::distance_between`.
pub fn haversine_meters(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    let lat_a = lat_a.to_radians();
    let lat_b = lat_b.to_radians();
    let delta_lat = lat_b - lat_a;
    let delta_lng = (lng_b - lng_a).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lng = (delta_lng / 2.0).sin();

    let h = sin_lat * sin_lat + lat_a.cos() * lat_b.cos() * sin_lng * sin_lng;

    // Rounding can push h a hair above 1 for antipodal points
    2.0 * EARTH_RADIUS_METERS * h.min(1.0).sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(haversine_meters(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(haversine_meters(59.9343, 30.3351, 59.9343, 30.3351), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // One degree along a meridian is R·π/180
        let distance = haversine_meters(40.7128, -74.0060, 41.7128, -74.0060);
        assert_relative_eq!(distance, EARTH_RADIUS_METERS * PI / 180.0, max_relative = 1e-9);
    }

    #[test]
    fn test_antipodal_points() {
        let distance = haversine_meters(0.0, 0.0, 0.0, 180.0);
        assert_relative_eq!(distance, EARTH_RADIUS_METERS * PI, max_relative = 1e-12);
        assert!(!distance.is_nan());
    }

    #[test]
    fn test_pole_to_pole() {
        let distance = haversine_meters(90.0, 0.0, -90.0, 0.0);
        assert_relative_eq!(distance, EARTH_RADIUS_METERS * PI, max_relative = 1e-12);
    }
}
