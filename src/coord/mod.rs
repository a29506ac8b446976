//! Geographic coordinates and distances
//!
//! This module handles:
//! - Validated latitude/longitude pairs
//! - Great-circle distance between them
//! - Random coordinate generation

pub mod distance;
pub mod haversine;

pub use distance::Distance;

use crate::constants::geo::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::error::ValidationError;
use crate::random::{next_in_range, RandomSource};
use std::fmt;

/// A validated geographic coordinate in degrees
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180],
/// both inclusive. The fields are private so an out-of-range instance
/// cannot be built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate, validating both components
    ///
    /// Latitude is checked first; only the first violation is reported.
    /// NaN fails the range check like any other out-of-range value.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange { latitude });
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange { longitude });
        }
        Ok(Self { latitude, longitude })
    }

    /// Create a random coordinate uniformly distributed over the ranges
    ///
    /// Latitude is drawn first, then longitude.
    pub fn random(source: &dyn RandomSource) -> Result<Self, ValidationError> {
        let latitude = next_in_range(source, MIN_LATITUDE, MAX_LATITUDE)?;
        let longitude = next_in_range(source, MIN_LONGITUDE, MAX_LONGITUDE)?;
        Self::new(latitude, longitude)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance from this coordinate to `other`
    pub fn distance_to(&self, other: &GeoCoordinate) -> Distance {
        Self::distance_between(self, other)
    }

    /// Great-circle distance between two coordinates
    ///
    /// The operands are put in a canonical order before evaluation, so
    /// `distance_between(a, b)` and `distance_between(b, a)` are bitwise
    /// equal.
    pub fn distance_between(a: &GeoCoordinate, b: &GeoCoordinate) -> Distance {
        let (first, second) = if (b.latitude, b.longitude) < (a.latitude, a.longitude) {
            (b, a)
        } else {
            (a, b)
        };

        Distance::from_meters(haversine::haversine_meters(
            first.latitude,
            first.longitude,
            second.latitude,
            second.longitude,
        ))
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::pseudo::SeededSource;
    use crate::random::sequence::SequenceSource;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn coord(latitude: f64, longitude: f64) -> GeoCoordinate {
        GeoCoordinate::new(latitude, longitude).unwrap()
    }

    #[test]
    fn test_new_keeps_values() {
        for (lat, lng) in [(0.0, 0.0), (-90.0, 180.0), (90.0, -180.0), (-85.55, -160.77)] {
            let c = coord(lat, lng);
            assert_eq!(c.latitude(), lat);
            assert_eq!(c.longitude(), lng);
        }
    }

    #[test]
    fn test_latitude_out_of_range() {
        for lat in [-90.0 - 1e-10, 91.0, f64::INFINITY, f64::NEG_INFINITY] {
            // Longitude validity must not matter
            for lng in [0.0, 500.0] {
                assert!(matches!(
                    GeoCoordinate::new(lat, lng),
                    Err(ValidationError::LatitudeOutOfRange { .. })
                ));
            }
        }
    }

    #[test]
    fn test_longitude_out_of_range() {
        for lng in [-181.0, 180.0 + 1e10, 180.000001] {
            assert_eq!(
                GeoCoordinate::new(0.0, lng),
                Err(ValidationError::LongitudeOutOfRange { longitude: lng })
            );
        }
    }

    #[test]
    fn test_nan_rejected() {
        assert!(matches!(
            GeoCoordinate::new(f64::NAN, 0.0),
            Err(ValidationError::LatitudeOutOfRange { .. })
        ));
        assert!(matches!(
            GeoCoordinate::new(0.0, f64::NAN),
            Err(ValidationError::LongitudeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_latitude_reported_first() {
        assert_eq!(
            GeoCoordinate::new(91.0, 181.0),
            Err(ValidationError::LatitudeOutOfRange { latitude: 91.0 })
        );
    }

    #[test]
    fn test_known_distances() {
        let cases = [
            ((59.9343, 30.3351), (55.7558, 37.6173), 633_020.18217),
            ((0.0, 30.3351), (55.7558, 0.0), 6_776_570.47427),
            ((0.0, 0.0), (0.0, 0.0), 0.0),
        ];

        for ((lat_a, lng_a), (lat_b, lng_b), expected) in cases {
            let distance = coord(lat_a, lng_a).distance_to(&coord(lat_b, lng_b));
            assert_abs_diff_eq!(distance.in_meters(), expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let source = SeededSource::new(99);
        for _ in 0..100 {
            let a = GeoCoordinate::random(&source).unwrap();
            assert_eq!(GeoCoordinate::distance_between(&a, &a).in_meters(), 0.0);
        }
    }

    #[test]
    fn test_distance_symmetric() {
        let source = SeededSource::new(2024);
        for _ in 0..500 {
            let a = GeoCoordinate::random(&source).unwrap();
            let b = GeoCoordinate::random(&source).unwrap();
            assert_eq!(
                GeoCoordinate::distance_between(&a, &b),
                GeoCoordinate::distance_between(&b, &a)
            );
            assert_eq!(a.distance_to(&b), b.distance_to(&a));
        }
    }

    #[test]
    fn test_distance_bounded_by_half_circumference() {
        let source = SeededSource::new(7);
        let max = crate::constants::geo::EARTH_RADIUS_METERS * std::f64::consts::PI;
        for _ in 0..500 {
            let a = GeoCoordinate::random(&source).unwrap();
            let b = GeoCoordinate::random(&source).unwrap();
            let d = a.distance_to(&b).in_meters();
            assert!(d >= 0.0 && d <= max * (1.0 + 1e-12), "distance {} out of bounds", d);
        }
    }

    #[test]
    fn test_random_within_ranges() {
        let source = SeededSource::new(42);
        for _ in 0..1000 {
            let c = GeoCoordinate::random(&source).unwrap();
            assert!((-90.0..=90.0).contains(&c.latitude()));
            assert!((-180.0..=180.0).contains(&c.longitude()));
        }
    }

    #[test]
    fn test_random_uses_source_in_order() {
        let source = SequenceSource::new(vec![0.75, 0.25]);
        let c = GeoCoordinate::random(&source).unwrap();
        assert_relative_eq!(c.latitude(), 45.0);
        assert_relative_eq!(c.longitude(), -90.0);
    }

    #[test]
    fn test_random_lower_bounds() {
        let source = SequenceSource::new(vec![0.0]);
        let c = GeoCoordinate::random(&source).unwrap();
        assert_eq!(c, coord(-90.0, -180.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(coord(59.9343, 30.3351).to_string(), "59.9343, 30.3351");
    }
}
