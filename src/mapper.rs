//! Wire types and their mapping to the domain
//!
//! The HTTP API and CLI exchange plain, unvalidated pairs. Converting a
//! `CoordinateDto` into a `GeoCoordinate` is where validation happens.

use crate::coord::{Distance, GeoCoordinate};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair as it appears on the wire
///
/// Serialized as `Latitude`/`Longitude`; camelCase names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateDto {
    #[serde(rename = "Latitude", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude", alias = "longitude")]
    pub longitude: f64,
}

impl CoordinateDto {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A distance in both units as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceDto {
    #[serde(rename = "Metres")]
    pub metres: f64,
    #[serde(rename = "Miles")]
    pub miles: f64,
}

impl TryFrom<CoordinateDto> for GeoCoordinate {
    type Error = ValidationError;

    fn try_from(dto: CoordinateDto) -> Result<Self, Self::Error> {
        GeoCoordinate::new(dto.latitude, dto.longitude)
    }
}

impl From<GeoCoordinate> for CoordinateDto {
    fn from(coord: GeoCoordinate) -> Self {
        Self::new(coord.latitude(), coord.longitude())
    }
}

impl From<Distance> for DistanceDto {
    fn from(distance: Distance) -> Self {
        Self {
            metres: distance.in_meters(),
            miles: distance.in_miles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_to_domain() {
        let dto = CoordinateDto::new(50.50, 70.70);
        let coord = GeoCoordinate::try_from(dto).unwrap();
        assert_eq!(coord.latitude(), dto.latitude);
        assert_eq!(coord.longitude(), dto.longitude);
    }

    #[test]
    fn test_dto_to_domain_validates() {
        let result = GeoCoordinate::try_from(CoordinateDto::new(91.0, 181.0));
        assert_eq!(result, Err(ValidationError::LatitudeOutOfRange { latitude: 91.0 }));
    }

    #[test]
    fn test_domain_to_dto() {
        let coord = GeoCoordinate::new(50.50, 70.70).unwrap();
        let dto = CoordinateDto::from(coord);
        assert_eq!(dto, CoordinateDto::new(50.50, 70.70));
    }

    #[test]
    fn test_distance_to_dto() {
        let dto = DistanceDto::from(Distance::from_meters(1609.344));
        assert_eq!(dto.metres, 1609.344);
        assert_eq!(dto.miles, 1.0);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(CoordinateDto::new(1.5, -2.5)).unwrap();
        assert_eq!(json, serde_json::json!({ "Latitude": 1.5, "Longitude": -2.5 }));

        let json = serde_json::to_value(DistanceDto::from(Distance::ZERO)).unwrap();
        assert_eq!(json, serde_json::json!({ "Metres": 0.0, "Miles": 0.0 }));
    }

    #[test]
    fn test_parse_coordinate_array() {
        let body = r#"[{"Latitude": 60.021158, "Longitude": 30.321135}]"#;
        let dtos: Vec<CoordinateDto> = serde_json::from_str(body).unwrap();
        assert_eq!(dtos, vec![CoordinateDto::new(60.021158, 30.321135)]);
    }

    #[test]
    fn test_parse_lowercase_field_names() {
        let body = r#"[{"latitude": 59.9343, "longitude": 30.3351}]"#;
        let dtos: Vec<CoordinateDto> = serde_json::from_str(body).unwrap();
        assert_eq!(dtos, vec![CoordinateDto::new(59.9343, 30.3351)]);

        let json = serde_json::to_value(dtos[0]).unwrap();
        assert!(json.get("Latitude").is_some());
    }
}
