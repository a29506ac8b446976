//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::mapper::{CoordinateDto, DistanceDto};

/// JSON formatter - pretty-printed, same field names as the HTTP API
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON, same shape as the HTTP API"
    }

    fn format_coordinates(&self, coordinates: &[CoordinateDto]) -> Result<String> {
        Ok(serde_json::to_string_pretty(coordinates)?)
    }

    fn format_distance(&self, distance: &DistanceDto) -> Result<String> {
        Ok(serde_json::to_string_pretty(distance)?)
    }
}
