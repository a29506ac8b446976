//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::mapper::{CoordinateDto, DistanceDto};

/// Text formatter - one coordinate per line, distance in both units
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format_coordinates(&self, coordinates: &[CoordinateDto]) -> Result<String> {
        let lines: Vec<String> = coordinates
            .iter()
            .map(|c| format!("{:.6}, {:.6}", c.latitude, c.longitude))
            .collect();
        Ok(lines.join("\n"))
    }

    fn format_distance(&self, distance: &DistanceDto) -> Result<String> {
        Ok(format!("{:.3} m ({:.3} mi)", distance.metres, distance.miles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_coordinates() {
        let coords = vec![
            CoordinateDto::new(60.021158, 30.321135),
            CoordinateDto::new(-1.5, 2.0),
        ];
        let output = TextFormatter.format_coordinates(&coords).unwrap();
        assert_eq!(output, "60.021158, 30.321135\n-1.500000, 2.000000");
    }

    #[test]
    fn test_text_coordinates_empty() {
        assert_eq!(TextFormatter.format_coordinates(&[]).unwrap(), "");
    }

    #[test]
    fn test_text_distance() {
        let output = TextFormatter
            .format_distance(&DistanceDto {
                metres: 3515.53893,
                miles: 2.18445,
            })
            .unwrap();
        assert_eq!(output, "3515.539 m (2.184 mi)");
    }

    #[test]
    fn test_text_formatter_info() {
        assert_eq!(TextFormatter.name(), "text");
        assert!(!TextFormatter.description().is_empty());
    }
}
