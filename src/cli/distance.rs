//! Distance command handler
//!
//! Totals the great-circle distance along a path given on the command
//! line or as a JSON array.

use crate::cli::write_output;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::get_formatter;
use crate::mapper::{CoordinateDto, DistanceDto};
use crate::service::CoordinatesService;
use clap::Args;
use std::fs;
use std::io;
use tracing::debug;

/// Distance command arguments
#[derive(Args)]
pub struct DistanceArgs {
    /// Points in path order, each as "LAT,LNG"
    #[arg(value_name = "LAT,LNG", allow_hyphen_values = true)]
    pub points: Vec<String>,

    /// JSON file with an array of {"Latitude", "Longitude"} objects ("-" for stdin)
    #[arg(long, short = 'i', conflicts_with = "points")]
    pub input: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Run the distance command
pub fn run(args: DistanceArgs) -> Result<()> {
    let config = Config::load()?;

    let points = match &args.input {
        Some(input) => read_points(input)?,
        None => args
            .points
            .iter()
            .map(|p| parse_point(p))
            .collect::<Result<Vec<_>>>()?,
    };
    debug!(points = points.len(), "Calculating total distance");

    // Distance needs no randomness; the default source is never consulted
    let distance = CoordinatesService::default().calculate_total_distance(&points)?;

    let format = args.format.unwrap_or(config.output.format);
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    let output = formatter.format_distance(&DistanceDto::from(distance))?;

    write_output(&output, args.output.as_deref())
}

/// Parse a "LAT,LNG" pair
///
/// Range checks are left to the domain; only the syntax is checked here.
pub fn parse_point(text: &str) -> Result<CoordinateDto> {
    let (lat, lng) = text
        .split_once(',')
        .ok_or_else(|| Error::Input(format!("Expected LAT,LNG but got '{}'", text)))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|_| Error::Input(format!("Invalid number '{}' in '{}'", part.trim(), text)))
    };

    Ok(CoordinateDto::new(parse(lat)?, parse(lng)?))
}

/// Read a JSON array of coordinates from a file, or stdin for "-"
fn read_points(input: &str) -> Result<Vec<CoordinateDto>> {
    let content = if input == "-" {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(input)?
    };
    Ok(serde_json::from_str(&content)?)
}
