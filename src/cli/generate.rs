//! Generate command handler
//!
//! Generates random coordinates and prints them.

use crate::cli::write_output;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::mapper::CoordinateDto;
use crate::random::pseudo::SeededSource;
use crate::random::{available_sources, RandomSource};
use crate::service::CoordinatesService;
use clap::Args;
use std::sync::Arc;
use tracing::debug;

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Number of coordinates to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output (overrides the configured source)
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,

    /// List configurable random sources
    #[arg(short = 'S', long = "list-sources")]
    pub list_sources: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    if args.list_sources {
        list_sources();
        return Ok(());
    }

    let config = Config::load()?;

    let source: Arc<dyn RandomSource> = match args.seed {
        Some(seed) => Arc::new(SeededSource::new(seed)),
        None => Arc::from(config.random_source()),
    };
    debug!(source = source.name(), count = args.count, "Generating coordinates");

    let service = CoordinatesService::new(source);
    let coordinates: Vec<CoordinateDto> = service
        .generate_coordinates(args.count)?
        .into_iter()
        .map(CoordinateDto::from)
        .collect();

    let format = args.format.unwrap_or(config.output.format);
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    let output = formatter.format_coordinates(&coordinates)?;

    write_output(&output, args.output.as_deref())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}

/// Print configurable random sources
fn list_sources() {
    println!("Available random sources:");
    for source in available_sources() {
        println!("  {:6} - {}", source.name, source.description);
    }
}
