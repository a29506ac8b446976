//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod distance;
pub mod generate;
pub mod serve;

use crate::error::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Great-circle distance and random coordinate service
#[derive(Parser)]
#[command(name = "coordinates-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate random coordinates
    Generate(generate::GenerateArgs),

    /// Total distance along a path of coordinates
    Distance(distance::DistanceArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            init_logging("warn");
            generate::run(args)
        }
        Commands::Distance(args) => {
            init_logging("warn");
            distance::run(args)
        }
        Commands::Serve(args) => {
            init_logging("info");
            serve::run(args).await
        }
        Commands::Config(args) => config::run(args),
    }
}

/// Initialize logging to stderr, honoring RUST_LOG over `default_level`
fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print `output` to stdout, or write it to `path` when given
fn write_output(output: &str, path: Option<&str>) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }
    Ok(())
}
