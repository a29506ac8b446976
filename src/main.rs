//! coordinates-service CLI entry point
//!
//! Great-circle distance and random coordinates - CLI + web API

use coordinates_service::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
