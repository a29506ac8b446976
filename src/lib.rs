//! coordinates-service: great-circle distances and random coordinates
//!
//! A library, CLI, and HTTP API for computing haversine distances along
//! paths of geographic coordinates and generating uniformly random ones.
//!
//! ## Features
//!
//! - Validated `GeoCoordinate` values (latitude in [-90, 90], longitude in [-180, 180])
//! - Haversine great-circle distance with a meters/miles `Distance` type
//! - Pluggable random sources (thread-local, seeded, fixed sequence)
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use coordinates_service::coord::GeoCoordinate;
//! use coordinates_service::random::pseudo::SeededSource;
//!
//! let spb = GeoCoordinate::new(59.9343, 30.3351).unwrap();
//! let moscow = GeoCoordinate::new(55.7558, 37.6173).unwrap();
//! let distance = spb.distance_to(&moscow);
//! println!("{:.1} km", distance.in_meters() / 1000.0);
//!
//! // Random coordinates from an explicit source
//! let source = SeededSource::new(42);
//! let point = GeoCoordinate::random(&source).unwrap();
//! println!("Random point: {}", point);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod mapper;
pub mod random;
pub mod server;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use coord::{Distance, GeoCoordinate};
pub use error::{Error, Result, ValidationError};
pub use mapper::{CoordinateDto, DistanceDto};
pub use service::CoordinatesService;
