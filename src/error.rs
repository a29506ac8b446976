//! Error types for coordinates-service

use thiserror::Error;

/// Invalid input rejected by the geodesic core
///
/// Raised eagerly when a coordinate is constructed or a range is sampled.
/// These are never transient and never retried.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    #[error("Latitude {latitude} is out of range [-90, 90]")]
    LatitudeOutOfRange { latitude: f64 },

    #[error("Longitude {longitude} is out of range [-180, 180]")]
    LongitudeOutOfRange { longitude: f64 },

    #[error("Invalid range: [{min}, {max}] is not an ordered pair of bounds")]
    InvalidRange { min: f64, max: f64 },
}

impl ValidationError {
    /// Stable machine-readable code for API consumers
    pub fn code(&self) -> &'static str {
        match self {
            Self::LatitudeOutOfRange { .. } => "LATITUDE_OUT_OF_RANGE",
            Self::LongitudeOutOfRange { .. } => "LONGITUDE_OUT_OF_RANGE",
            Self::InvalidRange { .. } => "INVALID_RANGE",
        }
    }
}

/// Main error type for coordinates-service operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for coordinates-service operations
pub type Result<T> = std::result::Result<T, Error>;
