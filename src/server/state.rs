//! Server shared state
//!
//! Holds configuration and the coordinates service for the HTTP server.

use crate::config::Config;
use crate::service::CoordinatesService;
use std::sync::Arc;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Service shared by every request
    pub service: CoordinatesService,
}

impl AppState {
    /// Create new application state, building the configured random source
    pub fn new(config: Config) -> Self {
        let service = CoordinatesService::new(Arc::from(config.random_source()));
        Self::with_service(config, service)
    }

    /// Create application state around an existing service
    pub fn with_service(config: Config, service: CoordinatesService) -> Self {
        Self { config, service }
    }
}
