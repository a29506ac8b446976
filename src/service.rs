//! Coordinate generation and path distance
//!
//! The two operations the HTTP layer and CLI consume: generate N random
//! coordinates, and total the distance along a sequence of coordinates.

use crate::coord::{Distance, GeoCoordinate};
use crate::error::ValidationError;
use crate::mapper::CoordinateDto;
use crate::random::pseudo::PseudoSource;
use crate::random::RandomSource;
use std::sync::Arc;

/// Stateless service over an injected random source
#[derive(Clone)]
pub struct CoordinatesService {
    source: Arc<dyn RandomSource>,
}

impl CoordinatesService {
    /// Create a service that draws from `source`
    pub fn new(source: Arc<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// Name of the underlying random source
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Generate `count` random coordinates, in generation order
    pub fn generate_coordinates(&self, count: usize) -> Result<Vec<GeoCoordinate>, ValidationError> {
        (0..count)
            .map(|_| GeoCoordinate::random(self.source.as_ref()))
            .collect()
    }

    /// Total great-circle distance along `coordinates`, in input order
    ///
    /// Every pair is validated before any distance is computed; the first
    /// invalid pair aborts the whole calculation.
    pub fn calculate_total_distance(
        &self,
        coordinates: &[CoordinateDto],
    ) -> Result<Distance, ValidationError> {
        let path = coordinates
            .iter()
            .map(|&dto| GeoCoordinate::try_from(dto))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(path_distance(&path))
    }
}

impl Default for CoordinatesService {
    fn default() -> Self {
        Self::new(Arc::new(PseudoSource::new()))
    }
}

/// Sum of consecutive pairwise distances; zero for fewer than two points
pub fn path_distance(path: &[GeoCoordinate]) -> Distance {
    path.windows(2)
        .map(|pair| GeoCoordinate::distance_between(&pair[0], &pair[1]))
        .sum()
}
