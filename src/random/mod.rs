//! Random sources and bounded uniform sampling
//!
//! This module defines the `RandomSource` trait and the sources used to
//! generate coordinates. Randomness is always passed in explicitly, so
//! callers choose between a thread-local generator, a seeded one, or a
//! fixed sequence in tests.
//!
//! ## Flex Point
//! Adding a new source requires:
//! 1. Create `src/random/{source_name}.rs` implementing `RandomSource`
//! 2. Add `pub mod {source_name};` below
//! 3. Register it in `get_source` and `available_sources`

pub mod pseudo;
pub mod sequence;

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Trait for random number sources
///
/// Implementations must be thread-safe (Send + Sync) so one source can be
/// shared by every request handled by the server.
pub trait RandomSource: Send + Sync {
    /// Returns the source name (e.g., "pseudo", "seeded")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of this source
    fn description(&self) -> &'static str;

    /// Generate a single random float uniformly distributed in [0.0, 1.0)
    fn next_f64(&self) -> f64;
}

/// Draw a value uniformly distributed in `[min, max]`
///
/// When `min == max` the bound is returned as-is and the source is not
/// consulted. The draw interpolates as `min * (1 - u) + max * u`, which
/// stays finite for any finite bounds, and is clamped so rounding can
/// never land outside the range.
///
/// # Errors
/// `ValidationError::InvalidRange` if `min > max` or either bound is NaN
pub fn next_in_range(
    source: &dyn RandomSource,
    min: f64,
    max: f64,
) -> Result<f64, ValidationError> {
    if min.is_nan() || max.is_nan() || min > max {
        return Err(ValidationError::InvalidRange { min, max });
    }
    if min == max {
        return Ok(min);
    }

    let u = source.next_f64();
    let value = min * (1.0 - u) + max * u;
    Ok(value.clamp(min, max))
}

/// Information about a random source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Source name (used in config)
    pub name: String,
    /// Human-readable description
    pub description: String,
}

/// Get a source by name
///
/// `"seeded"` uses `seed` (or 0 when absent). Unknown names fall back to
/// the pseudo source.
pub fn get_source(name: &str, seed: Option<u64>) -> Box<dyn RandomSource> {
    match name {
        "pseudo" => Box::new(pseudo::PseudoSource::new()),
        "seeded" => Box::new(pseudo::SeededSource::new(seed.unwrap_or_default())),
        _ => Box::new(pseudo::PseudoSource::new()),
    }
}

/// List all configurable sources with their info
pub fn available_sources() -> Vec<SourceInfo> {
    vec![
        SourceInfo {
            name: "pseudo".to_string(),
            description: "Thread-local pseudo-random number generator".to_string(),
        },
        SourceInfo {
            name: "seeded".to_string(),
            description: "Seeded pseudo-random number generator (reproducible)".to_string(),
        },
    ]
}
