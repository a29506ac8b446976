//! Fixed-sequence source
//!
//! Replays a list of values in order, wrapping around at the end. Used to
//! drive coordinate generation deterministically.

use crate::random::RandomSource;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source that cycles through a fixed list of values in [0.0, 1.0)
///
/// # Panics
/// `next_f64` panics if the list is empty.
#[derive(Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceSource {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn description(&self) -> &'static str {
        "Fixed sequence of values (deterministic)"
    }

    fn next_f64(&self) -> f64 {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[index % self.values.len()]
    }
}
