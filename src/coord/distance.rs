//! Distance value type
//!
//! A length stored in meters. The miles view is always derived, never
//! stored separately.

use crate::constants::geo::METERS_PER_MILE;
use std::iter::Sum;
use std::ops::Add;

/// An immutable length
///
/// No range validation is applied: the geodesic code never produces a
/// negative distance, but the type does not forbid one.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Distance {
    meters: f64,
}

impl Distance {
    /// No distance
    pub const ZERO: Distance = Distance { meters: 0.0 };

    /// Create a distance from a magnitude in meters
    pub fn from_meters(meters: f64) -> Self {
        Self { meters }
    }

    pub fn in_meters(&self) -> f64 {
        self.meters
    }

    pub fn in_miles(&self) -> f64 {
        self.meters / METERS_PER_MILE
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        Distance::from_meters(self.meters + other.meters)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Self {
        iter.fold(Distance::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_in_miles() {
        for (meters, miles) in [(3218.688, 2.0), (1609.344, 1.0), (804.672, 0.5)] {
            assert_abs_diff_eq!(Distance::from_meters(meters).in_miles(), miles, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_in_meters_returns_input() {
        for meters in [1000.0, 2000.0, 0.0, -12.5] {
            assert_eq!(Distance::from_meters(meters).in_meters(), meters);
        }
    }

    #[test]
    fn test_miles_derived_from_meters() {
        let distance = Distance::from_meters(633_020.182);
        assert_eq!(distance.in_miles(), distance.in_meters() / 1609.344);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Distance::default().in_meters(), 0.0);
        assert_eq!(Distance::default(), Distance::ZERO);
        assert_eq!(Distance::ZERO.in_miles(), 0.0);
    }

    #[test]
    fn test_add() {
        for (a, b) in [(1000.0, 2000.0), (0.0, 0.0), (1000.0, 0.0)] {
            let sum = Distance::from_meters(a) + Distance::from_meters(b);
            assert_eq!(sum.in_meters(), a + b);
            assert_eq!(sum.in_miles(), (a + b) / 1609.344);
        }
    }

    #[test]
    fn test_add_commutative_and_associative() {
        let a = Distance::from_meters(1.5);
        let b = Distance::from_meters(2250.25);
        let c = Distance::from_meters(0.125);

        assert_eq!(a + b, b + a);
        assert_abs_diff_eq!(
            ((a + b) + c).in_meters(),
            (a + (b + c)).in_meters(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_sum() {
        let total: Distance = [100.0, 200.0, 300.0]
            .into_iter()
            .map(Distance::from_meters)
            .sum();
        assert_eq!(total.in_meters(), 600.0);

        let empty: Distance = std::iter::empty().sum();
        assert_eq!(empty, Distance::ZERO);
    }

    #[test]
    fn test_negative_magnitude_allowed() {
        let total = Distance::from_meters(10.0) + Distance::from_meters(-25.0);
        assert_eq!(total.in_meters(), -15.0);
    }
}
