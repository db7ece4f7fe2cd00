//! Rational timing types for exact step positions
//!
//! Step positions are fractions of one cycle. Rationals keep `1/3` exact so a
//! sequencer can line up patterns of different lengths without drift.

use num_rational::Ratio;
use num_traits::{One, Zero};

/// Exact time point in cycles from the start of a pattern
pub type Time = Ratio<i64>;

/// A time arc [start, end) representing a span of a cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    pub start: Time,
    pub end: Time,
}

impl Arc {
    /// Create a new arc from start to end
    pub fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// The whole first cycle: [0, 1)
    pub fn cycle() -> Self {
        Self::new(Time::zero(), Time::one())
    }

    /// Duration of this arc
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    /// Check if a time point falls within this arc [start, end)
    pub fn contains(&self, t: Time) -> bool {
        t >= self.start && t < self.end
    }
}

/// Helper to create Time from a ratio n/d
#[inline]
pub fn time(n: i64, d: i64) -> Time {
    Ratio::new(n, d)
}

/// Create Time from an integer (whole cycles)
#[inline]
pub fn cycles(n: i64) -> Time {
    Ratio::from_integer(n)
}

/// Convert rational to f64 for display or float-clocked consumers
#[inline]
pub fn to_f64(t: Time) -> f64 {
    *t.numer() as f64 / *t.denom() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_creation() {
        let t = time(2, 6);
        assert_eq!(*t.numer(), 1);
        assert_eq!(*t.denom(), 3);
    }

    #[test]
    fn test_arc_contains() {
        let arc = Arc::new(time(0, 1), time(1, 3));
        assert!(arc.contains(time(0, 1)));
        assert!(arc.contains(time(1, 6)));
        assert!(!arc.contains(time(1, 3))); // End is exclusive
    }

    #[test]
    fn test_cycle_arc() {
        let arc = Arc::cycle();
        assert_eq!(arc.duration(), cycles(1));
        assert!(arc.contains(time(7, 8)));
        assert!(!arc.contains(cycles(1)));
    }

    #[test]
    fn test_to_f64() {
        assert!((to_f64(time(3, 8)) - 0.375).abs() < f64::EPSILON);
    }
}
