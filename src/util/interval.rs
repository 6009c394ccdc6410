//! Time intervals with independently open or closed endpoints.

use std::fmt;

use super::Chrono;

/// Interval on the time axis.
///
/// Each endpoint carries its own closure flag. Infinite endpoints are
/// allowed and describe an unbounded side.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    min: Chrono,
    max: Chrono,
    min_closed: bool,
    max_closed: bool,
}

impl Interval {
    /// Create an interval with explicit endpoint closure.
    #[inline]
    pub const fn new(min: Chrono, max: Chrono, min_closed: bool, max_closed: bool) -> Self {
        Self { min, max, min_closed, max_closed }
    }

    /// Create a closed interval `[min, max]`.
    #[inline]
    pub const fn closed(min: Chrono, max: Chrono) -> Self {
        Self::new(min, max, true, true)
    }

    /// Create the single-point interval `[t, t]`.
    #[inline]
    pub const fn point(t: Chrono) -> Self {
        Self::closed(t, t)
    }

    /// The whole time axis, `(-inf, +inf)`.
    #[inline]
    pub const fn full() -> Self {
        Self::new(Chrono::NEG_INFINITY, Chrono::INFINITY, false, false)
    }

    #[inline]
    pub fn min(&self) -> Chrono {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Chrono {
        self.max
    }

    #[inline]
    pub fn is_min_closed(&self) -> bool {
        self.min_closed
    }

    #[inline]
    pub fn is_max_closed(&self) -> bool {
        self.max_closed
    }

    #[inline]
    pub fn is_min_finite(&self) -> bool {
        self.min.is_finite()
    }

    #[inline]
    pub fn is_max_finite(&self) -> bool {
        self.max.is_finite()
    }

    /// Check if no time lies inside this interval.
    ///
    /// An interval with a NaN endpoint is empty.
    pub fn is_empty(&self) -> bool {
        if self.min.is_nan() || self.max.is_nan() {
            return true;
        }
        if self.min == self.max {
            return !(self.min_closed && self.max_closed);
        }
        self.min > self.max
    }

    /// Check if `t` lies inside this interval.
    pub fn contains(&self, t: Chrono) -> bool {
        if self.is_empty() || t.is_nan() {
            return false;
        }
        let above_min = if self.min_closed { t >= self.min } else { t > self.min };
        let below_max = if self.max_closed { t <= self.max } else { t < self.max };
        above_min && below_max
    }

    /// Check if either endpoint is finite and open, or NaN.
    ///
    /// Sample enumeration only accepts intervals where this is false.
    pub(crate) fn has_open_finite_endpoint(&self) -> bool {
        self.min.is_nan()
            || self.max.is_nan()
            || (self.is_min_finite() && !self.min_closed)
            || (self.is_max_finite() && !self.max_closed)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::full()
    }
}

impl From<std::ops::RangeInclusive<Chrono>> for Interval {
    fn from(r: std::ops::RangeInclusive<Chrono>) -> Self {
        let (min, max) = r.into_inner();
        Self::closed(min, max)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.min_closed { '[' } else { '(' };
        let close = if self.max_closed { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.min, self.max, close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_contains() {
        let i = Interval::closed(0.0, 1.0);
        assert!(i.contains(0.0));
        assert!(i.contains(1.0));
        assert!(i.contains(0.5));
        assert!(!i.contains(1.5));
        assert!(!i.contains(f64::NAN));
    }

    #[test]
    fn test_open_contains() {
        let i = Interval::new(0.0, 1.0, false, true);
        assert!(!i.contains(0.0));
        assert!(i.contains(1.0));
        let i = Interval::new(0.0, 1.0, true, false);
        assert!(i.contains(0.0));
        assert!(!i.contains(1.0));
    }

    #[test]
    fn test_empty() {
        assert!(!Interval::point(0.0).is_empty());
        assert!(Interval::new(0.0, 0.0, true, false).is_empty());
        assert!(Interval::closed(2.0, 1.0).is_empty());
        assert!(Interval::closed(f64::NAN, 1.0).is_empty());
        assert!(!Interval::full().is_empty());
    }

    #[test]
    fn test_full_interval() {
        let i = Interval::full();
        assert!(!i.is_min_finite());
        assert!(!i.is_max_finite());
        assert!(i.contains(f64::MIN));
        assert!(i.contains(1e300));
        assert!(!i.has_open_finite_endpoint());
        assert_eq!(Interval::default(), i);
    }

    #[test]
    fn test_open_finite_endpoint() {
        assert!(!Interval::closed(1.0, 2.0).has_open_finite_endpoint());
        assert!(Interval::new(1.0, 2.0, false, false).has_open_finite_endpoint());
        assert!(Interval::new(1.0, 2.0, true, false).has_open_finite_endpoint());
        assert!(Interval::new(1.0, 2.0, false, true).has_open_finite_endpoint());
        assert!(!Interval::new(1.0, f64::INFINITY, true, false).has_open_finite_endpoint());
        assert!(Interval::closed(f64::NAN, 2.0).has_open_finite_endpoint());
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::closed(0.0, 6.0).to_string(), "[0, 6]");
        assert_eq!(Interval::full().to_string(), "(-inf, inf)");
        assert_eq!(Interval::from(1.0..=2.5).to_string(), "[1, 2.5]");
    }
}
