//! Sample key and lookup result types.

use std::cmp::Ordering;

use crate::util::{canonical, cmp_time, Chrono, Error};

/// Time of a stored sample: always finite, `-0.0` folded onto `0.0`.
///
/// Totally ordered, so it can key an ordered map.
#[derive(Clone, Copy, Debug)]
pub struct SampleTime(Chrono);

impl SampleTime {
    /// Create a sample time, rejecting NaN and infinities.
    #[inline]
    pub fn new(t: Chrono) -> Option<Self> {
        t.is_finite().then(|| Self(canonical(t)))
    }

    /// Probe key for map lookups. Accepts infinities, caller filters NaN.
    #[inline]
    pub(crate) fn probe(t: Chrono) -> Self {
        Self(canonical(t))
    }

    #[inline]
    pub fn get(self) -> Chrono {
        self.0
    }
}

impl PartialEq for SampleTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SampleTime {}

impl PartialOrd for SampleTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SampleTime {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_time(self.0, other.0)
    }
}

impl TryFrom<Chrono> for SampleTime {
    type Error = Error;

    fn try_from(t: Chrono) -> Result<Self, Error> {
        Self::new(t).ok_or(Error::InvalidTime(t))
    }
}

impl From<SampleTime> for Chrono {
    fn from(t: SampleTime) -> Self {
        t.0
    }
}

/// Pair of sample times surrounding a query time.
///
/// `lower == upper` when the query hits a sample exactly or lies outside
/// the sampled range (clamped to the nearest end).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bracket {
    /// Greatest sample time at or below the query.
    pub lower: Chrono,
    /// Smallest sample time at or above the query.
    pub upper: Chrono,
}

impl Bracket {
    /// Create a bracket from two sample times.
    #[inline]
    pub const fn new(lower: Chrono, upper: Chrono) -> Self {
        Self { lower, upper }
    }

    /// Create a degenerate bracket on a single sample.
    #[inline]
    pub const fn exact(t: Chrono) -> Self {
        Self { lower: t, upper: t }
    }

    /// Check if both ends are the same sample (no interpolation needed).
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }
}

impl From<Bracket> for (Chrono, Chrono) {
    fn from(b: Bracket) -> Self {
        (b.lower, b.upper)
    }
}

impl PartialEq<(Chrono, Chrono)> for Bracket {
    fn eq(&self, other: &(Chrono, Chrono)) -> bool {
        self.lower == other.0 && self.upper == other.1
    }
}
