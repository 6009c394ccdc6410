//! Time codes: points on the time axis plus two sentinel states.
//!
//! A [`TimeCode`] is either the `Default` time (the non-animated value of an
//! attribute), `EarliestTime` (ahead of every real sample) or a numeric time.
//! The three kinds are totally ordered:
//!
//! ```text
//! Default < EarliestTime < Numeric(v)   for every v
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::util::{canonical, cmp_time, Chrono, Error, Result};

/// Point on the time axis, or one of the two sentinel times.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeCode {
    /// The default (non time-varying) time. Has no numeric value.
    Default,
    /// Earlier than every numeric time.
    EarliestTime,
    /// An ordinary time value.
    Numeric(Chrono),
}

impl TimeCode {
    /// Numeric value exposed by [`TimeCode::EarliestTime`].
    ///
    /// Lower than every finite time, so bracketing lookups with it clamp to
    /// the first sample.
    pub const EARLIEST_TIME_VALUE: Chrono = Chrono::MIN;

    /// Largest time magnitude [`TimeCode::safe_step`] protects by default.
    pub const DEFAULT_SAFE_STEP_MAX_VALUE: Chrono = 1e6;

    /// Largest scale-down factor [`TimeCode::safe_step`] survives by default.
    pub const DEFAULT_SAFE_STEP_MAX_COMPRESSION: Chrono = 10.0;

    /// Create a numeric time code. NaN is the default time.
    #[inline]
    pub fn new(value: Chrono) -> Self {
        if value.is_nan() {
            Self::Default
        } else {
            Self::Numeric(value)
        }
    }

    /// Check if this is the default time.
    #[inline]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Check if this is the earliest time.
    #[inline]
    pub fn is_earliest_time(&self) -> bool {
        matches!(self, Self::EarliestTime)
    }

    /// Check if this is an ordinary numeric time.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// Get the numeric value of this time code.
    ///
    /// `EarliestTime` yields [`TimeCode::EARLIEST_TIME_VALUE`]. The default
    /// time has no value and fails with [`Error::InvalidOperation`].
    pub fn value(&self) -> Result<Chrono> {
        match self {
            Self::Default => Err(Error::invalid_operation(
                "the default time code has no numeric value",
            )),
            Self::EarliestTime => Ok(Self::EARLIEST_TIME_VALUE),
            Self::Numeric(v) => Ok(*v),
        }
    }

    /// [`TimeCode::safe_step_with`] using the default max value and compression.
    #[inline]
    pub fn safe_step() -> Chrono {
        Self::safe_step_with(
            Self::DEFAULT_SAFE_STEP_MAX_VALUE,
            Self::DEFAULT_SAFE_STEP_MAX_COMPRESSION,
        )
    }

    /// [`TimeCode::safe_step_with`] using the default compression.
    #[inline]
    pub fn safe_step_for(max_value: Chrono) -> Chrono {
        Self::safe_step_with(max_value, Self::DEFAULT_SAFE_STEP_MAX_COMPRESSION)
    }

    /// Smallest time delta that stays distinguishable after rescaling.
    ///
    /// Two times `t` and `t + d` with `|t| <= max_value` that are scaled down
    /// by up to `max_compression`, shifted by a common offset, and brought
    /// back to `max_value` magnitude remain distinct and keep their order.
    /// The relative precision of a double at `max_value`, amplified by the
    /// compression, is doubled as safety margin.
    pub fn safe_step_with(max_value: Chrono, max_compression: Chrono) -> Chrono {
        Chrono::EPSILON * max_value.abs() * max_compression.abs() * 2.0
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Default => 0,
            Self::EarliestTime => 1,
            Self::Numeric(_) => 2,
        }
    }
}

impl Default for TimeCode {
    fn default() -> Self {
        Self::Default
    }
}

impl From<Chrono> for TimeCode {
    fn from(value: Chrono) -> Self {
        Self::new(value)
    }
}

impl PartialEq for TimeCode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TimeCode {}

impl PartialOrd for TimeCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeCode {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => cmp_time(*a, *b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for TimeCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        if let Self::Numeric(v) = self {
            canonical(*v).to_bits().hash(state);
        }
    }
}

impl PartialEq<Chrono> for TimeCode {
    fn eq(&self, other: &Chrono) -> bool {
        *self == TimeCode::new(*other)
    }
}

impl PartialOrd<Chrono> for TimeCode {
    fn partial_cmp(&self, other: &Chrono) -> Option<Ordering> {
        Some(self.cmp(&TimeCode::new(*other)))
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("DEFAULT"),
            Self::EarliestTime => f.write_str("EARLIEST"),
            Self::Numeric(v) => write!(f, "{}", v),
        }
    }
}

impl FromStr for TimeCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("DEFAULT") {
            return Ok(Self::Default);
        }
        if s.eq_ignore_ascii_case("EARLIEST") {
            return Ok(Self::EarliestTime);
        }
        match s.parse::<Chrono>() {
            Ok(v) if !v.is_nan() => Ok(Self::Numeric(v)),
            _ => Err(Error::ParseTimeCode(s.to_string())),
        }
    }
}
