//! Ordered time sample storage for a single attribute.
//!
//! [`TimeSamples`] maps finite sample times to values and answers the
//! queries interpolating readers need: ordered enumeration, enumeration
//! within an interval, and the pair of samples bracketing a query time.
//! All lookups go through the ordered map, never a linear scan.

use std::collections::BTreeMap;
use std::ops::Bound;

use super::sample::{Bracket, SampleTime};
use super::TimeCode;
use crate::util::{Chrono, Error, Interval, Result};

/// Time-ordered samples of one attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSamples<V> {
    samples: BTreeMap<SampleTime, V>,
}

impl<V> TimeSamples<V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            samples: BTreeMap::new(),
        }
    }

    /// Build a store from `(time, value)` pairs. Later duplicates win.
    ///
    /// Fails on the first non-finite time.
    pub fn from_samples<I>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Chrono, V)>,
    {
        let mut store = Self::new();
        for (time, value) in samples {
            store.set(time, value)?;
        }
        Ok(store)
    }

    /// Write the sample at `time`, returning the value it replaced.
    ///
    /// `time` must be finite; otherwise nothing is written and
    /// [`Error::InvalidTime`] is returned. Sentinel times cannot reach this
    /// method as numbers except through [`TimeCode::EARLIEST_TIME_VALUE`],
    /// use [`TimeSamples::set_at`] to have those rejected too.
    pub fn set(&mut self, time: Chrono, value: V) -> Result<Option<V>> {
        let key = SampleTime::new(time).ok_or_else(|| {
            tracing::warn!(time, "refusing time sample at non-finite time");
            Error::InvalidTime(time)
        })?;
        tracing::trace!(time = key.get(), "set time sample");
        Ok(self.samples.insert(key, value))
    }

    /// Write the sample at a numeric time code.
    ///
    /// `Default` and `EarliestTime` are rejected with [`Error::SentinelTime`].
    pub fn set_at(&mut self, time: TimeCode, value: V) -> Result<Option<V>> {
        match time {
            TimeCode::Numeric(t) => self.set(t, value),
            sentinel => {
                tracing::warn!(%sentinel, "refusing time sample at sentinel time");
                Err(Error::SentinelTime(sentinel))
            }
        }
    }

    /// Value stored exactly at `time`.
    pub fn get(&self, time: Chrono) -> Option<&V> {
        SampleTime::new(time).and_then(|key| self.samples.get(&key))
    }

    /// Value stored exactly at a time code. Sentinels never hold samples.
    pub fn get_at(&self, time: TimeCode) -> Option<&V> {
        match time {
            TimeCode::Numeric(t) => self.get(t),
            TimeCode::Default | TimeCode::EarliestTime => None,
        }
    }

    /// Remove the sample at `time`, returning its value.
    pub fn erase(&mut self, time: Chrono) -> Option<V> {
        let key = SampleTime::new(time)?;
        let removed = self.samples.remove(&key);
        if removed.is_some() {
            tracing::trace!(time = key.get(), "erased time sample");
        }
        removed
    }

    /// Remove all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check if at least one sample exists.
    #[inline]
    pub fn has_time_samples(&self) -> bool {
        !self.samples.is_empty()
    }

    /// Check if the value can change over time (more than one sample).
    #[inline]
    pub fn value_might_be_time_varying(&self) -> bool {
        self.samples.len() > 1
    }

    /// Earliest sample time.
    pub fn first_time(&self) -> Option<Chrono> {
        self.samples.first_key_value().map(|(k, _)| k.get())
    }

    /// Latest sample time.
    pub fn last_time(&self) -> Option<Chrono> {
        self.samples.last_key_value().map(|(k, _)| k.get())
    }

    /// Iterate `(time, value)` in ascending time order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Chrono, &V)> + ExactSizeIterator + '_ {
        self.samples.iter().map(|(k, v)| (k.get(), v))
    }

    /// Iterate sample times in ascending order.
    pub fn times(&self) -> impl DoubleEndedIterator<Item = Chrono> + ExactSizeIterator + '_ {
        self.samples.keys().map(|k| k.get())
    }

    /// All sample times, ascending.
    pub fn list_time_samples(&self) -> Vec<Chrono> {
        self.times().collect()
    }

    /// Sample times inside `interval`, ascending.
    ///
    /// Finite endpoints must be closed; an open (or NaN) finite endpoint
    /// fails with [`Error::InvalidInterval`] before anything is read.
    /// Infinite endpoints leave that side unbounded regardless of closure.
    pub fn time_samples_in_interval(&self, interval: &Interval) -> Result<Vec<Chrono>> {
        validate_interval(interval)?;
        if interval.is_empty() || self.samples.is_empty() {
            return Ok(Vec::new());
        }

        let lower = match interval.min() {
            min if min.is_finite() => Bound::Included(SampleTime::probe(min)),
            min if min < 0.0 => Bound::Unbounded,
            _ => return Ok(Vec::new()),
        };
        let upper = match interval.max() {
            max if max.is_finite() => Bound::Included(SampleTime::probe(max)),
            max if max > 0.0 => Bound::Unbounded,
            _ => return Ok(Vec::new()),
        };

        Ok(self
            .samples
            .range((lower, upper))
            .map(|(k, _)| k.get())
            .collect())
    }

    /// Pair of sample times surrounding `time`.
    ///
    /// - no samples, or NaN query: `None`
    /// - `time` equal to a sample `t`: `(t, t)`
    /// - `time` before the first sample: `(first, first)`
    /// - `time` after the last sample: `(last, last)`
    /// - otherwise the nearest samples strictly below and above `time`
    pub fn bracketing_time_samples(&self, time: Chrono) -> Option<Bracket> {
        if time.is_nan() {
            return None;
        }
        let probe = SampleTime::probe(time);
        let below = self.samples.range(..=probe).next_back().map(|(k, _)| k.get());
        let above = self.samples.range(probe..).next().map(|(k, _)| k.get());

        match (below, above) {
            (Some(lo), Some(hi)) => Some(Bracket::new(lo, hi)),
            (None, Some(hi)) => Some(Bracket::exact(hi)),
            (Some(lo), None) => Some(Bracket::exact(lo)),
            (None, None) => None,
        }
    }

    /// Bracketing lookup at a time code.
    ///
    /// `EarliestTime` resolves to the first sample; `Default` has no
    /// numeric value and fails with [`Error::InvalidOperation`].
    pub fn bracketing_at(&self, time: TimeCode) -> Result<Option<Bracket>> {
        Ok(self.bracketing_time_samples(time.value()?))
    }
}

impl<V> Default for TimeSamples<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject intervals with a finite open endpoint.
pub(crate) fn validate_interval(interval: &Interval) -> Result<()> {
    if interval.has_open_finite_endpoint() {
        tracing::warn!(%interval, "rejecting interval with open finite endpoint");
        return Err(Error::InvalidInterval(*interval));
    }
    Ok(())
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::Error as _;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<V: Serialize> Serialize for TimeSamples<V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for sample in self.iter() {
                seq.serialize_element(&sample)?;
            }
            seq.end()
        }
    }

    impl<'de, V: Deserialize<'de>> Deserialize<'de> for TimeSamples<V> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
            let pairs = Vec::<(Chrono, V)>::deserialize(deserializer)?;
            TimeSamples::from_samples(pairs).map_err(D::Error::custom)
        }
    }
}
