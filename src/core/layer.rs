//! Per-attribute time sample records.
//!
//! A [`SampleLayer`] owns one [`TimeSamples`] store per attribute path. A
//! record exists only while its attribute has at least one sample: it is
//! created by the first successful write and dropped when the last sample
//! is erased or the attribute is removed.

use std::collections::{BTreeSet, HashMap};

use super::sample::{Bracket, SampleTime};
use super::time_samples::{validate_interval, TimeSamples};
use crate::util::{Chrono, Interval, Result};

/// Time sample records keyed by attribute path.
#[derive(Clone, Debug)]
pub struct SampleLayer<V> {
    records: HashMap<String, TimeSamples<V>>,
}

impl<V> SampleLayer<V> {
    /// Create an empty layer.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Write a sample for `path`, creating its record if needed.
    ///
    /// A failed write leaves the layer untouched, including not creating
    /// an empty record.
    pub fn set_time_sample(&mut self, path: &str, time: Chrono, value: V) -> Result<Option<V>> {
        if let Some(samples) = self.records.get_mut(path) {
            return samples.set(time, value);
        }
        let mut samples = TimeSamples::new();
        samples.set(time, value)?;
        tracing::debug!(path, "created time samples record");
        self.records.insert(path.to_string(), samples);
        Ok(None)
    }

    /// Value stored for `path` exactly at `time`.
    pub fn query_time_sample(&self, path: &str, time: Chrono) -> Option<&V> {
        self.records.get(path)?.get(time)
    }

    /// Remove the sample at `time`, dropping the record if it was the last.
    pub fn erase_time_sample(&mut self, path: &str, time: Chrono) -> Option<V> {
        let samples = self.records.get_mut(path)?;
        let removed = samples.erase(time);
        if samples.is_empty() {
            self.records.remove(path);
            tracing::debug!(path, "dropped empty time samples record");
        }
        removed
    }

    /// Remove the whole record of `path`.
    pub fn remove_attribute(&mut self, path: &str) -> Option<TimeSamples<V>> {
        let removed = self.records.remove(path);
        if removed.is_some() {
            tracing::debug!(path, "removed attribute time samples");
        }
        removed
    }

    /// Check if `path` has a time samples record.
    #[inline]
    pub fn has_time_samples(&self, path: &str) -> bool {
        self.records.contains_key(path)
    }

    /// Borrow the store of `path`.
    #[inline]
    pub fn time_samples(&self, path: &str) -> Option<&TimeSamples<V>> {
        self.records.get(path)
    }

    /// Number of samples of `path` (0 without a record).
    pub fn num_time_samples_for_path(&self, path: &str) -> usize {
        self.records.get(path).map_or(0, TimeSamples::len)
    }

    /// Sample times of `path`, ascending.
    pub fn list_time_samples_for_path(&self, path: &str) -> Vec<Chrono> {
        self.records
            .get(path)
            .map(TimeSamples::list_time_samples)
            .unwrap_or_default()
    }

    /// Sample times of `path` inside `interval`.
    ///
    /// The interval is validated before the record is looked up.
    pub fn time_samples_in_interval(&self, path: &str, interval: &Interval) -> Result<Vec<Chrono>> {
        validate_interval(interval)?;
        match self.records.get(path) {
            Some(samples) => samples.time_samples_in_interval(interval),
            None => Ok(Vec::new()),
        }
    }

    /// Samples of `path` surrounding `time`.
    pub fn bracketing_time_samples_for_path(&self, path: &str, time: Chrono) -> Option<Bracket> {
        self.records.get(path)?.bracketing_time_samples(time)
    }

    /// Union of the sample times of every attribute, ascending.
    pub fn list_all_time_samples(&self) -> Vec<Chrono> {
        let all: BTreeSet<SampleTime> = self
            .records
            .values()
            .flat_map(|samples| samples.times())
            .filter_map(SampleTime::new)
            .collect();
        all.into_iter().map(SampleTime::get).collect()
    }

    /// Attribute paths that have time samples, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.records.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Number of attributes with time samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<V> Default for SampleLayer<V> {
    fn default() -> Self {
        Self::new()
    }
}
