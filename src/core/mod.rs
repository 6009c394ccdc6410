//! Core layer - time codes and time sample storage.
//!
//! This module provides:
//! - [`TimeCode`] - Point on the time axis with `Default` / `EarliestTime` sentinels
//! - [`TimeSamples`] - Ordered `(time, value)` samples of one attribute
//! - [`SampleLayer`] - Per-attribute time sample records
//! - [`Bracket`] / [`SampleTime`] - Lookup result and map key types

mod time_code;
mod sample;
mod time_samples;
mod layer;

pub use time_code::TimeCode;
pub use sample::{Bracket, SampleTime};
pub use time_samples::TimeSamples;
pub use layer::SampleLayer;
