//! Utility types and functions for time samples.
//!
//! This module contains fundamental types used throughout the library:
//! - [`Chrono`] - Time scalar and float helpers
//! - [`Interval`] - Time interval with open/closed endpoints
//! - [`Error`] / [`Result`] - Error handling

mod error;
mod interval;
mod math;

pub use error::*;
pub use interval::*;
pub use math::*;
