//! # Time samples
//!
//! Time codes and per-attribute time sample storage for animated values.
//!
//! A [`TimeCode`](core::TimeCode) names a point on the time axis or one of
//! two sentinels (`Default`, `EarliestTime`). A
//! [`TimeSamples`](core::TimeSamples) store keeps the samples of one
//! attribute ordered by time and answers enumeration, interval and
//! bracketing queries for interpolating readers.
//!
//! ## Modules
//!
//! - [`util`] - Basic types (time scalar, intervals, errors)
//! - [`core`] - Time codes, sample stores and per-attribute records
//!
//! ## Features
//!
//! - `serde` - `Serialize`/`Deserialize` for time codes, intervals and stores
//!
//! ## Example
//!
//! ```
//! use timesamples::prelude::*;
//!
//! let mut samples = TimeSamples::new();
//! samples.set(1.0, "a")?;
//! samples.set(2.0, "b")?;
//!
//! assert_eq!(samples.bracketing_time_samples(1.5), Some(Bracket::new(1.0, 2.0)));
//! assert_eq!(samples.bracketing_at(TimeCode::EarliestTime)?, Some(Bracket::exact(1.0)));
//! assert_eq!(samples.time_samples_in_interval(&Interval::closed(0.0, 1.0))?, vec![1.0]);
//! # Ok::<(), timesamples::Error>(())
//! ```

pub mod util;
pub mod core;

// Re-export commonly used types
pub use util::{Chrono, Error, Interval, Result};
pub use crate::core::{Bracket, SampleLayer, TimeCode, TimeSamples};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Chrono, Error, Interval, Result};
    pub use crate::core::{Bracket, SampleLayer, SampleTime, TimeCode, TimeSamples};
}
