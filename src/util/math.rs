//! Time scalar type and floating-point helpers.
//!
//! Sample times are plain `f64` values. Everything that orders or hashes
//! them goes through [`canonical`] so that `-0.0` and `0.0` are the same
//! time, and through [`cmp_time`] so that ordering is total.

use std::cmp::Ordering;

/// Chrono type - time value on the time axis.
pub type Chrono = f64;

/// Fold `-0.0` onto `0.0`; every other value is returned unchanged.
#[inline]
pub fn canonical(t: Chrono) -> Chrono {
    if t == 0.0 {
        0.0
    } else {
        t
    }
}

/// Total order on times, consistent with `==` for all non-NaN values.
#[inline]
pub fn cmp_time(a: Chrono, b: Chrono) -> Ordering {
    canonical(a).total_cmp(&canonical(b))
}

/// Distance from `|x|` to the next larger representable double.
///
/// Returns NaN for non-finite input. At `f64::MAX` the gap below is used.
pub fn ulp(x: Chrono) -> Chrono {
    if !x.is_finite() {
        return Chrono::NAN;
    }
    let a = x.abs();
    if a == Chrono::MAX {
        return a - Chrono::from_bits(a.to_bits() - 1);
    }
    Chrono::from_bits(a.to_bits() + 1) - a
}
