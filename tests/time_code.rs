//! Integration tests for time code ordering, hashing and safe steps.

use std::collections::HashSet;

use timesamples::util::ulp;
use timesamples::{Error, TimeCode};

#[test]
fn test_sentinels_compare_equal() {
    let default1 = TimeCode::Default;
    let default2 = TimeCode::default();
    assert_eq!(default1, default2);
    assert_eq!(TimeCode::EarliestTime, TimeCode::EarliestTime);
    assert_eq!(default1, TimeCode::from(default1));

    let non_special = TimeCode::new(24.0);
    assert_ne!(default1, non_special);
    assert_ne!(TimeCode::EarliestTime, non_special);
}

#[test]
fn test_total_order_across_kinds() {
    let codes = [
        TimeCode::Default,
        TimeCode::EarliestTime,
        TimeCode::new(-1e300),
        TimeCode::new(-1.0),
        TimeCode::new(0.0),
        TimeCode::new(1.0),
        TimeCode::new(2.0),
        TimeCode::new(1e300),
    ];
    for (i, a) in codes.iter().enumerate() {
        for (j, b) in codes.iter().enumerate() {
            assert_eq!(a < b, i < j, "{a} < {b}");
            assert_eq!(a == b, i == j, "{a} == {b}");
            assert_eq!(a > b, i > j, "{a} > {b}");
        }
    }
}

#[test]
fn test_hash_consistent_with_eq() {
    let set: HashSet<TimeCode> = [
        TimeCode::Default,
        TimeCode::Default,
        TimeCode::EarliestTime,
        TimeCode::EarliestTime,
        TimeCode::new(1.234),
        TimeCode::new(1.234),
        TimeCode::new(0.0),
        TimeCode::new(-0.0),
        TimeCode::new(2.0),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 5);
    assert!(set.contains(&TimeCode::new(1.234)));
    assert!(set.contains(&TimeCode::EarliestTime));
}

#[test]
fn test_default_has_no_value() {
    assert!(matches!(TimeCode::Default.value(), Err(Error::InvalidOperation(_))));
    assert_eq!(TimeCode::EarliestTime.value(), Ok(TimeCode::EARLIEST_TIME_VALUE));
    assert!(TimeCode::EARLIEST_TIME_VALUE < -1e300);
}

#[test]
fn test_safe_step_scoped_to_max_value() {
    let d = TimeCode::safe_step();
    assert!(TimeCode::new(1e6 + d) != 1e6 && TimeCode::new(1e6 + d) > 1e6);
    // aliases at this scale
    assert!(TimeCode::new(1e12 + d) == 1e12);

    let d = TimeCode::safe_step_for(1e12);
    assert!(TimeCode::new(1e12 + d) != 1e12);
}

#[test]
fn test_safe_step_exceeds_precision() {
    for max_value in [1.0, 1e3, 1e6, 1e9, 1e12] {
        let d = TimeCode::safe_step_for(max_value);
        assert!(d >= 2.0 * ulp(max_value), "max_value {max_value}");
        assert!(max_value + d > max_value);
    }
}

#[test]
fn test_safe_step_survives_rescaling() {
    let d = TimeCode::safe_step();

    // twice the max, scaled down by the max compression, shifted back out
    let (t1, t2) = ((1e6 * 2.0) / 10.0, (1e6 * 2.0 + d) / 10.0);
    assert!(t1 != t2 && t1 < t2);
    assert!((t1 + 1800000.0) != (t2 + 1800000.0) && (t1 + 1800000.0) < (t2 + 1800000.0));

    // the max, scaled down by twice the max compression, shifted back out
    let (t1, t2) = (1e6 / 20.0, (1e6 + d) / 20.0);
    assert!(t1 != t2 && t1 < t2);
    assert!((t1 + 950000.0) != (t2 + 950000.0) && (t1 + 950000.0) < (t2 + 950000.0));
}

#[test]
fn test_round_trip_through_text() {
    for code in [
        TimeCode::Default,
        TimeCode::EarliestTime,
        TimeCode::new(24.0),
        TimeCode::new(-0.5),
    ] {
        let parsed: TimeCode = code.to_string().parse().unwrap();
        assert_eq!(parsed, code);
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_time_code() {
    let json = serde_json::to_string(&TimeCode::EarliestTime).unwrap();
    let back: TimeCode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, TimeCode::EarliestTime);

    let json = serde_json::to_string(&TimeCode::new(1.5)).unwrap();
    let back: TimeCode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, 1.5);
}
